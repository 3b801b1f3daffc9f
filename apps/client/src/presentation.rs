//! Platform presentation selector — maps a generated content item to exactly
//! one preview variant.
//!
//! Match order is fixed: `instagram` → `linkedin` → anything containing
//! `poster` → microblog. The first two are exact (case-insensitive), so
//! `"Instagram Poster"` is still a poster but `"instagram"` never is.

use tracing::debug;

use crate::media::MediaSlot;
use crate::models::GeneratedContentItem;
use crate::poster::PosterCopy;

// ────────────────────────────────────────────────────────────────────────────
// Brand chrome shared by the mockups
// ────────────────────────────────────────────────────────────────────────────

pub const SOCIAL_USERNAME: &str = "MarketMind_AI";
pub const SOCIAL_ACTIONS: &[&str] = &["Like", "Comment", "Share"];

pub const PROFESSIONAL_AVATAR: &str = "MM";
pub const PROFESSIONAL_NAME: &str = "MarketMind AI Platform";
pub const PROFESSIONAL_BYLINE: &str = "12,453 followers • Just now • 🌐";
pub const PROFESSIONAL_ACTIONS: &[&str] = &["Like", "Comment", "Repost", "Send"];

pub const MICROBLOG_NAME: &str = "MarketMind";
pub const MICROBLOG_HANDLE: &str = "@MarketMindAI";

// ────────────────────────────────────────────────────────────────────────────
// Variant selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    SocialFeed,
    ProfessionalFeed,
    Poster,
    Microblog,
}

impl PresentationKind {
    /// Label of the rationale box, `None` for variants that do not show one.
    pub fn rationale_label(self) -> Option<&'static str> {
        match self {
            PresentationKind::SocialFeed => Some("AI Strategy"),
            PresentationKind::ProfessionalFeed => Some("Why this works"),
            PresentationKind::Poster => None,
            PresentationKind::Microblog => Some("Rationale"),
        }
    }
}

/// Classifies a platform name. Total: unknown platforms fall through to the
/// microblog layout.
pub fn classify(platform: &str) -> PresentationKind {
    let platform = platform.to_lowercase();

    match platform.as_str() {
        "instagram" => PresentationKind::SocialFeed,
        "linkedin" => PresentationKind::ProfessionalFeed,
        p if p.contains("poster") => PresentationKind::Poster,
        _ => PresentationKind::Microblog,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameterized variants
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationaleBox {
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct SocialFeedCard {
    pub username: &'static str,
    pub media: MediaSlot,
    pub actions: &'static [&'static str],
    pub caption: String,
    pub hashtags: String,
    pub rationale: RationaleBox,
}

#[derive(Debug, Clone)]
pub struct ProfessionalFeedCard {
    pub avatar: &'static str,
    pub name: &'static str,
    pub byline: &'static str,
    pub body: String,
    pub hashtags: String,
    pub media: MediaSlot,
    pub actions: &'static [&'static str],
    pub rationale: RationaleBox,
}

#[derive(Debug, Clone)]
pub struct PosterCard {
    /// Full-bleed background.
    pub media: MediaSlot,
    pub copy: PosterCopy,
}

#[derive(Debug, Clone)]
pub struct MicroblogCard {
    pub name: &'static str,
    pub handle: &'static str,
    pub body: String,
    pub hashtags: String,
    /// Present only when the item carries a media URL.
    pub media: Option<MediaSlot>,
    pub rationale: RationaleBox,
}

#[derive(Debug, Clone)]
pub enum Presentation {
    SocialFeed(SocialFeedCard),
    ProfessionalFeed(ProfessionalFeedCard),
    Poster(PosterCard),
    Microblog(MicroblogCard),
}

impl Presentation {
    pub fn kind(&self) -> PresentationKind {
        match self {
            Presentation::SocialFeed(_) => PresentationKind::SocialFeed,
            Presentation::ProfessionalFeed(_) => PresentationKind::ProfessionalFeed,
            Presentation::Poster(_) => PresentationKind::Poster,
            Presentation::Microblog(_) => PresentationKind::Microblog,
        }
    }

    /// The media block of this card, for routing load-failure events.
    pub fn media_mut(&mut self) -> Option<&mut MediaSlot> {
        match self {
            Presentation::SocialFeed(card) => Some(&mut card.media),
            Presentation::ProfessionalFeed(card) => Some(&mut card.media),
            Presentation::Poster(card) => Some(&mut card.media),
            Presentation::Microblog(card) => card.media.as_mut(),
        }
    }
}

/// Builds the preview for one item. `keyword` seeds placeholder media
/// (normally the product name of the submitted form).
pub fn select(item: &GeneratedContentItem, keyword: &str) -> Presentation {
    let kind = classify(&item.platform);
    debug!(platform = %item.platform, ?kind, "selected presentation");

    let media_url = item.media_url.as_deref();
    let rationale = |kind: PresentationKind| RationaleBox {
        label: kind.rationale_label().unwrap_or_default(),
        text: item.xai_explanation.clone(),
    };

    match kind {
        PresentationKind::SocialFeed => Presentation::SocialFeed(SocialFeedCard {
            username: SOCIAL_USERNAME,
            media: MediaSlot::new(media_url, item.wants_video(), keyword),
            actions: SOCIAL_ACTIONS,
            caption: item.content.clone(),
            hashtags: item.hashtag_line(),
            rationale: rationale(kind),
        }),
        PresentationKind::ProfessionalFeed => {
            Presentation::ProfessionalFeed(ProfessionalFeedCard {
                avatar: PROFESSIONAL_AVATAR,
                name: PROFESSIONAL_NAME,
                byline: PROFESSIONAL_BYLINE,
                body: item.content.clone(),
                hashtags: item.hashtag_line(),
                media: MediaSlot::new(media_url, false, keyword),
                actions: PROFESSIONAL_ACTIONS,
                rationale: rationale(kind),
            })
        }
        PresentationKind::Poster => Presentation::Poster(PosterCard {
            media: MediaSlot::new(media_url, false, keyword),
            copy: PosterCopy::parse(&item.content),
        }),
        PresentationKind::Microblog => {
            let media = MediaSlot::new(media_url, item.wants_video(), keyword);
            let has_media = media.descriptor() != crate::media::MediaDescriptor::NoMedia;
            Presentation::Microblog(MicroblogCard {
                name: MICROBLOG_NAME,
                handle: MICROBLOG_HANDLE,
                body: item.content.clone(),
                hashtags: item.hashtag_line(),
                media: has_media.then_some(media),
                rationale: rationale(kind),
            })
        }
    }
}
