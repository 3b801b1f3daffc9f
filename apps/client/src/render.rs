//! Plain-text rendering of previews for the terminal.

use std::fmt::{self, Display, Formatter};

use crate::media::{MediaDescriptor, MediaSlot};
use crate::models::{CampaignResult, PitchResult};
use crate::orchestrator::RequestState;
use crate::presentation::{self, Presentation, RationaleBox};
use crate::scorecard::{Scorecard, REASONING_LABEL};

const RULE: &str = "────────────────────────────────────────";

impl Display for MediaDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaDescriptor::NoMedia => write!(f, "[No Media]"),
            MediaDescriptor::Video { src, .. } => write!(f, "[video ▶ loop, muted] {src}"),
            MediaDescriptor::Image { src, is_fallback } => {
                if *is_fallback {
                    write!(f, "[image, placeholder] {src}")
                } else {
                    write!(f, "[image] {src}")
                }
            }
        }
    }
}

impl Display for RationaleBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ┆ {}", self.label)?;
        for line in self.text.lines() {
            writeln!(f, "  ┆ {line}")?;
        }
        Ok(())
    }
}

fn write_media(f: &mut Formatter<'_>, media: &MediaSlot) -> fmt::Result {
    writeln!(f, "  {}", media.descriptor())
}

fn write_body(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
    for line in text.lines() {
        writeln!(f, "  {line}")?;
    }
    Ok(())
}

impl Display for Presentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Presentation::SocialFeed(card) => {
                writeln!(f, "◉ {}", card.username)?;
                write_media(f, &card.media)?;
                writeln!(f, "  {}", card.actions.join("  "))?;
                writeln!(f, "  {}", card.username)?;
                write_body(f, &card.caption)?;
                writeln!(f, "  {}", card.hashtags)?;
                write!(f, "{}", card.rationale)
            }
            Presentation::ProfessionalFeed(card) => {
                writeln!(f, "({}) {}", card.avatar, card.name)?;
                writeln!(f, "     {}", card.byline)?;
                write_body(f, &card.body)?;
                writeln!(f)?;
                writeln!(f, "  {}", card.hashtags)?;
                write_media(f, &card.media)?;
                let buttons: Vec<String> = card.actions.iter().map(|a| format!("[{a}]")).collect();
                writeln!(f, "  {}", buttons.join(" "))?;
                write!(f, "{}", card.rationale)
            }
            Presentation::Poster(card) => {
                writeln!(f, "▣ Poster")?;
                write_media(f, &card.media)?;
                writeln!(f, "  {}", card.copy.headline.to_uppercase())?;
                if !card.copy.subhead.is_empty() {
                    writeln!(f, "  {}", card.copy.subhead)?;
                }
                writeln!(f, "  [ {} ]", card.copy.cta)
            }
            Presentation::Microblog(card) => {
                writeln!(f, "◎ {} {}", card.name, card.handle)?;
                write_body(f, &card.body)?;
                writeln!(f, "  {}", card.hashtags)?;
                if let Some(media) = &card.media {
                    write_media(f, media)?;
                }
                write!(f, "{}", card.rationale)
            }
        }
    }
}

/// A generated campaign with one selected presentation per content item.
#[derive(Debug, Clone)]
pub struct CampaignPreview {
    pub strategy_explanation: String,
    pub cards: Vec<Presentation>,
}

impl CampaignPreview {
    pub fn build(result: &CampaignResult, keyword: &str) -> Self {
        Self {
            strategy_explanation: result.strategy_explanation.clone(),
            cards: result
                .generated_content
                .iter()
                .map(|item| presentation::select(item, keyword))
                .collect(),
        }
    }
}

impl Display for CampaignPreview {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy Overview")?;
        writeln!(f, "{}", self.strategy_explanation)?;
        for card in &self.cards {
            writeln!(f, "{RULE}")?;
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

pub struct PitchPreview<'a>(pub &'a PitchResult);

impl Display for PitchPreview<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strategy Insight")?;
        writeln!(f, "{}", self.0.strategy_explanation)?;
        for variant in &self.0.variants {
            writeln!(f, "{RULE}")?;
            writeln!(f, "✉ {}", variant.variant_type)?;
            if let Some(subject) = variant.subject_line.as_deref().filter(|s| !s.is_empty()) {
                writeln!(f, "  Subject: {subject}")?;
            }
            write_body(f, &variant.content)?;
            write!(
                f,
                "{}",
                RationaleBox {
                    label: "Why this works",
                    text: variant.xai_explanation.clone(),
                }
            )?;
        }
        Ok(())
    }
}

impl Display for Scorecard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {} ({})", self.score, self.band.name())?;
        writeln!(f, "{}", self.headline)?;
        writeln!(f, "Conversion Probability: {}", self.conversion_probability)?;
        writeln!(f)?;
        writeln!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Recommended Actions")?;
        for action in &self.actions {
            writeln!(f, "  ✔ {action}")?;
        }
        write!(
            f,
            "{}",
            RationaleBox {
                label: REASONING_LABEL,
                text: self.reasoning.clone(),
            }
        )
    }
}

/// One-line banner for states without a result to show.
pub fn status_banner<T>(state: &RequestState<T>, busy_label: &str) -> Option<String> {
    match state {
        RequestState::Idle => None,
        RequestState::Submitting => Some(format!("{busy_label}...")),
        RequestState::Success(_) => None,
        RequestState::Failure(message) => Some(format!("✖ {message}")),
    }
}
