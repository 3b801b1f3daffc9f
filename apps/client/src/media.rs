//! Media resolution for content previews, with one-shot placeholder recovery.
//!
//! A `MediaSlot` owns the fallback state for exactly one rendered media block.
//! Replacing its source resets that state, so every new candidate URL gets a
//! fresh attempt.

use rand::Rng;
use tracing::{debug, warn};
use url::Url;

/// Host of the placeholder image service used after a load failure.
pub const FALLBACK_HOST: &str = "loremflickr.com";
const FALLBACK_BASE: &str = "https://loremflickr.com/1024/1024";
const DEFAULT_KEYWORD: &str = "product";

/// What a preview should display for one media block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDescriptor {
    /// No candidate URL; terminal, never retried.
    NoMedia,
    Video {
        src: String,
        autoplay: bool,
        looped: bool,
        muted: bool,
    },
    Image {
        src: String,
        /// True once the source was replaced by a placeholder.
        is_fallback: bool,
    },
}

#[derive(Debug, Clone)]
pub struct MediaSlot {
    source: Option<String>,
    current: Option<String>,
    video_hint: bool,
    keyword: String,
}

impl MediaSlot {
    pub fn new(candidate: Option<&str>, video_hint: bool, keyword: &str) -> Self {
        let source = normalize(candidate);
        Self {
            current: source.clone(),
            source,
            video_hint,
            keyword: keyword.to_string(),
        }
    }

    /// Replaces the candidate URL. A different source discards any fallback.
    pub fn set_source(&mut self, candidate: Option<&str>) {
        let source = normalize(candidate);
        if source != self.source {
            debug!(?source, "media source changed, fallback state reset");
            self.current = source.clone();
            self.source = source;
        }
    }

    pub fn descriptor(&self) -> MediaDescriptor {
        let Some(src) = self.current.as_deref() else {
            return MediaDescriptor::NoMedia;
        };

        if self.video_hint || src.ends_with(".mp4") {
            return MediaDescriptor::Video {
                src: src.to_string(),
                autoplay: true,
                looped: true,
                muted: true,
            };
        }

        MediaDescriptor::Image {
            src: src.to_string(),
            is_fallback: is_fallback_url(src),
        }
    }

    /// Reacts to a failed load of the current source.
    ///
    /// Returns `true` if a placeholder was substituted. Videos, empty slots and
    /// sources that already point at the placeholder service are left alone.
    pub fn handle_load_error(&mut self) -> bool {
        self.handle_load_error_with(&mut rand::rng())
    }

    pub fn handle_load_error_with<R: Rng>(&mut self, rng: &mut R) -> bool {
        let failed = match self.descriptor() {
            MediaDescriptor::Image { src, is_fallback } if !is_fallback => src,
            _ => return false,
        };

        match fallback_url(&self.keyword, rng.random_range(0..1000)) {
            Ok(url) => {
                warn!(%failed, fallback = %url, "image failed to load, substituting placeholder");
                self.current = Some(url);
                true
            }
            Err(e) => {
                warn!("could not build placeholder URL: {e}");
                false
            }
        }
    }
}

fn normalize(candidate: Option<&str>) -> Option<String> {
    candidate
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

pub fn is_fallback_url(src: &str) -> bool {
    src.contains(FALLBACK_HOST)
}

/// Builds the placeholder query: whitespace runs in `keyword` become commas,
/// an empty keyword becomes `product`, `nonce` busts caches.
pub fn fallback_url(keyword: &str, nonce: u32) -> Result<String, url::ParseError> {
    let terms = keyword.split_whitespace().collect::<Vec<_>>().join(",");
    let terms = if terms.is_empty() {
        DEFAULT_KEYWORD.to_string()
    } else {
        terms
    };

    let mut url = Url::parse(FALLBACK_BASE)?;
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&terms);
    }
    url.query_pairs_mut()
        .append_pair("random", &nonce.to_string());
    Ok(url.into())
}
