//! Input-boundary checks for the three page forms.
//!
//! Orchestrators assume a validated form; callers run `validate()` first.

use serde::{Deserialize, Serialize};

use crate::errors::FormError;
use crate::models::lead::URGENCY_LEVELS;
use crate::models::pitch::PITCH_TONES;
use crate::models::{CampaignForm, LeadForm, PitchForm};

/// Platforms offered by the campaign page, in display order.
pub const OFFERED_PLATFORMS: &[&str] = &[
    "LinkedIn",
    "Twitter",
    "Instagram",
    "Facebook",
    "Marketing Poster",
];

const DEFAULT_PLATFORMS: &[&str] = &["LinkedIn", "Twitter", "Instagram"];

pub trait RequiredFields {
    /// Names of required fields that are empty after trimming.
    fn missing_fields(&self) -> Vec<&'static str>;

    fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

fn collect_missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

impl RequiredFields for CampaignForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("product_name", self.product_name.as_str()),
            ("product_description", self.product_description.as_str()),
            ("target_audience", self.target_audience.as_str()),
        ])
    }
}

impl RequiredFields for PitchForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("product_name", self.product_name.as_str()),
            ("industry", self.industry.as_str()),
            ("persona", self.persona.as_str()),
            ("product_description", self.product_description.as_str()),
        ])
    }
}

impl RequiredFields for LeadForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        collect_missing(&[
            ("name", self.name.as_str()),
            ("company", self.company.as_str()),
            ("budget", self.budget.as_str()),
            ("needs", self.needs.as_str()),
        ])
    }
}

/// Ensures `value` is one of the select options for `field`.
pub fn check_choice(
    field: &'static str,
    value: &str,
    options: &[&str],
) -> Result<(), FormError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(FormError::InvalidChoice {
            field,
            value: value.to_string(),
        })
    }
}

pub fn check_pitch_tone(form: &PitchForm) -> Result<(), FormError> {
    check_choice("tone", &form.tone, PITCH_TONES)
}

pub fn check_urgency(form: &LeadForm) -> Result<(), FormError> {
    check_choice("urgency", &form.urgency, URGENCY_LEVELS)
}

/// Multi-select set of target platforms for a campaign.
///
/// Serializes as a plain list. Insertion order is kept but callers must
/// not rely on it. Deserializing drops repeated entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PlatformSelection(Vec<String>);

impl Default for PlatformSelection {
    fn default() -> Self {
        Self(DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect())
    }
}

impl PlatformSelection {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, platform: &str) -> bool {
        self.0.iter().any(|p| p == platform)
    }

    /// Checkbox semantics: checking adds, unchecking removes. Both are idempotent.
    pub fn set(&mut self, platform: &str, checked: bool) {
        if checked {
            if !self.contains(platform) {
                self.0.push(platform.to_string());
            }
        } else {
            self.0.retain(|p| p != platform);
        }
    }

    pub fn toggle(&mut self, platform: &str) {
        let checked = !self.contains(platform);
        self.set(platform, checked);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PlatformSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::empty();
        for platform in iter {
            selection.set(&platform.into(), true);
        }
        selection
    }
}

impl From<Vec<String>> for PlatformSelection {
    fn from(platforms: Vec<String>) -> Self {
        platforms.into_iter().collect()
    }
}

impl From<PlatformSelection> for Vec<String> {
    fn from(selection: PlatformSelection) -> Self {
        selection.0
    }
}
