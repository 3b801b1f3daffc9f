use serde::{Deserialize, Serialize};

/// Tones offered by the pitch page.
pub const PITCH_TONES: &[&str] = &["Professional", "Friendly", "Urgent", "Persuasive"];

/// Form snapshot posted to `/pitch/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchForm {
    pub product_name: String,
    pub product_description: String,
    pub persona: String,
    pub industry: String,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl Default for PitchForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_description: String::new(),
            persona: String::new(),
            industry: String::new(),
            tone: default_tone(),
        }
    }
}

fn default_tone() -> String {
    PITCH_TONES[0].to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchVariant {
    pub variant_type: String,
    #[serde(default)]
    pub subject_line: Option<String>,
    pub content: String,
    #[serde(default)]
    pub xai_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchResult {
    #[serde(default)]
    pub pitch_id: Option<String>,
    pub strategy_explanation: String,
    #[serde(default)]
    pub variants: Vec<PitchVariant>,
}
