use serde::{Deserialize, Deserializer, Serialize};

pub const URGENCY_LEVELS: &[&str] = &["Low", "Medium", "High"];

/// Form snapshot posted to `/lead/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub company: String,
    pub budget: String,
    #[serde(default = "default_urgency")]
    pub urgency: String,
    pub needs: String,
    /// Optional; `null` or absent becomes an empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            budget: String::new(),
            urgency: default_urgency(),
            needs: String::new(),
            notes: String::new(),
        }
    }
}

fn default_urgency() -> String {
    URGENCY_LEVELS[1].to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoreResult {
    #[serde(default)]
    pub lead_id: Option<String>,
    /// 0–100.
    pub score: u8,
    pub priority: String,
    pub conversion_probability: String,
    pub qualification_summary: String,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub xai_explanation: String,
}
