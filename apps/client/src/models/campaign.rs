use serde::{Deserialize, Serialize};

use crate::forms::PlatformSelection;

pub const DEFAULT_TONE: &str = "Professional";

/// Form snapshot posted to `/campaign/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignForm {
    pub product_name: String,
    pub product_description: String,
    pub target_audience: String,
    #[serde(default)]
    pub platforms: PlatformSelection,
    #[serde(default = "default_tone")]
    pub tone: String,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_description: String::new(),
            target_audience: String::new(),
            platforms: PlatformSelection::default(),
            tone: default_tone(),
        }
    }
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

/// One piece of platform-targeted content produced by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContentItem {
    pub platform: String,
    pub content: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub visual_prompt: Option<String>,
    #[serde(default)]
    pub xai_explanation: String,
}

impl GeneratedContentItem {
    /// True when the visual prompt mentions video (case-insensitive).
    pub fn wants_video(&self) -> bool {
        self.visual_prompt
            .as_deref()
            .map(|p| p.to_lowercase().contains("video"))
            .unwrap_or(false)
    }

    pub fn hashtag_line(&self) -> String {
        self.hashtags.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub strategy_explanation: String,
    #[serde(default)]
    pub generated_content: Vec<GeneratedContentItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tolerates_missing_optional_fields() {
        let json = r#"{"platform":"Twitter","content":"Ship it","xai_explanation":"short"}"#;
        let item: GeneratedContentItem = serde_json::from_str(json).unwrap();
        assert!(item.hashtags.is_empty());
        assert!(item.media_url.is_none());
        assert!(!item.wants_video());
    }

    #[test]
    fn test_null_media_url_is_absent() {
        let json = r##"{"platform":"Instagram","content":"x","hashtags":["#a"],
            "media_url":null,"visual_prompt":"Short VIDEO loop","xai_explanation":"y"}"##;
        let item: GeneratedContentItem = serde_json::from_str(json).unwrap();
        assert!(item.media_url.is_none());
        assert!(item.wants_video());
        assert_eq!(item.hashtag_line(), "#a");
    }

    #[test]
    fn test_form_defaults_match_page_defaults() {
        let form = CampaignForm::default();
        assert_eq!(form.tone, "Professional");
        assert_eq!(
            form.platforms.as_slice(),
            &["LinkedIn".to_string(), "Twitter".to_string(), "Instagram".to_string()]
        );
    }

    #[test]
    fn test_form_file_platforms_are_deduplicated() {
        let json = r#"{"product_name":"MM","product_description":"AI","target_audience":"CMOs",
            "platforms":["LinkedIn","LinkedIn","Twitter"]}"#;
        let form: CampaignForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.platforms.len(), 2);

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["platforms"], serde_json::json!(["LinkedIn", "Twitter"]));
    }

    #[test]
    fn test_form_serializes_platforms_as_list() {
        let form = CampaignForm {
            product_name: "MarketMind".into(),
            product_description: "AI marketing".into(),
            target_audience: "CMOs".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["platforms"][0], "LinkedIn");
        assert_eq!(value["tone"], "Professional");
    }
}
