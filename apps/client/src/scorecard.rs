//! Lead scorecard: maps a scored lead straight to its display fields.

use crate::models::LeadScoreResult;

const GREEN_THRESHOLD: u8 = 80;
const YELLOW_THRESHOLD: u8 = 50;

pub const REASONING_LABEL: &str = "Score Reasoning";

/// Colour band of the score indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Green,
    Yellow,
    Red,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= GREEN_THRESHOLD {
            ScoreBand::Green
        } else if score >= YELLOW_THRESHOLD {
            ScoreBand::Yellow
        } else {
            ScoreBand::Red
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreBand::Green => "green",
            ScoreBand::Yellow => "yellow",
            ScoreBand::Red => "red",
        }
    }

    /// Hex colour used by the web mockups.
    pub fn hex(self) -> &'static str {
        match self {
            ScoreBand::Green => "#10b981",
            ScoreBand::Yellow => "#f59e0b",
            ScoreBand::Red => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub score: u8,
    pub band: ScoreBand,
    pub headline: String,
    pub conversion_probability: String,
    pub summary: String,
    pub actions: Vec<String>,
    pub reasoning: String,
}

impl Scorecard {
    pub fn from_result(result: &LeadScoreResult) -> Self {
        // Scores are documented as 0–100; clamp anything above.
        let score = result.score.min(100);
        Self {
            score,
            band: ScoreBand::from_score(score),
            headline: format!("{} Priority", result.priority),
            conversion_probability: result.conversion_probability.clone(),
            summary: format!("\"{}\"", result.qualification_summary),
            actions: result.recommended_actions.clone(),
            reasoning: result.xai_explanation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u8) -> LeadScoreResult {
        LeadScoreResult {
            lead_id: Some("lead_1".into()),
            score,
            priority: "Medium".into(),
            conversion_probability: "Moderate (45%)".into(),
            qualification_summary: "Budget fits, timeline unclear".into(),
            recommended_actions: vec!["Book a demo".into(), "Send case study".into()],
            xai_explanation: "Budget matched the mid tier.".into(),
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Red);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Red);
    }

    #[test]
    fn test_score_45_renders_red() {
        let card = Scorecard::from_result(&result(45));
        assert_eq!(card.band, ScoreBand::Red);
        assert_eq!(card.band.name(), "red");
        assert_eq!(card.headline, "Medium Priority");
    }

    #[test]
    fn test_summary_is_quoted_and_actions_kept_in_order() {
        let card = Scorecard::from_result(&result(85));
        assert_eq!(card.summary, "\"Budget fits, timeline unclear\"");
        assert_eq!(card.actions, vec!["Book a demo", "Send case study"]);
        assert_eq!(card.band.hex(), "#10b981");
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let card = Scorecard::from_result(&result(140));
        assert_eq!(card.score, 100);
        assert_eq!(card.band, ScoreBand::Green);
    }
}
