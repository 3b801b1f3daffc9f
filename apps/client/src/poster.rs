//! Best-effort parser for the three-line poster copy block:
//!
//! ```text
//! HEADLINE: ...
//! SUBHEAD: ...
//! CTA: ...
//! ```
//!
//! Missing lines degrade to empty strings. A missing or blank call to action
//! becomes `LEARN MORE`. Parsing never fails.

use serde::Serialize;

pub const DEFAULT_CTA: &str = "LEARN MORE";

const HEADLINE_PREFIX: &str = "HEADLINE:";
const SUBHEAD_PREFIX: &str = "SUBHEAD:";
const CTA_PREFIX: &str = "CTA:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosterCopy {
    pub headline: String,
    pub subhead: String,
    pub cta: String,
}

impl PosterCopy {
    pub fn parse(content: &str) -> Self {
        let mut lines = content.split('\n');

        let headline = lines
            .next()
            .map(|l| strip_label(l, HEADLINE_PREFIX))
            .unwrap_or_default();
        let subhead = lines
            .next()
            .map(|l| strip_label(l, SUBHEAD_PREFIX))
            .unwrap_or_default();
        let cta = lines
            .next()
            .map(|l| strip_label(l, CTA_PREFIX))
            .filter(|cta| !cta.is_empty())
            .unwrap_or_else(|| DEFAULT_CTA.to_string());

        Self {
            headline,
            subhead,
            cta,
        }
    }
}

/// Drops a leading label and the whitespace around the remaining text.
fn strip_label(line: &str, label: &str) -> String {
    let line = line.trim();
    line.strip_prefix(label).unwrap_or(line).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_labelled_block() {
        let copy = PosterCopy::parse("HEADLINE: A\nSUBHEAD: B\nCTA: C");
        assert_eq!(
            copy,
            PosterCopy {
                headline: "A".into(),
                subhead: "B".into(),
                cta: "C".into(),
            }
        );
    }

    #[test]
    fn test_single_line_uses_defaults() {
        let copy = PosterCopy::parse("Only line");
        assert_eq!(copy.headline, "Only line");
        assert_eq!(copy.subhead, "");
        assert_eq!(copy.cta, "LEARN MORE");
    }

    #[test]
    fn test_empty_content_never_fails() {
        let copy = PosterCopy::parse("");
        assert_eq!(copy.headline, "");
        assert_eq!(copy.subhead, "");
        assert_eq!(copy.cta, DEFAULT_CTA);
    }

    #[test]
    fn test_unlabelled_lines_are_kept_verbatim() {
        let copy = PosterCopy::parse("Big Sale\nThis weekend only\nShop now");
        assert_eq!(copy.headline, "Big Sale");
        assert_eq!(copy.subhead, "This weekend only");
        assert_eq!(copy.cta, "Shop now");
    }

    #[test]
    fn test_two_lines_default_cta_only() {
        let copy = PosterCopy::parse("HEADLINE: Launch\nSUBHEAD: Today");
        assert_eq!(copy.subhead, "Today");
        assert_eq!(copy.cta, "LEARN MORE");
    }

    #[test]
    fn test_blank_cta_line_falls_back_to_default() {
        let copy = PosterCopy::parse("A\nB\nCTA:  ");
        assert_eq!(copy.cta, "LEARN MORE");
    }

    #[test]
    fn test_crlf_and_extra_lines_are_tolerated() {
        let copy = PosterCopy::parse("HEADLINE: A\r\nSUBHEAD: B\r\nCTA: C\r\nfooter");
        assert_eq!(copy.headline, "A");
        assert_eq!(copy.subhead, "B");
        assert_eq!(copy.cta, "C");
    }
}
