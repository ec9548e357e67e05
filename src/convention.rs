//! Commit message convention detection.
//!
//! Classifies a message's first line as a conventional commit
//! (`type(scope): description`), a gitmoji message (leading emoji glyph or
//! `:shortcode:`), or neither. A message matches at most one convention;
//! conventional-commit syntax is checked first.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static CONVENTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z][a-z0-9]*)(?:\(([^)]+)\))?!?:\s").expect("invalid regex"));

static SHORTCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(:[a-z0-9_+-]+:)").expect("invalid regex"));

/// Outcome of classifying a single message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Conventional { ctype: String, scope: Option<String> },
    Gitmoji { emoji: String },
    Plain,
}

/// Aggregated convention usage over a list of messages.
///
/// The two flags are independent; a repository can use both conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConventionSummary {
    pub conventional_commits: bool,
    pub gitmoji: bool,
    /// Occurrence counts per conventional type or emoji.
    pub prefixes: BTreeMap<String, u64>,
}

/// Classify the first line of a commit or PR message.
#[must_use]
pub fn parse_message(line: &str) -> MessageKind {
    let line = line.trim_start();

    if let Some(caps) = CONVENTIONAL_RE.captures(line) {
        return MessageKind::Conventional {
            ctype: caps[1].to_owned(),
            scope: caps.get(2).map(|m| m.as_str().to_owned()),
        };
    }

    if let Some(caps) = SHORTCODE_RE.captures(line) {
        return MessageKind::Gitmoji { emoji: caps[1].to_owned() };
    }

    if let Some(first) = line.chars().next()
        && is_emoji(first)
    {
        return MessageKind::Gitmoji { emoji: first.to_string() };
    }

    MessageKind::Plain
}

/// Aggregate convention usage across first lines of a message list.
pub fn detect_conventions<'a>(messages: impl IntoIterator<Item = &'a str>) -> ConventionSummary {
    let mut summary = ConventionSummary::default();

    for message in messages {
        let first_line = message.lines().next().unwrap_or_default();
        match parse_message(first_line) {
            MessageKind::Conventional { ctype, .. } => {
                summary.conventional_commits = true;
                *summary.prefixes.entry(ctype).or_insert(0) += 1;
            }
            MessageKind::Gitmoji { emoji } => {
                summary.gitmoji = true;
                *summary.prefixes.entry(emoji).or_insert(0) += 1;
            }
            MessageKind::Plain => {}
        }
    }

    summary
}

/// Whether a character falls in the Unicode blocks gitmoji draws from.
fn is_emoji(c: char) -> bool {
    matches!(u32::from(c),
        0x1F300..=0x1F5FF   // symbols & pictographs
        | 0x1F600..=0x1F64F // emoticons
        | 0x1F680..=0x1F6FF // transport & map
        | 0x1F900..=0x1FAFF // supplemental symbols
        | 0x2600..=0x26FF   // miscellaneous symbols
        | 0x2700..=0x27BF   // dingbats
        | 0x2B00..=0x2BFF   // arrows & symbols (stars)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conventional_simple() {
        assert_eq!(
            parse_message("feat: add pagination"),
            MessageKind::Conventional {
                ctype: "feat".into(),
                scope: None
            }
        );
    }

    #[test]
    fn test_parse_conventional_with_scope() {
        assert_eq!(
            parse_message("fix(client): handle 409"),
            MessageKind::Conventional {
                ctype: "fix".into(),
                scope: Some("client".into())
            }
        );
    }

    #[test]
    fn test_parse_conventional_breaking_marker() {
        assert_eq!(
            parse_message("feat(api)!: drop v1 endpoints"),
            MessageKind::Conventional {
                ctype: "feat".into(),
                scope: Some("api".into())
            }
        );
    }

    #[test]
    fn test_parse_requires_space_after_colon() {
        assert_eq!(parse_message("feat:nospace"), MessageKind::Plain);
    }

    #[test]
    fn test_parse_uppercase_not_conventional() {
        assert_eq!(parse_message("Fixed: the thing"), MessageKind::Plain);
    }

    #[test]
    fn test_parse_gitmoji_glyph() {
        assert_eq!(
            parse_message("\u{2728} add sparkle"),
            MessageKind::Gitmoji {
                emoji: "\u{2728}".into()
            }
        );
    }

    #[test]
    fn test_parse_gitmoji_shortcode() {
        assert_eq!(
            parse_message(":sparkles: add sparkle"),
            MessageKind::Gitmoji {
                emoji: ":sparkles:".into()
            }
        );
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_message("Update README"), MessageKind::Plain);
    }

    #[test]
    fn test_conventional_wins_over_gitmoji() {
        // A message can only count for one convention; conventional first.
        assert_eq!(
            parse_message("feat: \u{2728} sparkle"),
            MessageKind::Conventional {
                ctype: "feat".into(),
                scope: None
            }
        );
    }

    #[test]
    fn test_detect_conventions_counts() {
        let summary = detect_conventions(["feat: one", "fix: two", "feat: three"]);
        assert!(summary.conventional_commits);
        assert!(!summary.gitmoji);
        assert_eq!(summary.prefixes.get("feat"), Some(&2));
        assert_eq!(summary.prefixes.get("fix"), Some(&1));
    }

    #[test]
    fn test_detect_conventions_both_styles() {
        let summary = detect_conventions(["feat: one", "\u{1F41B} fix bug", "plain message"]);
        assert!(summary.conventional_commits);
        assert!(summary.gitmoji);
        assert_eq!(summary.prefixes.len(), 2);
    }

    #[test]
    fn test_detect_conventions_empty() {
        let summary = detect_conventions([]);
        assert!(!summary.conventional_commits);
        assert!(!summary.gitmoji);
        assert!(summary.prefixes.is_empty());
    }

    #[test]
    fn test_detect_conventions_uses_first_line_only() {
        let summary = detect_conventions(["plain subject\n\nfeat: not a prefix"]);
        assert!(!summary.conventional_commits);
    }

    #[test]
    fn test_is_emoji_rejects_ascii() {
        assert!(!is_emoji('f'));
        assert!(!is_emoji(':'));
    }
}
