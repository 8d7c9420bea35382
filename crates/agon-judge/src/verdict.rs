//! Three-valued verdicts and structured-marker parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Outcome of a judgment.
///
/// `Unknown` means the judge answered but no structured marker could be
/// extracted. Callers decide what `Unknown` means for scoring; the parser
/// never collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Unknown,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::True => write!(f, "True"),
            Verdict::False => write!(f, "False"),
            Verdict::Unknown => write!(f, "Unknown"),
        }
    }
}

fn marker_pattern() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"DID ACTION:.*(True|False|TRUE|FALSE)").expect("marker pattern is valid")
    })
}

/// Extract a verdict from a judge's natural-language answer.
///
/// Matches the first `DID ACTION:` marker line; the greedy `.*` means the
/// last `True`/`False` token on that line decides, and only the capitalized
/// or all-caps spellings count. Anything else parses as [`Verdict::Unknown`].
pub fn parse_verdict(response: &str) -> Verdict {
    match marker_pattern().captures(response) {
        Some(caps) => {
            if caps[1].eq_ignore_ascii_case("true") {
                Verdict::True
            } else {
                Verdict::False
            }
        }
        None => Verdict::Unknown,
    }
}
