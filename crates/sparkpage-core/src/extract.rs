//! JSON extraction from free-text model replies.
//!
//! Despite being told to answer with nothing but JSON, models routinely
//! wrap the object in prose or a markdown fence. Extraction runs in two
//! stages: a fenced ```json block wins if present, otherwise the reply is
//! scanned for the first balanced top-level object.

use regex::Regex;
use std::sync::OnceLock;

use crate::{Result, SparkError};

/// Pattern for a markdown fence labeled `json`.
const FENCE_PATTERN: &str = r"(?s)```json\s*(.*?)\s*```";

static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn fence_regex() -> &'static Regex {
    FENCE_REGEX.get_or_init(|| Regex::new(FENCE_PATTERN).expect("Invalid fence pattern regex"))
}

/// Extract the JSON object payload from a raw model reply.
///
/// Fenced content takes precedence over a bare object; if neither is
/// found the reply is rejected with [`SparkError::NoJsonFound`].
pub fn extract_json(reply: &str) -> Result<&str> {
    if let Some(inner) = fence_regex().captures(reply).and_then(|caps| caps.get(1)) {
        return Ok(inner.as_str());
    }
    balanced_object(reply).ok_or(SparkError::NoJsonFound)
}

/// Scan for the first balanced `{...}` span.
///
/// Tracks nesting depth and JSON string state so that braces inside
/// string literals (or in surrounding prose after the object closes) do
/// not widen the span.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in text.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
