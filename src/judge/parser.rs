//! Parsing of judge responses.
//!
//! Kept apart from the client so the provider integration can change
//! without touching how responses are interpreted. The URL-list parser is
//! deliberately tolerant: providers wrap the list under varying keys, so a
//! small ordered set of known names is tried before giving up with an
//! empty list.

use serde::Deserialize;

use super::error::{JudgeError, JudgeResult};
use super::types::Assessment;

/// Minimum acceptable `key_take` length, in characters.
pub const MIN_KEY_TAKE_LEN: usize = 10;

/// Keys under which providers have been observed to return the URL array,
/// in the order they are tried.
const URL_LIST_KEYS: &[&str] = &["urls", "articles", "links", "results"];

#[derive(Deserialize)]
struct RawAssessment {
    relevancy: f64,
    key_take: String,
    validity: f64,
}

/// Parse a scoring response into a validated [`Assessment`].
///
/// # Errors
///
/// Returns `JudgeError::Malformed` if the text is not the expected JSON
/// object, a score is outside `[0, 100]`, or the summary is shorter than
/// [`MIN_KEY_TAKE_LEN`].
pub fn parse_assessment(text: &str) -> JudgeResult<Assessment> {
    let raw: RawAssessment =
        serde_json::from_str(strip_code_fence(text)).map_err(|e| JudgeError::Malformed {
            reason: format!("not a valid assessment object: {e}"),
        })?;

    for (field, value) in [("relevancy", raw.relevancy), ("validity", raw.validity)] {
        if !(0.0..=100.0).contains(&value) || value.is_nan() {
            return Err(JudgeError::Malformed {
                reason: format!("{field} {value} outside [0, 100]"),
            });
        }
    }

    let key_take = raw.key_take.trim().to_string();
    if key_take.chars().count() < MIN_KEY_TAKE_LEN {
        return Err(JudgeError::Malformed {
            reason: format!("key_take shorter than {MIN_KEY_TAKE_LEN} characters"),
        });
    }

    Ok(Assessment {
        relevancy: raw.relevancy,
        key_take,
        validity: raw.validity,
    })
}

/// Extract a URL list from a discovery response.
///
/// Tries the known wrapper keys in order, then a bare top-level array.
/// Unrecognized shapes yield an empty list rather than an error; discovery
/// is best-effort.
///
/// # Errors
///
/// Returns `JudgeError::Malformed` only when the text is not JSON at all.
pub fn parse_url_list(text: &str) -> JudgeResult<Vec<String>> {
    let value: serde_json::Value =
        serde_json::from_str(strip_code_fence(text)).map_err(|e| JudgeError::Malformed {
            reason: format!("discovery response is not JSON: {e}"),
        })?;

    let array = match &value {
        serde_json::Value::Object(map) => URL_LIST_KEYS
            .iter()
            .find_map(|key| map.get(*key))
            .and_then(|v| v.as_array()),
        serde_json::Value::Array(items) => Some(items),
        _ => None,
    };

    let Some(array) = array else {
        return Ok(Vec::new());
    };

    Ok(array
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Models sometimes wrap JSON answers in a markdown code fence despite
/// being told not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
