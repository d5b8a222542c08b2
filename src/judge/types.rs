use serde::{Deserialize, Serialize};

/// A judge's structured verdict on one hypothesis/article pair.
///
/// `relevancy` and `validity` are percentages in `[0, 100]`; `key_take` is
/// a short prose summary of at least 10 characters. Both bounds are
/// enforced by the response parser, so a constructed `Assessment` is
/// always well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// How relevant the article is to the hypothesis (0-100).
    pub relevancy: f64,
    /// 2-3 sentence summary of the judgment.
    pub key_take: String,
    /// How much the article confirms (high) or refutes (low) the
    /// hypothesis (0-100).
    pub validity: f64,
}
