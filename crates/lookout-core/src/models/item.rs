//! Captured item model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::search::SearchHit;

/// A post captured from one target, ready for storage or synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapturedItem {
    /// Platform-unique identifier
    pub id: String,

    /// Target the item was found in
    pub source: String,

    pub title: String,

    /// Source text truncated to the configured character budget
    pub body: String,

    pub url: String,

    /// Engagement proxy: upvotes plus comment count
    pub heat_score: i64,

    /// When the item was captured (UTC)
    pub captured_at: Timestamp,
}

impl CapturedItem {
    /// Captures a search hit found in `source`, truncating its body to
    /// `body_char_cap` characters.
    pub fn from_hit(
        source: &str,
        hit: SearchHit,
        body_char_cap: usize,
        captured_at: Timestamp,
    ) -> Self {
        let heat_score = hit.heat_score();
        Self {
            id: hit.id,
            source: source.to_string(),
            title: hit.title,
            body: truncate_chars(&hit.body, body_char_cap),
            url: hit.url,
            heat_score,
            captured_at,
        }
    }
}

/// The first `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
