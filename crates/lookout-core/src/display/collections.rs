//! Collection wrapper types for displaying groups of captured items.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{db::FeedStats, models::CapturedItem};

/// Live view of the store: headline metrics plus the newest items.
///
/// # Examples
///
/// ```rust
/// use lookout_core::{db::FeedStats, display::Feed, models::CapturedItem};
/// use jiff::Timestamp;
///
/// let item = CapturedItem {
///     id: "p1".to_string(),
///     source: "recruiting".to_string(),
///     title: "Best ATS for agencies?".to_string(),
///     body: String::new(),
///     url: "https://reddit.com/p1".to_string(),
///     heat_score: 7,
///     captured_at: Timestamp::now(),
/// };
/// let stats = FeedStats { total: 1, hot: 1, last_capture: Some(item.captured_at) };
/// let output = Feed { stats, min_heat: 2, items: vec![item] }.to_string();
/// assert!(output.contains("Best ATS for agencies?"));
/// ```
pub struct Feed {
    pub stats: FeedStats,
    /// Heat floor `stats.hot` was computed with
    pub min_heat: i64,
    pub items: Vec<CapturedItem>,
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No items captured yet. Run `lookout scan` first.");
        }

        writeln!(f, "# Live Feed")?;
        writeln!(f)?;
        writeln!(f, "- Total captured: {}", self.stats.total)?;
        writeln!(f, "- High interest (heat >= {}): {}", self.min_heat, self.stats.hot)?;
        if let Some(last) = &self.stats.last_capture {
            writeln!(f, "- Last scan: {}", LocalDateTime(last))?;
        }
        writeln!(f)?;

        writeln!(f, "| Heat | Source | Title | Captured | Link |")?;
        writeln!(f, "|---:|---|---|---|---|")?;
        for item in &self.items {
            writeln!(
                f,
                "| {} | r/{} | {} | {} | {} |",
                item.heat_score,
                cell(&item.source),
                cell(&item.title),
                LocalDateTime(&item.captured_at),
                cell(&item.url)
            )?;
        }
        Ok(())
    }
}

/// Keeps a value on one table row.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}
