//! Content-platform search seam.
//!
//! The executor only talks to a [`SearchSource`]; [`RedditSearch`] is the
//! production implementation.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

pub mod reddit;

pub use reddit::RedditSearch;

/// Result ordering requested from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Relevance,
    New,
    Top,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::New => "new",
            SortOrder::Top => "top",
        }
    }
}

/// Recency window applied to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search request scoped to a single target.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub target: String,
    /// Disjunctive keyword expression, e.g. `ATS OR CRM`.
    pub query: String,
    pub sort: SortOrder,
    pub window: TimeWindow,
    pub limit: u32,
}

/// A raw search result as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub body: String,
    pub url: String,
    pub score: i64,
    pub comment_count: i64,
}

impl SearchHit {
    /// Engagement proxy: upvotes plus comment count.
    pub fn heat_score(&self) -> i64 {
        self.score.saturating_add(self.comment_count)
    }
}

/// A platform that can be searched one target at a time.
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError>;
}
