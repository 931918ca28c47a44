//! Explicit configuration values threaded into each pipeline component.
//!
//! Nothing here reads the environment; the CLI resolves flags and
//! environment variables and hands the finished values to the core.

use std::time::Duration;

use jiff::SignedDuration;

use crate::search::{SortOrder, TimeWindow};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Credentials and endpoints for the Reddit search API.
#[derive(Debug, Clone)]
pub struct RedditConfig {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
    /// Host serving `/api/v1/access_token`.
    pub auth_url: String,
    /// Host serving authenticated listing requests.
    pub api_url: String,
    pub timeout: Duration,
}

impl RedditConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: concat!("lookout/", env!("CARGO_PKG_VERSION")).to_string(),
            auth_url: "https://www.reddit.com".to_string(),
            api_url: "https://oauth.reddit.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Points both the token and the listing requests at one host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        let host = host.into();
        self.auth_url.clone_from(&host);
        self.api_url = host;
        self
    }
}

/// Bounds for one multi-target scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Result limit requested per target.
    pub posts_per_target: u32,
    /// Items with a heat score below this are dropped (inclusive floor).
    pub min_engagement: i64,
    /// Maximum number of items forwarded to synthesis.
    pub corpus_cap: usize,
    /// Per-item body truncation, in characters.
    pub body_char_cap: usize,
    /// Pause between consecutive target requests.
    pub polite_delay: Duration,
    pub sort: SortOrder,
    pub window: TimeWindow,
}

impl SearchConfig {
    /// Preset for an interactive research run.
    pub fn research() -> Self {
        Self {
            posts_per_target: 15,
            min_engagement: 1,
            corpus_cap: 25,
            body_char_cap: 800,
            polite_delay: Duration::from_millis(200),
            sort: SortOrder::Relevance,
            window: TimeWindow::Month,
        }
    }

    /// Preset for the persistent watcher: recent posts, no engagement floor.
    pub fn watch() -> Self {
        Self {
            posts_per_target: 50,
            min_engagement: 0,
            corpus_cap: usize::MAX,
            body_char_cap: 1000,
            polite_delay: Duration::from_millis(200),
            sort: SortOrder::New,
            window: TimeWindow::Day,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::research()
    }
}

/// Settings for the daily digest built from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestConfig {
    /// Trailing capture window read back from the store.
    pub window: SignedDuration,
    /// Items at or above this heat are always included.
    pub min_heat_score: i64,
    /// How many lower-heat items may be appended after the hot ones.
    pub low_heat_allowance: usize,
    /// Characters of body text quoted per item.
    pub context_chars: usize,
    pub project_name: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            window: SignedDuration::from_hours(24),
            min_heat_score: 2,
            low_heat_allowance: 20,
            context_chars: 300,
            project_name: "Market Watch".to_string(),
        }
    }
}
