//! Core library for the lookout research pipeline.
//!
//! A free-text research goal goes through four stages:
//!
//! ```text
//! goal ──▶ PlanGenerator ──▶ Plan ──▶ SearchExecutor ──▶ Corpus ──▶ ReportSynthesizer ──▶ Report
//!              │                            │
//!              ▼                            ▼
//!          normalize                (Archive, persistent variant)
//! ```
//!
//! - [`generator`] asks a language model for a JSON plan and repairs schema
//!   drift through [`normalize`].
//! - [`executor`] scans each target of the plan, skipping targets that fail.
//! - [`synthesizer`] turns the capped corpus into a markdown report.
//! - [`watch`] is the persistent variant: scans go into the SQLite
//!   [`archive`] and a daily digest is written from a trailing window.
//!
//! The two external services sit behind the [`llm::CompletionClient`] and
//! [`search::SearchSource`] traits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use lookout_core::{
//!     LlmConfig, OpenAiClient, RedditConfig, RedditSearch, ResearchPipeline, SearchConfig,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let completion = Arc::new(OpenAiClient::new(&LlmConfig::new("sk-..."))?);
//! let search = Arc::new(RedditSearch::new(RedditConfig::new("client-id", "secret"))?);
//! let pipeline = ResearchPipeline::new(completion, search);
//!
//! let outcome = pipeline
//!     .research("compare two recruiting tools", &SearchConfig::research(), "gpt-4o-mini")
//!     .await?;
//! println!("{}", outcome.report);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod executor;
pub mod generator;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod search;
pub mod synthesizer;
pub mod watch;

// Re-export commonly used types
pub use archive::{Archive, ArchiveBuilder};
pub use config::{DigestConfig, LlmConfig, RedditConfig, SearchConfig, DEFAULT_MODEL};
pub use db::Database;
pub use display::{Feed, LocalDateTime};
pub use error::{
    CompletionError, ExecutionError, GenerationError, LookoutError, Result, SearchError,
    StorageError, SynthesisError,
};
pub use executor::{Collection, SearchExecutor};
pub use generator::PlanGenerator;
pub use llm::{CompletionClient, CompletionRequest, OpenAiClient};
pub use models::{CapturedItem, Corpus, Plan, Report};
pub use normalize::{normalize, FieldSpec};
pub use pipeline::{ResearchOutcome, ResearchPipeline};
pub use search::{RedditSearch, SearchHit, SearchQuery, SearchSource, SortOrder, TimeWindow};
pub use synthesizer::{ReportContext, ReportSynthesizer};
pub use watch::{ScanSummary, Watchdog};
