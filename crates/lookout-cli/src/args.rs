use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::SignedDuration;
use lookout_core::{DigestConfig, SearchConfig, SortOrder, TimeWindow, DEFAULT_MODEL};

/// Turn a research goal into a community-sourced markdown report
///
/// Lookout asks a language model to plan where and what to search, scans the
/// chosen subreddits, and has the model write a structured brief from what
/// it found. The `scan`, `digest` and `feed` commands keep a local store for
/// daily monitoring.
#[derive(Parser)]
#[command(version, about, name = "lookout")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lookout/lookout.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Model used for planning and report writing
    #[arg(long, global = true, env = "LOOKOUT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible completion API
    #[arg(long, global = true, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    #[command(flatten)]
    pub credentials: Credentials,

    #[command(subcommand)]
    pub command: Commands,
}

/// API credentials, read from the environment only.
#[derive(ClapArgs, Clone)]
pub struct Credentials {
    #[arg(long, hide = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long, hide = true, env = "REDDIT_CLIENT_ID", hide_env_values = true)]
    pub reddit_client_id: Option<String>,

    #[arg(long, hide = true, env = "REDDIT_CLIENT_SECRET", hide_env_values = true)]
    pub reddit_client_secret: Option<String>,

    /// Serves both the Reddit token and search endpoints
    #[arg(long, hide = true, env = "REDDIT_API_HOST")]
    pub reddit_host: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a research plan and print it as editable JSON
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Plan, scan and write a markdown report
    #[command(alias = "r")]
    Research(ResearchArgs),
    /// Scan the targets of a plan file into the local store
    Scan(ScanArgs),
    /// Write the daily brief from recently captured items
    Digest(DigestArgs),
    /// Show what the local store has captured
    Feed(FeedArgs),
    /// List models available to the configured API key
    Models,
}

#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Free-text research goal
    pub goal: String,
}

#[derive(ClapArgs)]
pub struct ResearchArgs {
    /// Free-text research goal; ignored when --plan is given
    #[arg(required_unless_present = "plan")]
    pub goal: Option<String>,

    /// Run an existing (possibly edited) plan file instead of generating one
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(ClapArgs)]
pub struct ScanArgs {
    /// Plan file naming the targets and keywords to watch
    #[arg(long)]
    pub plan: PathBuf,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Overrides for the scan bounds. Unset flags keep the command's preset.
#[derive(ClapArgs, Default)]
pub struct SearchArgs {
    /// Results requested per target
    #[arg(long)]
    pub posts_per_target: Option<u32>,

    /// Minimum heat score (score + comments) an item needs to be kept
    #[arg(long)]
    pub min_engagement: Option<i64>,

    /// Maximum number of items passed to the model
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// How far back to search
    #[arg(long, value_enum)]
    pub time: Option<WindowArg>,

    /// Pause between targets, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl SearchArgs {
    /// Applies the given overrides on top of `preset`.
    pub fn apply(self, preset: SearchConfig) -> SearchConfig {
        SearchConfig {
            posts_per_target: self.posts_per_target.unwrap_or(preset.posts_per_target),
            min_engagement: self.min_engagement.unwrap_or(preset.min_engagement),
            corpus_cap: self.max_items.unwrap_or(preset.corpus_cap),
            sort: self.sort.map_or(preset.sort, Into::into),
            window: self.time.map_or(preset.window, Into::into),
            polite_delay: self
                .delay_ms
                .map_or(preset.polite_delay, Duration::from_millis),
            ..preset
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Relevance,
    New,
    Top,
}

impl From<SortArg> for SortOrder {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::New => SortOrder::New,
            SortArg::Top => SortOrder::Top,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WindowArg {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl From<WindowArg> for TimeWindow {
    fn from(val: WindowArg) -> Self {
        match val {
            WindowArg::Hour => TimeWindow::Hour,
            WindowArg::Day => TimeWindow::Day,
            WindowArg::Week => TimeWindow::Week,
            WindowArg::Month => TimeWindow::Month,
            WindowArg::Year => TimeWindow::Year,
            WindowArg::All => TimeWindow::All,
        }
    }
}

#[derive(ClapArgs)]
pub struct DigestArgs {
    /// Length of the trailing window, in hours
    #[arg(long, default_value_t = 24)]
    pub hours: u32,

    /// Heat score at which an item always makes it into the brief
    #[arg(long, default_value_t = 2)]
    pub min_heat: i64,

    /// How many lower-heat items to include after the hot ones
    #[arg(long, default_value_t = 20)]
    pub low_heat_allowance: usize,

    /// Name the brief is written for
    #[arg(long, default_value = "Market Watch")]
    pub project: String,

    /// Also write the brief to Daily_Intel_YYYY-MM-DD.md in this directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

impl From<&DigestArgs> for DigestConfig {
    fn from(val: &DigestArgs) -> Self {
        DigestConfig {
            window: SignedDuration::from_hours(i64::from(val.hours)),
            min_heat_score: val.min_heat,
            low_heat_allowance: val.low_heat_allowance,
            project_name: val.project.clone(),
            ..DigestConfig::default()
        }
    }
}

#[derive(ClapArgs)]
pub struct FeedArgs {
    /// Number of items to show
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,

    /// Heat score counted as high interest
    #[arg(long, default_value_t = 2)]
    pub min_heat: i64,
}
