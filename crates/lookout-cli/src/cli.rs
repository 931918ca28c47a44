//! Command handlers for the `lookout` binary.
//!
//! Clients are built lazily per command so that, for example, `feed` needs
//! no credentials at all and `scan` needs only the Reddit ones.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use jiff::Zoned;
use log::{info, warn};
use lookout_core::{
    Archive, ArchiveBuilder, DigestConfig, Feed, LlmConfig, LookoutError, OpenAiClient, Plan,
    PlanGenerator, RedditConfig, RedditSearch, Report, ReportSynthesizer, ResearchPipeline,
    SearchConfig, SearchExecutor, Watchdog,
};
use serde_json::Value;

use crate::{
    args::{Credentials, DigestArgs, FeedArgs, PlanArgs, ResearchArgs, ScanArgs},
    renderer::TerminalRenderer,
};

/// Settings shared by every command.
pub struct Settings {
    pub database_file: Option<PathBuf>,
    pub model: String,
    pub openai_base_url: Option<String>,
    pub credentials: Credentials,
}

pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    pub async fn plan(&self, args: PlanArgs) -> Result<()> {
        let generator = PlanGenerator::new(Arc::new(self.openai()?));
        let plan = generator
            .generate(&args.goal, &self.settings.model)
            .await
            .context("Failed to generate plan")?;

        println!("{}", serde_json::to_string_pretty(&plan)?);
        Ok(())
    }

    pub async fn research(&self, args: ResearchArgs) -> Result<()> {
        let config = args.search.apply(SearchConfig::research());
        let edited = args.plan.as_deref().map(load_plan).transpose()?;

        let pipeline = ResearchPipeline::new(Arc::new(self.openai()?), Arc::new(self.reddit()?));
        let model = &self.settings.model;

        let result = match (edited, args.goal) {
            (Some(plan), _) => pipeline.run(plan, &config, model).await,
            (None, Some(goal)) => pipeline.research(&goal, &config, model).await,
            (None, None) => {
                return Err(
                    LookoutError::invalid_input("goal", "a goal or --plan is required").into(),
                )
            }
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(LookoutError::Synthesis(e)) => {
                self.renderer.render(Report::degraded(&e).markdown());
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        for failure in &outcome.failures {
            eprintln!("{failure}");
        }
        info!(
            "Report for '{}' written from {} items",
            outcome.plan.project_name,
            outcome.corpus.len()
        );

        self.renderer.render(&outcome.plan.to_string());
        self.renderer.render(outcome.report.markdown());

        if let Some(path) = args.output {
            write_report(&path, &outcome.report)?;
        }
        Ok(())
    }

    pub async fn scan(&self, args: ScanArgs) -> Result<()> {
        let plan = load_plan(&args.plan)?;
        let config = args.search.apply(SearchConfig::watch());

        let executor = SearchExecutor::new(Arc::new(self.reddit()?));
        let summary = Watchdog::new(self.archive().await?)
            .scan(&executor, &plan, &config)
            .await?;

        for failure in &summary.failed_targets {
            eprintln!("{failure}");
        }
        println!(
            "Scanned {} targets: {} items found, {} new",
            plan.targets.len(),
            summary.fetched,
            summary.inserted
        );
        if summary.write_failures > 0 {
            warn!("{} items could not be stored", summary.write_failures);
        }
        Ok(())
    }

    pub async fn digest(&self, args: DigestArgs) -> Result<()> {
        let config = DigestConfig::from(&args);
        let synthesizer = ReportSynthesizer::new(Arc::new(self.openai()?));
        let report = Watchdog::new(self.archive().await?)
            .digest(&synthesizer, &config, &self.settings.model)
            .await?;

        self.renderer.render(report.markdown());

        if let Some(dir) = args.output_dir {
            let filename = format!("Daily_Intel_{}.md", Zoned::now().strftime("%Y-%m-%d"));
            write_report(&dir.join(filename), &report)?;
        }
        Ok(())
    }

    pub async fn feed(&self, args: FeedArgs) -> Result<()> {
        let archive = self.archive().await?;
        let feed = Feed {
            stats: archive.stats(args.min_heat).await?,
            min_heat: args.min_heat,
            items: archive.list_recent(args.limit).await?,
        };

        self.renderer.render(&feed.to_string());
        Ok(())
    }

    pub async fn models(&self) -> Result<()> {
        let models = self
            .openai()?
            .list_models()
            .await
            .context("Failed to list models")?;

        if models.is_empty() {
            println!("No models available.");
        }
        for model in models {
            println!("{model}");
        }
        Ok(())
    }

    fn openai(&self) -> Result<OpenAiClient> {
        let key = self
            .settings
            .credentials
            .openai_api_key
            .as_deref()
            .ok_or_else(|| LookoutError::configuration("OPENAI_API_KEY is not set"))?;

        let mut config = LlmConfig::new(key);
        if let Some(base_url) = &self.settings.openai_base_url {
            config = config.with_base_url(base_url);
        }
        Ok(OpenAiClient::new(&config)?)
    }

    fn reddit(&self) -> Result<RedditSearch> {
        let Credentials {
            reddit_client_id,
            reddit_client_secret,
            reddit_host,
            ..
        } = &self.settings.credentials;

        let (Some(id), Some(secret)) = (reddit_client_id, reddit_client_secret) else {
            return Err(LookoutError::configuration(
                "REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET must both be set",
            )
            .into());
        };
        let mut config = RedditConfig::new(id, secret);
        if let Some(host) = reddit_host {
            config = config.with_host(host);
        }
        Ok(RedditSearch::new(config)?)
    }

    async fn archive(&self) -> Result<Archive> {
        ArchiveBuilder::new()
            .with_database_path(self.settings.database_file.as_ref())
            .build()
            .await
            .context("Failed to open the capture store")
    }
}

/// Reads a plan file and re-normalizes it, rejecting plans that could not
/// be executed.
fn load_plan(path: &Path) -> Result<Plan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let raw: Value = serde_json::from_str(&text)
        .with_context(|| format!("Plan file {} is not valid JSON", path.display()))?;

    let plan = Plan::from_raw(&raw);
    plan.validate()?;
    Ok(plan)
}

fn write_report(path: &Path, report: &Report) -> Result<()> {
    fs::write(path, report.markdown())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    println!("Saved report to {}", path.display());
    Ok(())
}
