//! Lookout CLI Application
//!
//! Command-line interface for goal-driven community research: plan, scan,
//! report, and a local store for daily monitoring.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, Settings};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        model,
        openai_base_url,
        credentials,
        command,
    } = Args::parse();

    let settings = Settings {
        database_file,
        model,
        openai_base_url,
        credentials,
    };
    let cli = Cli::new(settings, TerminalRenderer::new(!no_color));

    info!("Lookout started");

    match command {
        Plan(args) => cli.plan(args).await,
        Research(args) => cli.research(args).await,
        Scan(args) => cli.scan(args).await,
        Digest(args) => cli.digest(args).await,
        Feed(args) => cli.feed(args).await,
        Models => cli.models().await,
    }
}
