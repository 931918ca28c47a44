//! Persistent variant: scans into the store and digests it later.
//!
//! The scan and the digest are independent one-shot operations; scheduling
//! them is left to the caller.

use log::{error, info, warn};

use crate::{
    archive::Archive,
    config::{DigestConfig, SearchConfig},
    error::{ExecutionError, Result},
    executor::SearchExecutor,
    models::{Corpus, Plan, Report},
    synthesizer::ReportSynthesizer,
};

/// Outcome of one scan into the store.
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Items that passed the engagement filter
    pub fetched: usize,
    /// Items that were not in the store before
    pub inserted: usize,
    /// Items whose write failed; they count as not captured this cycle
    pub write_failures: usize,
    pub failed_targets: Vec<ExecutionError>,
}

/// Drives the store. Each operation takes the one external collaborator it
/// needs, so scanning works without model credentials and digesting works
/// without search credentials.
pub struct Watchdog {
    archive: Archive,
}

impl Watchdog {
    pub fn new(archive: Archive) -> Self {
        Self { archive }
    }

    /// Scans every target of `plan` and stores what was found.
    ///
    /// Individual write failures are logged and skipped; only an unusable
    /// plan fails the scan.
    pub async fn scan(
        &self,
        executor: &SearchExecutor,
        plan: &Plan,
        config: &SearchConfig,
    ) -> Result<ScanSummary> {
        info!("Watchdog scan for '{}'", plan.project_name);
        let collection = executor.collect(plan, config).await?;

        let mut summary = ScanSummary {
            fetched: collection.items.len(),
            failed_targets: collection.failures,
            ..ScanSummary::default()
        };

        for item in collection.items {
            let id = item.id.clone();
            match self.archive.upsert(item).await {
                Ok(true) => summary.inserted += 1,
                Ok(false) => {}
                Err(e) => {
                    error!("Database write error for {id}: {e}");
                    summary.write_failures += 1;
                }
            }
        }

        info!(
            "Scan complete: {} fetched, {} new, {} targets skipped",
            summary.fetched,
            summary.inserted,
            summary.failed_targets.len()
        );
        Ok(summary)
    }

    /// Writes the daily brief over everything captured within the window.
    ///
    /// # Errors
    ///
    /// `NoDataCollected` when no item in the window is selected for the
    /// brief, `UpstreamFailure` when the model call fails.
    pub async fn digest(
        &self,
        synthesizer: &ReportSynthesizer,
        config: &DigestConfig,
        model: &str,
    ) -> Result<Report> {
        let items = self.archive.read_window(config.window).await?;
        let corpus = Corpus::digest(&items, config);
        if corpus.is_empty() {
            warn!(
                "No data found for report ({} items in window, none selected)",
                items.len()
            );
            return Err(ExecutionError::NoDataCollected.into());
        }

        Ok(synthesizer
            .digest(&corpus, &config.project_name, model)
            .await?)
    }
}
