//! Multi-target search execution.
//!
//! Targets are scanned one after another with a pause in between. A target
//! that fails is logged and skipped; the run only fails when the plan is
//! unusable or nothing at all was collected.

use std::sync::Arc;

use jiff::Timestamp;
use log::{info, warn};
use tokio::time::sleep;

use crate::{
    config::SearchConfig,
    error::ExecutionError,
    models::{CapturedItem, Corpus, Plan},
    search::{SearchQuery, SearchSource},
};

/// Everything a scan produced, including the targets it had to skip.
#[derive(Debug, Default)]
pub struct Collection {
    /// Items that passed the engagement filter, in scan order
    pub items: Vec<CapturedItem>,
    /// One [`ExecutionError::TargetUnavailable`] per skipped target
    pub failures: Vec<ExecutionError>,
}

impl Collection {
    /// The first `cap` items as a corpus, or `NoDataCollected` when nothing
    /// is left to analyze after capping.
    pub fn corpus(&self, cap: usize) -> Result<Corpus, ExecutionError> {
        let corpus = Corpus::from_items(&self.items, cap);
        if corpus.is_empty() {
            return Err(ExecutionError::NoDataCollected);
        }
        Ok(corpus)
    }
}

pub struct SearchExecutor {
    source: Arc<dyn SearchSource>,
}

impl SearchExecutor {
    pub fn new(source: Arc<dyn SearchSource>) -> Self {
        Self { source }
    }

    /// Scans every target of `plan` and returns the capped corpus.
    ///
    /// # Errors
    ///
    /// `EmptyTargetList`/`EmptyKeywordList` before any request is made,
    /// `NoDataCollected` when no target produced a qualifying item.
    pub async fn execute(
        &self,
        plan: &Plan,
        config: &SearchConfig,
    ) -> Result<Corpus, ExecutionError> {
        self.collect(plan, config).await?.corpus(config.corpus_cap)
    }

    /// Scans every target of `plan`, tolerating per-target failures.
    ///
    /// An empty collection is not an error at this level.
    pub async fn collect(
        &self,
        plan: &Plan,
        config: &SearchConfig,
    ) -> Result<Collection, ExecutionError> {
        plan.validate()?;

        let query = plan.query();
        let mut collection = Collection::default();

        for (index, target) in plan.targets.iter().enumerate() {
            if index > 0 && !config.polite_delay.is_zero() {
                sleep(config.polite_delay).await;
            }

            let request = SearchQuery {
                target: target.clone(),
                query: query.clone(),
                sort: config.sort,
                window: config.window,
                limit: config.posts_per_target,
            };

            match self.source.search(&request).await {
                Ok(hits) => {
                    let found = hits.len();
                    let before = collection.items.len();
                    collection.items.extend(
                        hits.into_iter()
                            .take(config.posts_per_target as usize)
                            .filter(|hit| hit.heat_score() >= config.min_engagement)
                            .map(|hit| {
                                CapturedItem::from_hit(
                                    target,
                                    hit,
                                    config.body_char_cap,
                                    Timestamp::now(),
                                )
                            }),
                    );
                    info!(
                        "Scanned r/{target}: kept {} of {found} results",
                        collection.items.len() - before
                    );
                }
                Err(e) => {
                    warn!("Skipped r/{target}: {e}");
                    collection.failures.push(ExecutionError::TargetUnavailable {
                        target: target.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(collection)
    }
}
