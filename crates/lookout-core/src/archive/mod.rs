//! Async facade over the dedup store.
//!
//! Every call opens its own connection on the blocking pool, so an
//! [`Archive`] is cheap to clone and share between the scanner and the
//! reporter.

use std::path::{Path, PathBuf};

use jiff::SignedDuration;
use tokio::task;

use crate::{
    db::{Database, FeedStats},
    error::{LookoutError, Result},
    models::CapturedItem,
};

pub mod builder;

pub use builder::ArchiveBuilder;

#[derive(Debug, Clone)]
pub struct Archive {
    db_path: PathBuf,
}

impl Archive {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Stores `item` unless its id was captured before. Returns `true` when
    /// the item is new.
    pub async fn upsert(&self, item: CapturedItem) -> Result<bool> {
        self.with_db(move |db| db.upsert_item(&item)).await
    }

    /// Items captured within the trailing `window`, hottest first.
    pub async fn read_window(&self, window: SignedDuration) -> Result<Vec<CapturedItem>> {
        self.with_db(move |db| db.read_window(window)).await
    }

    /// The most recently captured items, newest first.
    pub async fn list_recent(&self, limit: usize) -> Result<Vec<CapturedItem>> {
        self.with_db(move |db| db.list_recent(limit)).await
    }

    pub async fn stats(&self, min_heat: i64) -> Result<FeedStats> {
        self.with_db(move |db| db.stats(min_heat)).await
    }

    async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            f(&db)
        })
        .await
        .map_err(|e| LookoutError::configuration(format!("Task join error: {e}")))?
    }
}
