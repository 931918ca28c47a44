//! Captured item queries.

use jiff::{SignedDuration, Timestamp};
use rusqlite::{params, types::Type, Row};

use crate::{
    error::{DatabaseResultExt, LookoutError, Result, StorageError},
    models::CapturedItem,
};

const INSERT_ITEM_SQL: &str = "INSERT OR IGNORE INTO posts (id, subreddit, title, body, url, heat_score, captured_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const ITEM_COLUMNS: &str = "id, subreddit, title, body, url, heat_score, captured_at";
const STATS_SQL: &str = "SELECT COUNT(*), COALESCE(SUM(heat_score >= ?1), 0), MAX(captured_at) FROM posts";

/// Aggregate view of the store for the feed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedStats {
    pub total: u64,
    /// Items at or above the heat floor the stats were computed with
    pub hot: u64,
    pub last_capture: Option<Timestamp>,
}

impl super::Database {
    /// Stores `item` unless its id is already present.
    ///
    /// Returns `true` when the row was newly inserted. A conflicting id is a
    /// no-op: the existing row is kept untouched.
    pub fn upsert_item(&self, item: &CapturedItem) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                INSERT_ITEM_SQL,
                params![
                    item.id,
                    item.source,
                    item.title,
                    item.body,
                    item.url,
                    item.heat_score,
                    item.captured_at.as_millisecond(),
                ],
            )
            .map_err(|source| StorageError::WriteFailed {
                id: item.id.clone(),
                source,
            })?;
        Ok(changed > 0)
    }

    /// Items captured within the trailing `window`, hottest first.
    pub fn read_window(&self, window: SignedDuration) -> Result<Vec<CapturedItem>> {
        self.read_window_at(Timestamp::now(), window)
    }

    /// Items captured in `[now - window, now]`, ordered by descending heat
    /// score with ties in insertion order. Never mutates stored rows.
    pub fn read_window_at(
        &self,
        now: Timestamp,
        window: SignedDuration,
    ) -> Result<Vec<CapturedItem>> {
        let since = now.checked_sub(window).map_err(|e| {
            LookoutError::invalid_input("window", format!("window start out of range: {e}"))
        })?;

        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM posts WHERE captured_at >= ?1 AND captured_at <= ?2 ORDER BY heat_score DESC, rowid ASC"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare window query")?;

        let items = stmt
            .query_map(
                params![since.as_millisecond(), now.as_millisecond()],
                item_from_row,
            )
            .db_context("Failed to query captured items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read captured items")?;

        Ok(items)
    }

    /// The most recently captured items, newest first.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<CapturedItem>> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM posts ORDER BY captured_at DESC, rowid DESC LIMIT ?1"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare feed query")?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let items = stmt
            .query_map(params![limit], item_from_row)
            .db_context("Failed to query recent items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read recent items")?;

        Ok(items)
    }

    /// Counts for the feed header.
    pub fn stats(&self, min_heat: i64) -> Result<FeedStats> {
        let (total, hot, last): (i64, i64, Option<i64>) = self
            .connection
            .query_row(STATS_SQL, params![min_heat], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .db_context("Failed to compute feed statistics")?;

        let last_capture = last
            .map(Timestamp::from_millisecond)
            .transpose()
            .map_err(|e| LookoutError::invalid_input("captured_at", e.to_string()))?;

        Ok(FeedStats {
            total: total.max(0) as u64,
            hot: hot.max(0) as u64,
            last_capture,
        })
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<CapturedItem> {
    let captured_at = Timestamp::from_millisecond(row.get(6)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Integer, Box::new(e)))?;

    Ok(CapturedItem {
        id: row.get(0)?,
        source: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        url: row.get(4)?,
        heat_score: row.get(5)?,
        captured_at,
    })
}
