//! Database schema initialization.

use rusqlite::OptionalExtension;

use crate::error::{DatabaseResultExt, LookoutError, Result};

const FOREIGN_CAPTURE_SQL: &str =
    "SELECT id, typeof(captured_at) FROM posts WHERE typeof(captured_at) != 'integer' LIMIT 1";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.check_capture_times()
    }

    /// Rejects a `posts` table whose capture times are not Unix
    /// milliseconds, such as one written with text timestamps by another
    /// tool. Window reads compare numerically and would misread those rows.
    fn check_capture_times(&self) -> Result<()> {
        let foreign: Option<(String, String)> = self
            .connection
            .query_row(FOREIGN_CAPTURE_SQL, [], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()
            .db_context("Failed to inspect stored capture times")?;

        match foreign {
            Some((id, kind)) => Err(LookoutError::invalid_input(
                "captured_at",
                format!(
                    "item {id} stores its capture time as {kind}, expected Unix milliseconds; \
                     this store was not written by lookout"
                ),
            )),
            None => Ok(()),
        }
    }
}
