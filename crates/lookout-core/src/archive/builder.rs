//! Builder for creating and configuring Archive instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Archive;
use crate::{
    db::Database,
    error::{LookoutError, Result},
};

/// Builder for creating and configuring Archive instances.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    database_path: Option<PathBuf>,
}

impl ArchiveBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lookout/lookout.db` or `~/.local/share/lookout/lookout.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the archive, creating the parent directory and the schema.
    ///
    /// # Errors
    ///
    /// Returns `LookoutError::FileSystem` if the database directory cannot be
    /// created, `LookoutError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Archive> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| LookoutError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(|e| LookoutError::configuration(format!("Task join error: {e}")))??;

        Ok(Archive::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lookout")
            .place_data_file("lookout.db")
            .map_err(|e| LookoutError::XdgDirectory(e.to_string()))
    }
}
