//! Configuration for [`TodoService`].
//!
//! The only setting is where the database lives. Without an explicit path
//! the store goes to `todo/todo.db` under the XDG data directory
//! (`~/.local/share/todo/todo.db` when `XDG_DATA_HOME` is unset).

use std::path::{Path, PathBuf};

use super::TodoService;
use crate::error::{Result, TodoError};

#[derive(Debug, Clone, Default)]
pub struct TodoServiceBuilder {
    database_path: Option<PathBuf>,
}

impl TodoServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the service at `path`. `None` leaves the current choice alone,
    /// so an optional command-line flag can be passed straight through.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the database location, creates missing parent directories and
    /// opens the store once so the schema exists before the first request.
    ///
    /// # Errors
    ///
    /// `XdgDirectory` when no default location can be determined,
    /// `FileSystem` when a parent directory cannot be created and `Database`
    /// when the file cannot be opened or initialized.
    pub async fn build(self) -> Result<TodoService> {
        let db_path = self.resolve_path()?;

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| TodoError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let service = TodoService::new(db_path);
        service.with_session(|_| Ok(())).await?;
        Ok(service)
    }

    fn resolve_path(self) -> Result<PathBuf> {
        match self.database_path {
            Some(path) => Ok(path),
            None => xdg::BaseDirectories::with_prefix("todo")
                .place_data_file("todo.db")
                .map_err(|e| TodoError::XdgDirectory(e.to_string())),
        }
    }
}
