//! Builder for creating and configuring StudyBuddy instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::StudyBuddy;
use crate::{
    db::Database,
    error::{Result, StudyError},
    gateway::{Gateway, GatewayConfig},
};

/// Builder for creating and configuring StudyBuddy instances.
#[derive(Debug, Clone, Default)]
pub struct StudyBuddyBuilder {
    database_path: Option<PathBuf>,
    gateway_config: Option<GatewayConfig>,
}

impl StudyBuddyBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/study-buddy/lessons.db` or
    /// `~/.local/share/study-buddy/lessons.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the gateway configuration. Defaults to
    /// [`GatewayConfig::from_env`].
    pub fn with_gateway_config(mut self, config: GatewayConfig) -> Self {
        self.gateway_config = Some(config);
        self
    }

    /// Opens the database and builds the configured instance.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::FileSystem` if the database directory cannot be
    /// created, `StudyError::XdgDirectory` if no default location exists and
    /// `StudyError::Database` if database initialization fails
    pub async fn build(self) -> Result<StudyBuddy> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StudyError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let open_path = db_path.clone();
        let db = task::spawn_blocking(move || Database::new(&open_path))
            .await
            .map_err(StudyError::join)??;

        let gateway = Gateway::new(self.gateway_config.unwrap_or_else(GatewayConfig::from_env));
        info!(
            "Study Buddy ready (database: {}, gateway configured: {})",
            db_path.display(),
            gateway.configured()
        );

        Ok(StudyBuddy::new(db, db_path, gateway))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("study-buddy")
            .place_data_file("lessons.db")
            .map_err(|e| StudyError::XdgDirectory(e.to_string()))
    }
}
