//! High-level API tying the lesson store to the text generation gateway.
//!
//! [`StudyBuddy`] is what front ends talk to. It owns exactly one
//! [`Database`] handle for its whole lifetime and one [`Gateway`]:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front end     │    │   StudyBuddy    │───▶│    Database     │
//! │   (CLI, ...)    │───▶│ (lesson_ops,    │    └─────────────────┘
//! │                 │    │  generation_ops)│───▶┌─────────────────┐
//! └─────────────────┘    └─────────────────┘    │ Prompt builders │
//!                                               │   + Gateway     │
//!                                               └─────────────────┘
//! ```
//!
//! Store calls run on tokio's blocking pool behind a mutex, so even if a
//! front end issues calls concurrently the connection only ever sees one
//! operation at a time.
//!
//! ```rust,no_run
//! use study_core::{models::NewLesson, StudyBuddyBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let study = StudyBuddyBuilder::new()
//!     .with_database_path(Some("lessons.db"))
//!     .build()
//!     .await?;
//!
//! let lesson = study
//!     .save_lesson(&NewLesson::new(
//!         "Intro to DBs",
//!         "A relation is a set of tuples.",
//!         "2025/2026",
//!         "Semester 1",
//!         "Database Systems",
//!     ))
//!     .await?;
//!
//! println!("{}", study.summarize(&lesson.content).await);
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StudyError},
    gateway::Gateway,
};

pub mod builder;
pub mod generation_ops;
pub mod lesson_ops;

pub use builder::StudyBuddyBuilder;

/// Main interface for saving lessons and generating study material.
pub struct StudyBuddy {
    db: Arc<Mutex<Database>>,
    db_path: PathBuf,
    gateway: Gateway,
}

impl StudyBuddy {
    pub(crate) fn new(db: Database, db_path: PathBuf, gateway: Gateway) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            db_path,
            gateway,
        }
    }

    /// Path of the lesson database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Whether text generation requests can be made.
    pub fn gateway_configured(&self) -> bool {
        self.gateway.configured()
    }

    /// Runs `op` against the store on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || {
            let mut guard = db.lock().map_err(|_| StudyError::Configuration {
                message: "Database lock poisoned".to_string(),
            })?;
            op(&mut guard)
        })
        .await
        .map_err(StudyError::join)?
    }

    /// Closes the database connection.
    pub async fn close(self) -> Result<()> {
        let db = Arc::try_unwrap(self.db).map_err(|_| StudyError::Configuration {
            message: "Database is still in use".to_string(),
        })?;
        let db = db.into_inner().map_err(|_| StudyError::Configuration {
            message: "Database lock poisoned".to_string(),
        })?;
        task::spawn_blocking(move || db.close())
            .await
            .map_err(StudyError::join)?
    }
}

#[cfg(test)]
mod tests;
