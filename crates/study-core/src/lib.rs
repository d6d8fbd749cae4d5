//! Core library for the Study Buddy study aid.
//!
//! Lessons are pasted or loaded text filed under an academic year, semester
//! and module. This crate stores them in SQLite, lists and filters them, and
//! turns lesson text into summaries or practice questions through an
//! external text generation service.
//!
//! - [`db`]: the lesson store ([`Database`])
//! - [`gateway`]: the single-call generation client ([`Gateway`])
//! - [`prompts`]: summary and question prompt builders
//! - [`study`]: the [`StudyBuddy`] facade front ends use
//! - [`display`]: markdown formatting for lessons and results
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use study_core::{models::NewLesson, params::ListLessons, StudyBuddyBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let study = StudyBuddyBuilder::new()
//!     .with_database_path(Some("lessons.db"))
//!     .build()
//!     .await?;
//!
//! study
//!     .save_lesson(&NewLesson::new(
//!         "Intro to DBs",
//!         "A relation is a set of tuples.",
//!         "2025/2026",
//!         "Semester 1",
//!         "Database Systems",
//!     ))
//!     .await?;
//!
//! let lessons = study.list_lessons(&ListLessons::default()).await?;
//! print!("{lessons}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod params;
pub mod prompts;
pub mod study;
pub mod text;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Lessons, LocalDateTime, OperationStatus};
pub use error::{Result, StudyError};
pub use gateway::{Gateway, GatewayConfig, GatewayError};
pub use models::{FilterOptions, Lesson, LessonFilter, NewLesson};
pub use params::{Id, ListLessons};
pub use prompts::{Outcome, PromptBuilder, QuestionGenerator, Summarizer, NO_TEXT_PROVIDED};
pub use study::{StudyBuddy, StudyBuddyBuilder};
