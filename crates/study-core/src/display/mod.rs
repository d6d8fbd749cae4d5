//! Display formatting for lessons and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes use newtype wrappers so the same data
//! can be formatted differently depending on context. Everything renders as
//! markdown for the terminal renderer.
//!
//! ```rust
//! use study_core::{display::CreateResult, models::Lesson};
//! use jiff::Timestamp;
//!
//! let lesson = Lesson {
//!     id: 1,
//!     title: "Intro to DBs".to_string(),
//!     content: "Tables, rows and keys.".to_string(),
//!     academic_year: "2025/2026".to_string(),
//!     semester: "Semester 1".to_string(),
//!     module: "Database Systems".to_string(),
//!     date_added: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(lesson).to_string();
//! assert!(output.contains("Saved lesson with ID: 1"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Lessons;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
