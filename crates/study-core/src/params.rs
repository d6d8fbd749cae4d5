//! Parameter structures for study operations
//!
//! These structures are shared across interfaces without framework-specific
//! derives. Front ends define their own argument types (clap, etc.) and
//! convert into these with `From` implementations, keeping the core free of
//! interface dependencies.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   StudyBuddy    │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for showing, deleting and generating from a saved lesson.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the lesson to operate on
    pub id: u64,
}

/// Parameters for listing lessons.
///
/// Each field narrows the listing to lessons with exactly that value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLessons {
    /// Only lessons from this academic year
    pub academic_year: Option<String>,
    /// Only lessons from this semester
    pub semester: Option<String>,
    /// Only lessons for this module
    pub module: Option<String>,
}
