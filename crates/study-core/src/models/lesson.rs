//! Lesson model definition and input validation.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};

/// A stored unit of study text with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    /// Unique identifier, never reused after deletion
    pub id: u64,

    /// Title of the lesson
    pub title: String,

    /// Raw lesson body
    pub content: String,

    /// Free-form academic year, e.g. "2025/2026"
    pub academic_year: String,

    /// Free-form semester, e.g. "Semester 1"
    pub semester: String,

    /// Subject name
    pub module: String,

    /// Timestamp when the lesson was saved (UTC)
    pub date_added: Timestamp,
}

/// The caller-supplied fields of a lesson that has not been saved yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLesson {
    pub title: String,
    pub content: String,
    pub academic_year: String,
    pub semester: String,
    pub module: String,
}

impl NewLesson {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        academic_year: impl Into<String>,
        semester: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            academic_year: academic_year.into(),
            semester: semester.into(),
            module: module.into(),
        }
    }

    /// Rejects the first field that is empty or whitespace-only.
    ///
    /// Fields are checked in declaration order so the reported field matches
    /// the order a user fills them in.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("title", &self.title),
            ("content", &self.content),
            ("academic_year", &self.academic_year),
            ("semester", &self.semester),
            ("module", &self.module),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => {
                Err(StudyError::invalid_input(*field).with_reason("must not be empty"))
            }
            None => Ok(()),
        }
    }
}
