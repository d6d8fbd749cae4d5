//! Filter types for querying lessons.

use serde::{Deserialize, Serialize};

/// Exact-match category filter for listing lessons.
///
/// Every field that is `Some` adds an AND condition; `None` fields are not
/// applied, so the default filter matches every lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonFilter {
    pub academic_year: Option<String>,
    pub semester: Option<String>,
    pub module: Option<String>,
}

impl LessonFilter {
    /// Returns true when no condition is set.
    pub fn is_empty(&self) -> bool {
        self.academic_year.is_none() && self.semester.is_none() && self.module.is_none()
    }

    pub fn with_academic_year(mut self, academic_year: impl Into<String>) -> Self {
        self.academic_year = Some(academic_year.into());
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

impl From<&crate::params::ListLessons> for LessonFilter {
    fn from(params: &crate::params::ListLessons) -> Self {
        Self {
            academic_year: params.academic_year.clone(),
            semester: params.semester.clone(),
            module: params.module.clone(),
        }
    }
}

/// Distinct category values across all stored lessons.
///
/// Years are sorted newest first; semesters and modules alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<String>,
    pub semesters: Vec<String>,
    pub modules: Vec<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.semesters.is_empty() && self.modules.is_empty()
    }
}
