//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{FilterOptions, Lesson};

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Academic year: {}", self.academic_year)?;
        writeln!(f, "- Semester: {}", self.semester)?;
        writeln!(f, "- Module: {}", self.module)?;
        writeln!(f, "- Added: {}", LocalDateTime(&self.date_added))?;
        writeln!(f)?;

        writeln!(f, "{}", self.content.trim_end())
    }
}

impl Lesson {
    /// One-line label used in lesson lists:
    /// `Title - Module (Year, Semester)`.
    pub fn label(&self) -> String {
        format!(
            "{} - {} ({}, {})",
            self.title, self.module, self.academic_year, self.semester
        )
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, heading: &str, values: &[String]) -> fmt::Result {
    writeln!(f, "## {heading}")?;
    writeln!(f)?;
    if values.is_empty() {
        writeln!(f, "None yet.")?;
    }
    for value in values {
        writeln!(f, "- {value}")?;
    }
    writeln!(f)
}

impl fmt::Display for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No lessons saved yet.");
        }
        write_section(f, "Academic years", &self.years)?;
        write_section(f, "Semesters", &self.semesters)?;
        write_section(f, "Modules", &self.modules)
    }
}
