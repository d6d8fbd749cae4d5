//! Collection wrapper types for displaying groups of lessons.

use std::fmt;

use crate::{models::Lesson, text::truncate_text};

/// Characters of lesson content shown under each list entry.
const PREVIEW_CHARS: usize = 80;

/// Newtype wrapper for displaying a list of lessons.
///
/// Each lesson is shown as its label with a short content preview. Handles
/// empty collections gracefully.
///
/// ```rust
/// use study_core::{display::Lessons, models::Lesson};
/// use jiff::Timestamp;
///
/// let lessons = Lessons(vec![Lesson {
///     id: 1,
///     title: "Intro to DBs".to_string(),
///     content: "Tables, rows and keys.".to_string(),
///     academic_year: "2025/2026".to_string(),
///     semester: "Semester 1".to_string(),
///     module: "Database Systems".to_string(),
///     date_added: Timestamp::now(),
/// }]);
/// let output = lessons.to_string();
/// assert!(output.contains("1. Intro to DBs - Database Systems (2025/2026, Semester 1)"));
/// ```
pub struct Lessons(pub Vec<Lesson>);

impl Lessons {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lesson> {
        self.0.iter()
    }
}

impl IntoIterator for Lessons {
    type Item = Lesson;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lessons {
    type Item = &'a Lesson;
    type IntoIter = std::slice::Iter<'a, Lesson>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Lessons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No lessons found.");
        }
        for lesson in &self.0 {
            writeln!(f, "{}. {}", lesson.id, lesson.label())?;
            let first_line = lesson
                .content
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or_default();
            writeln!(f, "   {}", truncate_text(first_line, PREVIEW_CHARS))?;
        }
        Ok(())
    }
}
