//! Data models for stored lessons.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.

pub mod filters;
pub mod lesson;


pub use filters::{FilterOptions, LessonFilter};
pub use lesson::{Lesson, NewLesson};
