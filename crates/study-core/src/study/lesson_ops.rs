//! Lesson operations for StudyBuddy.

use super::StudyBuddy;
use crate::{
    display::Lessons,
    error::Result,
    models::{FilterOptions, Lesson, LessonFilter, NewLesson},
    params::{Id, ListLessons},
};

impl StudyBuddy {
    /// Saves a new lesson and returns it with its ID and timestamp.
    pub async fn save_lesson(&self, lesson: &NewLesson) -> Result<Lesson> {
        let lesson = lesson.clone();
        self.with_db(move |db| db.save_lesson(&lesson)).await
    }

    /// Retrieves a lesson by its ID.
    pub async fn get_lesson(&self, params: &Id) -> Result<Option<Lesson>> {
        let id = params.id;
        self.with_db(move |db| db.get_lesson(id)).await
    }

    /// Lists lessons, newest first, narrowed by any category set in
    /// `params`.
    pub async fn list_lessons(&self, params: &ListLessons) -> Result<Lessons> {
        let filter = LessonFilter::from(params);
        let lessons = self
            .with_db(move |db| db.list_lessons_filtered(&filter))
            .await?;
        Ok(Lessons(lessons))
    }

    /// Deletes a lesson and returns what was removed, or `None` when no
    /// lesson had that ID.
    pub async fn delete_lesson(&self, params: &Id) -> Result<Option<Lesson>> {
        let id = params.id;
        self.with_db(move |db| {
            let lesson = db.get_lesson(id)?;
            if lesson.is_some() {
                db.delete_lesson(id)?;
            }
            Ok(lesson)
        })
        .await
    }

    /// Distinct years, semesters and modules for filter choices.
    pub async fn filter_options(&self) -> Result<FilterOptions> {
        self.with_db(|db| db.filter_options()).await
    }
}
