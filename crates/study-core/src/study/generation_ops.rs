//! Summary and question generation for StudyBuddy.

use super::StudyBuddy;
use crate::{
    error::{Result, StudyError},
    params::Id,
    prompts::{generate, Outcome, PromptBuilder, QuestionGenerator, Summarizer},
};

impl StudyBuddy {
    /// Summarizes `text` in bullet points.
    pub async fn summarize(&self, text: &str) -> Outcome {
        generate(&Summarizer, &self.gateway, text).await
    }

    /// Generates five practice questions from `text`.
    pub async fn generate_questions(&self, text: &str) -> Outcome {
        generate(&QuestionGenerator, &self.gateway, text).await
    }

    /// Summarizes the content of a saved lesson.
    pub async fn summarize_lesson(&self, params: &Id) -> Result<Outcome> {
        self.generate_for_lesson(&Summarizer, params).await
    }

    /// Generates practice questions from a saved lesson.
    pub async fn questions_for_lesson(&self, params: &Id) -> Result<Outcome> {
        self.generate_for_lesson(&QuestionGenerator, params).await
    }

    async fn generate_for_lesson<B: PromptBuilder>(
        &self,
        builder: &B,
        params: &Id,
    ) -> Result<Outcome> {
        let lesson = self
            .get_lesson(params)
            .await?
            .ok_or(StudyError::LessonNotFound { id: params.id })?;
        Ok(generate(builder, &self.gateway, &lesson.content).await)
    }
}
