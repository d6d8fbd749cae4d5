//! Prompt builders for summaries and practice questions.
//!
//! Each builder wraps lesson text in a fixed instruction template and hands
//! the result to the [`Gateway`] unchanged. Blank input is rejected before a
//! prompt is built, so no request is made for it.

use std::fmt;

use log::debug;

use crate::{
    gateway::{Gateway, GatewayError},
    text::validate_text_input,
};

/// Shown instead of generated text when the input was blank.
pub const NO_TEXT_PROVIDED: &str = "No text provided";

/// Turns lesson text into the instruction sent to the gateway.
pub trait PromptBuilder {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Embeds `text` verbatim into the builder's template.
    fn build_prompt(&self, text: &str) -> String;
}

/// Asks for a plain-language, bullet-point summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Summarizer;

impl PromptBuilder for Summarizer {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn build_prompt(&self, text: &str) -> String {
        format!(
            "Summarize the following lesson for a student in simple language.\n\
             Use bullet points.\n\
             \n\
             Lesson text:\n\
             {text}\n\
             \n\
             Summary:"
        )
    }
}

/// Asks for five practice questions of mixed formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionGenerator;

impl PromptBuilder for QuestionGenerator {
    fn name(&self) -> &'static str {
        "questions"
    }

    fn build_prompt(&self, text: &str) -> String {
        format!(
            "Generate 5 practice questions based on the following lesson text.\n\
             Make them suitable for university students.\n\
             Make sure to only use information from the lesson text.\n\
             Include a mix of question types (multiple choice, short answer, etc.).\n\
             \n\
             Lesson text:\n\
             {text}\n\
             \n\
             Questions:"
        )
    }
}

/// What a generation request produced.
///
/// `Display` renders the text to show the user: the generated text itself,
/// the [`NO_TEXT_PROVIDED`] sentinel, or the gateway's error sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated(String),
    NoText,
    Failed(GatewayError),
}

impl Outcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Outcome::Generated(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Generated(text) => f.write_str(text),
            Outcome::NoText => f.write_str(NO_TEXT_PROVIDED),
            Outcome::Failed(err) => write!(f, "{err}"),
        }
    }
}

/// Builds a prompt from `text` with `builder` and sends it through
/// `gateway`. Blank text short-circuits to [`Outcome::NoText`].
pub async fn generate<B>(builder: &B, gateway: &Gateway, text: &str) -> Outcome
where
    B: PromptBuilder + ?Sized,
{
    if !validate_text_input(text) {
        return Outcome::NoText;
    }

    let prompt = builder.build_prompt(text);
    debug!("Requesting {} for {} characters of text", builder.name(), text.len());

    match gateway.send(&prompt).await {
        Ok(generated) => Outcome::Generated(generated),
        Err(err) => Outcome::Failed(err),
    }
}
