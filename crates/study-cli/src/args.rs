use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, LessonCommands};

/// Study aid for saving lessons and turning them into summaries and
/// practice questions
///
/// Lessons are filed under an academic year, semester and module so they can
/// be listed and filtered later. Summaries and questions are produced by an
/// OpenAI-compatible service configured through the STUDY_BUDDY_API_KEY
/// (or OPENAI_API_KEY), STUDY_BUDDY_API_URL and STUDY_BUDDY_MODEL
/// environment variables.
#[derive(Parser)]
#[command(version, about, name = "study")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/study-buddy/lessons.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved lessons
    #[command(alias = "l")]
    Lesson {
        #[command(subcommand)]
        command: LessonCommands,
    },
    /// Summarize lesson text in bullet points
    #[command(alias = "sum")]
    Summarize(GenerateArgs),
    /// Generate five practice questions from lesson text
    #[command(alias = "q")]
    Questions(GenerateArgs),
    /// Show the database location and whether text generation is configured
    Status,
}
