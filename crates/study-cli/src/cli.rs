//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `study-core` stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → StudyBuddy
//! ```

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use study_core::{
    params::{Id, ListLessons},
    text::append_text,
    CreateResult, DeleteResult, NewLesson, OperationStatus, Outcome, StudyBuddy,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum LessonCommands {
    /// Save a new lesson
    #[command(alias = "s")]
    Save(SaveLessonArgs),
    /// List saved lessons, newest first
    #[command(alias = "ls")]
    List(ListLessonsArgs),
    /// Show a saved lesson in full
    Show(LessonIdArgs),
    /// Delete a saved lesson
    #[command(alias = "rm")]
    Delete(LessonIdArgs),
    /// List the years, semesters and modules in use
    Filters,
}

/// Save a new lesson
///
/// The lesson body comes from --content, from --file, or from standard input
/// when neither is given.
#[derive(Args)]
pub struct SaveLessonArgs {
    /// Title of the lesson
    pub title: String,
    /// Academic year, e.g. 2025/2026
    #[arg(short, long)]
    pub year: String,
    /// Semester, e.g. "Semester 1"
    #[arg(short, long)]
    pub semester: String,
    /// Module or subject name
    #[arg(short, long)]
    pub module: String,
    /// Lesson text
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,
    /// Read the lesson text from a plain-text file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// List saved lessons
///
/// Each filter is an exact match; combine them to narrow the list further.
#[derive(Args)]
pub struct ListLessonsArgs {
    /// Only lessons from this academic year
    #[arg(short, long)]
    pub year: Option<String>,
    /// Only lessons from this semester
    #[arg(short, long)]
    pub semester: Option<String>,
    /// Only lessons for this module
    #[arg(short, long)]
    pub module: Option<String>,
}

impl From<ListLessonsArgs> for ListLessons {
    fn from(val: ListLessonsArgs) -> Self {
        ListLessons {
            academic_year: val.year,
            semester: val.semester,
            module: val.module,
        }
    }
}

#[derive(Args)]
pub struct LessonIdArgs {
    /// ID of the lesson
    pub id: u64,
}

impl From<LessonIdArgs> for Id {
    fn from(val: LessonIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Text source for summaries and questions
///
/// Inline text and --file may be combined: the file is appended after the
/// inline text. With neither, text is read from standard input.
#[derive(Args)]
pub struct GenerateArgs {
    /// Lesson text
    pub text: Option<String>,
    /// Append text from a plain-text file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Use a saved lesson instead of inline text
    #[arg(short, long, conflicts_with_all = ["text", "file"])]
    pub lesson: Option<u64>,
}

#[derive(Clone, Copy)]
pub enum GenerateKind {
    Summary,
    Questions,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read standard input")?;
    Ok(buffer)
}

/// Writes `outcome` without markdown styling. Write errors such as a closed
/// pipe are returned, not raised as a panic.
fn write_plain<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{outcome}")?;
    out.flush()
}

/// Handles commands against a StudyBuddy instance.
pub struct Cli {
    study: StudyBuddy,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(study: StudyBuddy, renderer: TerminalRenderer) -> Self {
        Self { study, renderer }
    }

    /// Closes the store once the command has run.
    pub async fn finish(self) -> Result<()> {
        self.study.close().await.context("Failed to close database")
    }

    pub async fn handle_lesson_command(&self, command: LessonCommands) -> Result<()> {
        match command {
            LessonCommands::Save(args) => self.save_lesson(args).await,
            LessonCommands::List(args) => self.list_lessons(&args.into()).await,
            LessonCommands::Show(args) => self.show_lesson(&args.into()).await,
            LessonCommands::Delete(args) => self.delete_lesson(&args.into()).await,
            LessonCommands::Filters => self.show_filters().await,
        }
    }

    async fn save_lesson(&self, args: SaveLessonArgs) -> Result<()> {
        let content = match (args.content, args.file) {
            (Some(content), _) => content,
            (None, Some(path)) => read_file(&path)?,
            (None, None) => read_stdin()?,
        };

        let lesson = NewLesson {
            title: args.title,
            content,
            academic_year: args.year,
            semester: args.semester,
            module: args.module,
        };

        let saved = self
            .study
            .save_lesson(&lesson)
            .await
            .context("Failed to save lesson")?;
        self.renderer.render(&CreateResult::new(saved).to_string())
    }

    pub async fn list_lessons(&self, params: &ListLessons) -> Result<()> {
        let lessons = self
            .study
            .list_lessons(params)
            .await
            .context("Failed to list lessons")?;
        self.renderer.render(&lessons.to_string())
    }

    async fn show_lesson(&self, params: &Id) -> Result<()> {
        let lesson = self
            .study
            .get_lesson(params)
            .await
            .context("Failed to load lesson")?;
        match lesson {
            Some(lesson) => self.renderer.render(&lesson.to_string()),
            None => self
                .renderer
                .render(&OperationStatus::lesson_not_found(params.id).to_string()),
        }
    }

    async fn delete_lesson(&self, params: &Id) -> Result<()> {
        let deleted = self
            .study
            .delete_lesson(params)
            .await
            .context("Failed to delete lesson")?;
        let output = match deleted {
            Some(lesson) => DeleteResult::new(lesson).to_string(),
            None => OperationStatus::nothing_deleted(params.id).to_string(),
        };
        self.renderer.render(&output)
    }

    async fn show_filters(&self) -> Result<()> {
        let options = self
            .study
            .filter_options()
            .await
            .context("Failed to load filter options")?;
        self.renderer.render(&options.to_string())
    }

    pub async fn generate(&self, kind: GenerateKind, args: GenerateArgs) -> Result<()> {
        let outcome = match args.lesson {
            Some(id) => {
                let params = Id { id };
                let result = match kind {
                    GenerateKind::Summary => self.study.summarize_lesson(&params).await,
                    GenerateKind::Questions => self.study.questions_for_lesson(&params).await,
                };
                result.context("Failed to load lesson")?
            }
            None => {
                let text = Self::collect_text(args.text, args.file.as_deref())?;
                debug!("Generating from {} characters of input", text.len());
                match kind {
                    GenerateKind::Summary => self.study.summarize(&text).await,
                    GenerateKind::Questions => self.study.generate_questions(&text).await,
                }
            }
        };
        self.render_outcome(&outcome)
    }

    fn collect_text(text: Option<String>, file: Option<&Path>) -> Result<String> {
        match (text, file) {
            (Some(text), Some(path)) => Ok(append_text(&text, &read_file(path)?)),
            (Some(text), None) => Ok(text),
            (None, Some(path)) => read_file(path),
            (None, None) => read_stdin(),
        }
    }

    fn render_outcome(&self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Generated(_) => self.renderer.render(&outcome.to_string()),
            // Failures replace the output text verbatim, without markdown styling
            Outcome::NoText | Outcome::Failed(_) => {
                write_plain(&mut io::stdout().lock(), outcome)?;
                Ok(())
            }
        }
    }

    pub fn show_status(&self) -> Result<()> {
        let gateway = self.study.gateway();
        let mut output = String::from("# Study Buddy\n\n");
        output.push_str(&format!(
            "- Database: {}\n",
            self.study.database_path().display()
        ));
        if gateway.configured() {
            output.push_str(&format!(
                "- Text generation: configured ({} via {})\n",
                gateway.config().model,
                gateway.config().base_url
            ));
        } else {
            output.push_str("- Text generation: not configured (set STUDY_BUDDY_API_KEY)\n");
        }
        self.renderer.render(&output)
    }
}
