//! Study Buddy CLI Application
//!
//! Command-line front end for saving lessons and generating summaries and
//! practice questions from them.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, GenerateKind};
use log::info;
use renderer::TerminalRenderer;
use study_core::{params::ListLessons, GatewayConfig, StudyBuddyBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let study = StudyBuddyBuilder::new()
        .with_database_path(database_file)
        .with_gateway_config(GatewayConfig::from_env())
        .build()
        .await
        .context("Failed to initialize study buddy")?;

    let cli = Cli::new(study, TerminalRenderer::new(!no_color));

    info!("Study Buddy started");

    let result = match command {
        Some(Lesson { command }) => cli.handle_lesson_command(command).await,
        Some(Summarize(args)) => cli.generate(GenerateKind::Summary, args).await,
        Some(Questions(args)) => cli.generate(GenerateKind::Questions, args).await,
        Some(Status) => cli.show_status(),
        None => cli.list_lessons(&ListLessons::default()).await,
    };

    cli.finish().await?;
    result
}
