use tempfile::TempDir;

use super::*;
use crate::{
    error::StudyError,
    gateway::{GatewayConfig, GatewayError},
    models::NewLesson,
    params::{Id, ListLessons},
    prompts::Outcome,
};

async fn create_test_study() -> (TempDir, StudyBuddy) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("lessons.db");
    let study = StudyBuddyBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gateway_config(GatewayConfig::unconfigured())
        .build()
        .await
        .expect("Failed to create study buddy");
    (temp_dir, study)
}

fn lesson(title: &str, year: &str, semester: &str, module: &str) -> NewLesson {
    NewLesson::new(title, format!("Content of {title}"), year, semester, module)
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let (temp_dir, study) = create_test_study().await;
    assert!(study.database_path().exists());
    assert!(study.database_path().starts_with(temp_dir.path()));
    assert!(!study.gateway_configured());
}

#[tokio::test]
async fn test_save_get_and_delete() {
    let (_temp_dir, study) = create_test_study().await;

    let saved = study
        .save_lesson(&lesson("Intro to DBs", "2025/2026", "Semester 1", "Database Systems"))
        .await
        .expect("Failed to save lesson");
    assert_eq!(saved.id, 1);

    let fetched = study
        .get_lesson(&Id { id: saved.id })
        .await
        .expect("Failed to get lesson")
        .expect("Lesson should exist");
    assert_eq!(fetched, saved);

    let deleted = study
        .delete_lesson(&Id { id: saved.id })
        .await
        .expect("Failed to delete lesson");
    assert_eq!(deleted.map(|l| l.title), Some("Intro to DBs".to_string()));

    assert!(study
        .get_lesson(&Id { id: saved.id })
        .await
        .expect("Failed to get lesson")
        .is_none());

    let again = study
        .delete_lesson(&Id { id: saved.id })
        .await
        .expect("Deleting a missing lesson is not an error");
    assert!(again.is_none());
}

#[tokio::test]
async fn test_list_lessons_with_filters() {
    let (_temp_dir, study) = create_test_study().await;

    for new in [
        lesson("A", "2024/2025", "Semester 1", "DB"),
        lesson("B", "2025/2026", "Semester 1", "DB"),
        lesson("C", "2025/2026", "Semester 2", "OS"),
    ] {
        study.save_lesson(&new).await.expect("Failed to save lesson");
    }

    let all = study
        .list_lessons(&ListLessons::default())
        .await
        .expect("Failed to list lessons");
    let titles: Vec<_> = all.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["C", "B", "A"]);

    let filtered = study
        .list_lessons(&ListLessons {
            academic_year: Some("2025/2026".to_string()),
            semester: None,
            module: Some("DB".to_string()),
        })
        .await
        .expect("Failed to filter lessons");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.iter().next().map(|l| l.title.as_str()), Some("B"));

    let options = study.filter_options().await.expect("Failed to load options");
    assert_eq!(options.years, ["2025/2026", "2024/2025"]);
    assert_eq!(options.semesters, ["Semester 1", "Semester 2"]);
    assert_eq!(options.modules, ["DB", "OS"]);
}

#[tokio::test]
async fn test_save_rejects_blank_field() {
    let (_temp_dir, study) = create_test_study().await;

    let result = study
        .save_lesson(&lesson("Blank module", "2025/2026", "Semester 1", ""))
        .await;
    assert!(matches!(
        result,
        Err(StudyError::InvalidInput { ref field, .. }) if field == "module"
    ));

    let all = study
        .list_lessons(&ListLessons::default())
        .await
        .expect("Failed to list lessons");
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_generation_for_missing_lesson() {
    let (_temp_dir, study) = create_test_study().await;

    let result = study.summarize_lesson(&Id { id: 42 }).await;
    assert!(matches!(result, Err(StudyError::LessonNotFound { id: 42 })));
}

#[tokio::test]
async fn test_generation_without_gateway_configuration() {
    let (_temp_dir, study) = create_test_study().await;

    assert_eq!(study.summarize("").await, Outcome::NoText);
    assert_eq!(
        study.generate_questions("Threads share memory.").await,
        Outcome::Failed(GatewayError::NotConfigured)
    );

    let saved = study
        .save_lesson(&lesson("Threads", "2025/2026", "Semester 2", "OS"))
        .await
        .expect("Failed to save lesson");
    let outcome = study
        .questions_for_lesson(&Id { id: saved.id })
        .await
        .expect("Lesson exists");
    assert_eq!(outcome, Outcome::Failed(GatewayError::NotConfigured));
}

#[tokio::test]
async fn test_reopen_keeps_lessons_and_close() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("lessons.db");

    let study = StudyBuddyBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gateway_config(GatewayConfig::unconfigured())
        .build()
        .await
        .expect("Failed to create study buddy");
    study
        .save_lesson(&lesson("Kept", "2025/2026", "Semester 1", "DB"))
        .await
        .expect("Failed to save lesson");
    study.close().await.expect("Failed to close");

    let reopened = StudyBuddyBuilder::new()
        .with_database_path(Some(&db_path))
        .with_gateway_config(GatewayConfig::unconfigured())
        .build()
        .await
        .expect("Failed to reopen");
    let all = reopened
        .list_lessons(&ListLessons::default())
        .await
        .expect("Failed to list lessons");
    assert_eq!(all.len(), 1);
}
