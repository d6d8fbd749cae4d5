use study_core::{Database, NewLesson};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Lesson with generated content in the given category.
pub fn lesson(title: &str, year: &str, semester: &str, module: &str) -> NewLesson {
    NewLesson::new(title, format!("Notes for {title}"), year, semester, module)
}
