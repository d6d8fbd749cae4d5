mod common;

use common::{create_test_db, lesson};
use jiff::Timestamp;
use study_core::{Database, LessonFilter, NewLesson, StudyError};

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.count_lessons().expect("Failed to count"), 0);
}

#[test]
fn test_save_and_get_round_trip() {
    let (_temp_file, mut db) = create_test_db();

    let before = Timestamp::now();
    let input = NewLesson::new(
        "Intro to DBs",
        "A relation is a set of tuples.\nKeys identify rows.",
        "2025/2026",
        "Semester 1",
        "Database Systems",
    );
    let saved = db.save_lesson(&input).expect("Failed to save lesson");
    let after = Timestamp::now();

    assert_eq!(saved.id, 1);
    assert!(saved.date_added >= before && saved.date_added <= after);

    let fetched = db
        .get_lesson(saved.id)
        .expect("Failed to get lesson")
        .expect("Lesson should exist");

    assert_eq!(fetched.title, input.title);
    assert_eq!(fetched.content, input.content);
    assert_eq!(fetched.academic_year, input.academic_year);
    assert_eq!(fetched.semester, input.semester);
    assert_eq!(fetched.module, input.module);
    assert_eq!(fetched.date_added, saved.date_added);
}

#[test]
fn test_save_keeps_values_verbatim() {
    let (_temp_file, mut db) = create_test_db();

    let input = NewLesson::new(" Padded ", "  body  ", "2025/2026", "Semester 1", "DB");
    let saved = db.save_lesson(&input).expect("Failed to save lesson");
    let fetched = db
        .get_lesson(saved.id)
        .expect("Failed to get lesson")
        .expect("Lesson should exist");
    assert_eq!(fetched.title, " Padded ");
    assert_eq!(fetched.content, "  body  ");
}

#[test]
fn test_get_missing_lesson_is_none() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_lesson(999).expect("Query should succeed").is_none());
}

#[test]
fn test_list_all_newest_first() {
    let (_temp_file, mut db) = create_test_db();

    for i in 0..5 {
        db.save_lesson(&lesson(&format!("Lesson {i}"), "2025/2026", "Semester 1", "DB"))
            .expect("Failed to save lesson");
    }

    let lessons = db.list_lessons().expect("Failed to list lessons");
    assert_eq!(lessons.len(), 5);
    for pair in lessons.windows(2) {
        assert!(pair[0].date_added >= pair[1].date_added);
        assert!(pair[0].id > pair[1].id);
    }
    assert_eq!(lessons[0].title, "Lesson 4");
}

#[test]
fn test_blank_fields_are_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let cases = [
        ("title", NewLesson::new("", "c", "y", "s", "m")),
        ("content", NewLesson::new("t", "   ", "y", "s", "m")),
        ("academic_year", NewLesson::new("t", "c", "", "s", "m")),
        ("semester", NewLesson::new("t", "c", "y", "\n", "m")),
        ("module", NewLesson::new("t", "c", "y", "s", "")),
    ];

    for (expected, input) in cases {
        match db.save_lesson(&input) {
            Err(StudyError::InvalidInput { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidInput for {expected}, got {other:?}"),
        }
    }

    assert_eq!(db.count_lessons().expect("Failed to count"), 0);
}

#[test]
fn test_delete_lesson() {
    let (_temp_file, mut db) = create_test_db();

    let saved = db
        .save_lesson(&lesson("Doomed", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");

    assert!(db.delete_lesson(saved.id).expect("Failed to delete"));
    assert!(db.get_lesson(saved.id).expect("Query should succeed").is_none());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    db.save_lesson(&lesson("Stays", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");

    assert!(!db.delete_lesson(12345).expect("Deleting unknown id must not fail"));
    assert_eq!(db.count_lessons().expect("Failed to count"), 1);
}

#[test]
fn test_ids_are_never_reused() {
    let (_temp_file, mut db) = create_test_db();

    let first = db
        .save_lesson(&lesson("One", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    let second = db
        .save_lesson(&lesson("Two", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    db.delete_lesson(second.id).expect("Failed to delete");

    let third = db
        .save_lesson(&lesson("Three", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(third.id, 3);
}

#[test]
fn test_filter_by_year() {
    let (_temp_file, mut db) = create_test_db();

    db.save_lesson(&lesson("Old", "2024/2025", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    db.save_lesson(&lesson("New 1", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    db.save_lesson(&lesson("New 2", "2025/2026", "Semester 2", "OS"))
        .expect("Failed to save lesson");

    let filter = LessonFilter::default().with_academic_year("2025/2026");
    let lessons = db
        .list_lessons_filtered(&filter)
        .expect("Failed to filter lessons");

    let titles: Vec<_> = lessons.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["New 2", "New 1"]);
    assert!(lessons.iter().all(|l| l.academic_year == "2025/2026"));
}

#[test]
fn test_filters_combine_with_and() {
    let (_temp_file, mut db) = create_test_db();

    db.save_lesson(&lesson("DB S1", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    db.save_lesson(&lesson("OS S1", "2025/2026", "Semester 1", "OS"))
        .expect("Failed to save lesson");
    db.save_lesson(&lesson("DB S2", "2025/2026", "Semester 2", "DB"))
        .expect("Failed to save lesson");

    let filter = LessonFilter::default()
        .with_semester("Semester 1")
        .with_module("DB");
    let lessons = db
        .list_lessons_filtered(&filter)
        .expect("Failed to filter lessons");
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "DB S1");

    let none = db
        .list_lessons_filtered(&LessonFilter::default().with_module("db"))
        .expect("Failed to filter lessons");
    assert!(none.is_empty(), "matching is exact and case-sensitive");
}

#[test]
fn test_empty_filter_equals_list_all() {
    let (_temp_file, mut db) = create_test_db();

    for (title, module) in [("a", "DB"), ("b", "OS"), ("c", "DB")] {
        db.save_lesson(&lesson(title, "2025/2026", "Semester 1", module))
            .expect("Failed to save lesson");
    }

    assert_eq!(
        db.list_lessons_filtered(&LessonFilter::default())
            .expect("Failed to filter lessons"),
        db.list_lessons().expect("Failed to list lessons")
    );
}

#[test]
fn test_distinct_values() {
    let (_temp_file, mut db) = create_test_db();

    for (year, semester, module) in [
        ("2024/2025", "Semester 2", "DB"),
        ("2025/2026", "Semester 1", "DB"),
        ("2023/2024", "Semester 1", "OS"),
    ] {
        db.save_lesson(&lesson("x", year, semester, module))
            .expect("Failed to save lesson");
    }

    assert_eq!(
        db.distinct_years().expect("years"),
        ["2025/2026", "2024/2025", "2023/2024"]
    );
    assert_eq!(
        db.distinct_semesters().expect("semesters"),
        ["Semester 1", "Semester 2"]
    );
    assert_eq!(db.distinct_modules().expect("modules"), ["DB", "OS"]);

    let options = db.filter_options().expect("options");
    assert_eq!(options.modules, ["DB", "OS"]);
    assert_eq!(options.years.len(), 3);
}

#[test]
fn test_distinct_values_on_empty_store() {
    let (_temp_file, db) = create_test_db();
    assert!(db.filter_options().expect("options").is_empty());
}

#[test]
fn test_reopen_existing_file_keeps_rows() {
    let (temp_file, mut db) = create_test_db();

    db.save_lesson(&lesson("Persisted", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    db.close().expect("Failed to close database");

    let reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    let lessons = reopened.list_lessons().expect("Failed to list lessons");
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].title, "Persisted");
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::open_in_memory().expect("Failed to open in-memory database");
    let saved = db
        .save_lesson(&lesson("Scratch", "2025/2026", "Semester 1", "DB"))
        .expect("Failed to save lesson");
    assert_eq!(saved.id, 1);
}

#[test]
fn test_save_show_delete_scenario() {
    let (_temp_file, mut db) = create_test_db();

    let saved = db
        .save_lesson(&NewLesson::new(
            "Intro to DBs",
            "<content>",
            "2025/2026",
            "Semester 1",
            "Database Systems",
        ))
        .expect("Failed to save lesson");
    assert_eq!(saved.id, 1);

    let fetched = db.get_lesson(1).expect("Failed to get lesson");
    assert_eq!(fetched.map(|l| l.date_added), Some(saved.date_added));

    db.delete_lesson(1).expect("Failed to delete");
    assert!(db.get_lesson(1).expect("Failed to get lesson").is_none());
}
