//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Columns that may be missing from lesson tables created by older releases,
/// with the definition used to add them.
const LESSON_COLUMNS: &[(&str, &str)] = &[
    ("title", "TEXT NOT NULL DEFAULT ''"),
    ("content", "TEXT NOT NULL DEFAULT ''"),
    ("academic_year", "TEXT NOT NULL DEFAULT ''"),
    ("semester", "TEXT NOT NULL DEFAULT ''"),
    ("module", "TEXT NOT NULL DEFAULT ''"),
    ("date_added", "TEXT NOT NULL DEFAULT '1970-01-01T00:00:00Z'"),
];

const CREATE_DATE_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_lessons_date_added ON lessons(date_added)";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Adds any lesson column missing from an existing table.
    ///
    /// Only additive changes are made; existing rows keep their values.
    fn apply_migrations(&self) -> Result<()> {
        for (column, definition) in LESSON_COLUMNS {
            if !self.has_column("lessons", column)? {
                info!("Adding missing column '{column}' to lessons table");
                self.connection
                    .execute(
                        &format!("ALTER TABLE lessons ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .db_context("Failed to add column to lessons table")?;
            }
        }

        // Created here rather than in schema.sql: the column may only exist
        // after the migration above.
        self.connection
            .execute(CREATE_DATE_INDEX_SQL, [])
            .db_context("Failed to create date index")?;

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect table columns")
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::NamedTempFile;

    use crate::db::Database;

    #[test]
    fn test_migration_adds_missing_columns() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        {
            let conn = Connection::open(temp_file.path()).expect("open");
            conn.execute_batch(
                "CREATE TABLE lessons (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    content TEXT NOT NULL
                );
                INSERT INTO lessons (title, content) VALUES ('Old', 'Legacy row');",
            )
            .expect("create legacy table");
        }

        let db = Database::new(temp_file.path()).expect("Failed to open legacy database");
        for column in ["academic_year", "semester", "module", "date_added"] {
            assert!(db.has_column("lessons", column).expect("inspect"));
        }

        let lessons = db.list_lessons().expect("Failed to list lessons");
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].title, "Old");
        assert_eq!(lessons[0].academic_year, "");
    }

    #[test]
    fn test_schema_initialization_is_idempotent() {
        let db = Database::open_in_memory().expect("open");
        db.initialize_schema().expect("second initialization");
        assert!(db.has_column("lessons", "module").expect("inspect"));
    }
}
