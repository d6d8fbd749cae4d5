//! Lesson CRUD operations and category queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Row, ToSql};

use crate::{
    error::{DatabaseResultExt, Result, StudyError},
    models::{FilterOptions, Lesson, LessonFilter, NewLesson},
};

const INSERT_LESSON_SQL: &str = "INSERT INTO lessons (title, content, academic_year, semester, module, date_added) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const LESSON_COLUMNS: &str = "id, title, content, academic_year, semester, module, date_added";
const DELETE_LESSON_SQL: &str = "DELETE FROM lessons WHERE id = ?1";
const COUNT_LESSONS_SQL: &str = "SELECT COUNT(*) FROM lessons";

// Equal timestamps fall back to insertion order so listings stay stable.
// Stored timestamps always carry nine fractional digits, so text order
// matches time order.
const NEWEST_FIRST: &str = "ORDER BY date_added DESC, id DESC";

/// Category columns that distinct-value queries may read.
#[derive(Debug, Clone, Copy)]
enum Category {
    Year,
    Semester,
    Module,
}

impl Category {
    fn column(self) -> &'static str {
        match self {
            Category::Year => "academic_year",
            Category::Semester => "semester",
            Category::Module => "module",
        }
    }

    /// Years read newest first; the others alphabetically.
    fn direction(self) -> &'static str {
        match self {
            Category::Year => "DESC",
            Category::Semester | Category::Module => "ASC",
        }
    }
}

/// A lesson row as stored, before its timestamp text is parsed.
struct StoredLesson {
    id: u64,
    title: String,
    content: String,
    academic_year: String,
    semester: String,
    module: String,
    date_added: String,
}

impl StoredLesson {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            content: row.get(2)?,
            academic_year: row.get(3)?,
            semester: row.get(4)?,
            module: row.get(5)?,
            date_added: row.get(6)?,
        })
    }

    fn into_lesson(self) -> Result<Lesson> {
        let date_added =
            self.date_added
                .parse::<Timestamp>()
                .map_err(|e| StudyError::Timestamp {
                    message: format!(
                        "Invalid date_added '{}' for lesson {}: {e}",
                        self.date_added, self.id
                    ),
                })?;

        Ok(Lesson {
            id: self.id,
            title: self.title,
            content: self.content,
            academic_year: self.academic_year,
            semester: self.semester,
            module: self.module,
            date_added,
        })
    }
}

impl super::Database {
    /// Saves a new lesson, stamping the current time, and returns it with its
    /// assigned ID.
    ///
    /// Blank fields are rejected with `StudyError::InvalidInput` before
    /// anything is written. The insert runs in its own transaction so a
    /// failure leaves no partial row.
    pub fn save_lesson(&mut self, lesson: &NewLesson) -> Result<Lesson> {
        lesson.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_LESSON_SQL,
            params![
                lesson.title,
                lesson.content,
                lesson.academic_year,
                lesson.semester,
                lesson.module,
                format!("{now:.9}")
            ],
        )
        .db_context("Failed to insert lesson")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Saved lesson {id} ({})", lesson.title);

        Ok(Lesson {
            id,
            title: lesson.title.clone(),
            content: lesson.content.clone(),
            academic_year: lesson.academic_year.clone(),
            semester: lesson.semester.clone(),
            module: lesson.module.clone(),
            date_added: now,
        })
    }

    /// Retrieves a lesson by its ID.
    pub fn get_lesson(&self, id: u64) -> Result<Option<Lesson>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {LESSON_COLUMNS} FROM lessons WHERE id = ?1"))
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], StoredLesson::from_row)
            .optional()
            .db_context("Failed to query lesson")?
            .map(StoredLesson::into_lesson)
            .transpose()
    }

    /// Lists every lesson, most recently added first.
    pub fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.list_lessons_filtered(&LessonFilter::default())
    }

    /// Lists lessons matching every condition set on the filter, most
    /// recently added first.
    pub fn list_lessons_filtered(&self, filter: &LessonFilter) -> Result<Vec<Lesson>> {
        let mut query = format!("SELECT {LESSON_COLUMNS} FROM lessons");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<&dyn ToSql> = Vec::new();

        if let Some(ref year) = filter.academic_year {
            conditions.push("academic_year = ?");
            params_vec.push(year);
        }

        if let Some(ref semester) = filter.semester {
            conditions.push("semester = ?");
            params_vec.push(semester);
        }

        if let Some(ref module) = filter.module {
            conditions.push("module = ?");
            params_vec.push(module);
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push(' ');
        query.push_str(NEWEST_FIRST);

        debug!("Listing lessons: {query}");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(&params_vec[..], StoredLesson::from_row)
            .db_context("Failed to query lessons")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read lesson row")?;

        rows.into_iter().map(StoredLesson::into_lesson).collect()
    }

    /// Deletes a lesson. Returns whether a row was removed; deleting an
    /// unknown ID is not an error.
    pub fn delete_lesson(&mut self, id: u64) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_LESSON_SQL, params![id as i64])
            .db_context("Failed to delete lesson")?;

        debug!("Delete lesson {id}: {affected} row(s) removed");
        Ok(affected > 0)
    }

    /// Returns the number of stored lessons.
    pub fn count_lessons(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_LESSONS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count lessons")
    }

    /// Distinct academic years, newest first.
    pub fn distinct_years(&self) -> Result<Vec<String>> {
        self.distinct_values(Category::Year)
    }

    /// Distinct semesters, ascending.
    pub fn distinct_semesters(&self) -> Result<Vec<String>> {
        self.distinct_values(Category::Semester)
    }

    /// Distinct modules, ascending.
    pub fn distinct_modules(&self) -> Result<Vec<String>> {
        self.distinct_values(Category::Module)
    }

    /// All three distinct-value lists at once.
    pub fn filter_options(&self) -> Result<FilterOptions> {
        Ok(FilterOptions {
            years: self.distinct_years()?,
            semesters: self.distinct_semesters()?,
            modules: self.distinct_modules()?,
        })
    }

    fn distinct_values(&self, category: Category) -> Result<Vec<String>> {
        let column = category.column();
        let query = format!(
            "SELECT DISTINCT {column} FROM lessons ORDER BY {column} {}",
            category.direction()
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let values = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to query distinct values")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read distinct value")?;

        Ok(values)
    }
}
