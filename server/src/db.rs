//! SQLite database handle and schema
//!
//! One connection guarded by a mutex; every query runs on the blocking pool
//! so request handlers never stall the async executor.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use shared::{Component, component_info};

use crate::error::{ServerError, ServerResult};

/// Path that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS instructors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        deleted_at TEXT
    );

    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        deleted_at TEXT
    );

    CREATE TABLE IF NOT EXISTS courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        start_date TEXT,
        end_date TEXT,
        instructor_id INTEGER REFERENCES instructors(id)
    );

    -- Enrollment join table (many-to-many)
    CREATE TABLE IF NOT EXISTS course_students (
        course_id INTEGER NOT NULL,
        student_id INTEGER NOT NULL,
        PRIMARY KEY (course_id, student_id),
        FOREIGN KEY (course_id) REFERENCES courses(id) ON DELETE CASCADE,
        FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_courses_instructor
    ON courses(instructor_id);

    CREATE INDEX IF NOT EXISTS idx_course_students_student
    ON course_students(student_id);
";

/// Shared handle to the course management database
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database at `path`; `:memory:` opens a private in-memory database
    pub fn open(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY {
            return Self::open_in_memory();
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        component_info!(Component::current(), "🗄️ Opened database at {}", path.display());
        Self::initialize(conn)
    }

    /// Open an in-memory database (tests and throwaway runs)
    pub fn open_in_memory() -> ServerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> ServerResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the connection on the blocking pool
    pub async fn call<F, T>(&self, f: F) -> ServerResult<T>
    where
        F: FnOnce(&mut Connection) -> ServerResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| ServerError::InternalError("database lock poisoned".into()))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| ServerError::InternalError(format!("database task failed: {e}")))?
    }
}

/// Map a unique-constraint violation on `email` to a conflict, pass everything else through
pub(crate) fn map_email_conflict(entity: &'static str, email: &str, err: rusqlite::Error) -> ServerError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            ServerError::Conflict {
                entity,
                detail: format!("email {email} is already registered"),
            }
        }
        _ => ServerError::Database(err),
    }
}

/// Map a foreign-key violation on a relationship write to a not-found for the referenced row
pub(crate) fn map_missing_reference(entity: &'static str, id: i64, err: rusqlite::Error) -> ServerError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            ServerError::not_found(entity, id)
        }
        _ => ServerError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = Database::open_in_memory().unwrap();
        let tables: Vec<String> = db
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<Result<Vec<String>, _>>()?;
                Ok(names)
            })
            .await
            .unwrap();

        assert_eq!(tables, vec!["course_students", "courses", "instructors", "students"]);
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .call(|conn| Ok(conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_file_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cms.db");

        {
            let db = Database::open(&path).unwrap();
            db.call(|conn| {
                conn.execute(
                    "INSERT INTO students (name, email) VALUES ('Ada', 'ada@example.edu')",
                    [],
                )?;
                Ok(())
            })
            .await
            .unwrap();
        }

        let db = Database::open(&path).unwrap();
        let count: i64 = db
            .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_unique_email_maps_to_conflict() {
        let db = Database::open_in_memory().unwrap();
        let err = db
            .call(|conn| {
                conn.execute("INSERT INTO students (name, email) VALUES ('A', 'a@x.io')", [])?;
                conn.execute("INSERT INTO students (name, email) VALUES ('B', 'a@x.io')", [])
                    .map_err(|e| map_email_conflict("Student", "a@x.io", e))?;
                Ok(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Conflict { entity: "Student", .. }));
    }
}
