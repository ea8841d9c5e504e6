//! SQLite student repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::StudentId;

use super::person::{PersonRow, STUDENTS};
use crate::db::Database;
use crate::error::ServerResult;
use crate::models::{PersonFields, Student};
use crate::traits::StudentRepository;

/// Student repository backed by the `students` table
#[derive(Clone)]
pub struct SqliteStudentRepository {
    db: Database,
}

impl SqliteStudentRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl From<PersonRow> for Student {
    fn from(row: PersonRow) -> Self {
        Self {
            id: StudentId(row.id),
            name: row.name,
            email: row.email,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn insert(&self, fields: PersonFields) -> ServerResult<Student> {
        self.db
            .call(move |conn| STUDENTS.insert(conn, &fields).map(Student::from))
            .await
    }

    async fn find_all(&self) -> ServerResult<Vec<Student>> {
        self.db
            .call(|conn| {
                let rows = STUDENTS.find_all(conn)?;
                Ok(rows.into_iter().map(Student::from).collect())
            })
            .await
    }

    async fn find_by_id(&self, id: StudentId) -> ServerResult<Option<Student>> {
        self.db
            .call(move |conn| Ok(STUDENTS.find_by_id(conn, id.get())?.map(Student::from)))
            .await
    }

    async fn update(&self, id: StudentId, fields: PersonFields) -> ServerResult<Option<Student>> {
        self.db
            .call(move |conn| Ok(STUDENTS.update(conn, id.get(), &fields)?.map(Student::from)))
            .await
    }

    async fn soft_delete(&self, id: StudentId, at: DateTime<Utc>) -> ServerResult<bool> {
        self.db
            .call(move |conn| STUDENTS.soft_delete(conn, id.get(), at))
            .await
    }
}
