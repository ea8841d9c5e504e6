//! SQLite instructor repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{InstructorId, PageRequest};

use super::person::{INSTRUCTORS, PersonRow};
use crate::db::Database;
use crate::error::ServerResult;
use crate::models::{Instructor, PersonFields};
use crate::traits::InstructorRepository;

/// Instructor repository backed by the `instructors` table
#[derive(Clone)]
pub struct SqliteInstructorRepository {
    db: Database,
}

impl SqliteInstructorRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl From<PersonRow> for Instructor {
    fn from(row: PersonRow) -> Self {
        Self {
            id: InstructorId(row.id),
            name: row.name,
            email: row.email,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl InstructorRepository for SqliteInstructorRepository {
    async fn insert(&self, fields: PersonFields) -> ServerResult<Instructor> {
        self.db
            .call(move |conn| INSTRUCTORS.insert(conn, &fields).map(Instructor::from))
            .await
    }

    async fn find_all(&self) -> ServerResult<Vec<Instructor>> {
        self.db
            .call(|conn| {
                let rows = INSTRUCTORS.find_all(conn)?;
                Ok(rows.into_iter().map(Instructor::from).collect())
            })
            .await
    }

    async fn find_page(&self, request: PageRequest) -> ServerResult<(Vec<Instructor>, u64)> {
        self.db
            .call(move |conn| {
                let (rows, total) = INSTRUCTORS.find_page(conn, request)?;
                Ok((rows.into_iter().map(Instructor::from).collect(), total))
            })
            .await
    }

    async fn find_by_id(&self, id: InstructorId) -> ServerResult<Option<Instructor>> {
        self.db
            .call(move |conn| Ok(INSTRUCTORS.find_by_id(conn, id.get())?.map(Instructor::from)))
            .await
    }

    async fn update(&self, id: InstructorId, fields: PersonFields) -> ServerResult<Option<Instructor>> {
        self.db
            .call(move |conn| Ok(INSTRUCTORS.update(conn, id.get(), &fields)?.map(Instructor::from)))
            .await
    }

    async fn soft_delete(&self, id: InstructorId, at: DateTime<Utc>) -> ServerResult<bool> {
        self.db
            .call(move |conn| INSTRUCTORS.soft_delete(conn, id.get(), at))
            .await
    }
}
