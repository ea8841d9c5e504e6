//! Queries shared by the instructor and student tables
//!
//! Both tables have the same shape (`id`, `name`, `email`, `deleted_at`), so
//! the SQL lives here once and each repository maps rows into its own entity.

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use shared::PageRequest;

use crate::db::map_email_conflict;
use crate::error::ServerResult;
use crate::models::PersonFields;

/// Table plus the entity name used in error messages
#[derive(Debug, Clone, Copy)]
pub(crate) struct PersonTable {
    pub table: &'static str,
    pub entity: &'static str,
}

pub(crate) const INSTRUCTORS: PersonTable = PersonTable {
    table: "instructors",
    entity: "Instructor",
};

pub(crate) const STUDENTS: PersonTable = PersonTable {
    table: "students",
    entity: "Student",
};

/// Raw person row before it becomes an `Instructor` or `Student`
#[derive(Debug, Clone)]
pub(crate) struct PersonRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PersonRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            deleted_at: row.get(3)?,
        })
    }
}

impl PersonTable {
    pub(crate) fn insert(&self, conn: &Connection, fields: &PersonFields) -> ServerResult<PersonRow> {
        conn.execute(
            &format!("INSERT INTO {} (name, email) VALUES (?1, ?2)", self.table),
            params![fields.name, fields.email],
        )
        .map_err(|e| map_email_conflict(self.entity, &fields.email, e))?;

        Ok(PersonRow {
            id: conn.last_insert_rowid(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            deleted_at: None,
        })
    }

    pub(crate) fn find_all(&self, conn: &Connection) -> ServerResult<Vec<PersonRow>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, email, deleted_at FROM {} WHERE deleted_at IS NULL ORDER BY id",
            self.table
        ))?;
        let rows = stmt
            .query_map([], PersonRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub(crate) fn find_page(&self, conn: &Connection, request: PageRequest) -> ServerResult<(Vec<PersonRow>, u64)> {
        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL", self.table),
            [],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, email, deleted_at FROM {}
             WHERE deleted_at IS NULL
             ORDER BY id
             LIMIT ?1 OFFSET ?2",
            self.table
        ))?;
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);
        let rows = stmt
            .query_map(params![i64::from(request.size), offset], PersonRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((rows, total.max(0) as u64))
    }

    pub(crate) fn find_by_id(&self, conn: &Connection, id: i64) -> ServerResult<Option<PersonRow>> {
        let row = conn
            .query_row(
                &format!(
                    "SELECT id, name, email, deleted_at FROM {} WHERE id = ?1 AND deleted_at IS NULL",
                    self.table
                ),
                params![id],
                PersonRow::from_row,
            )
            .optional()?;
        Ok(row)
    }

    pub(crate) fn update(&self, conn: &Connection, id: i64, fields: &PersonFields) -> ServerResult<Option<PersonRow>> {
        let changed = conn
            .execute(
                &format!(
                    "UPDATE {} SET name = ?1, email = ?2 WHERE id = ?3 AND deleted_at IS NULL",
                    self.table
                ),
                params![fields.name, fields.email, id],
            )
            .map_err(|e| map_email_conflict(self.entity, &fields.email, e))?;

        if changed == 0 {
            return Ok(None);
        }
        self.find_by_id(conn, id)
    }

    pub(crate) fn soft_delete(&self, conn: &Connection, id: i64, at: DateTime<Utc>) -> ServerResult<bool> {
        let changed = conn.execute(
            &format!(
                "UPDATE {} SET deleted_at = ?1 WHERE id = ?2 AND deleted_at IS NULL",
                self.table
            ),
            params![at, id],
        )?;
        Ok(changed > 0)
    }
}
