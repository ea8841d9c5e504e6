//! SQLite course repository
//!
//! Courses are read through a left join on live instructors, and enrollment
//! ids through a join on live students, so soft-deleted people disappear from
//! course views without touching the relationship rows.

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, params};
use shared::{CourseId, InstructorId, StudentId};

use super::person::{INSTRUCTORS, PersonRow, STUDENTS};
use crate::db::{Database, map_missing_reference};
use crate::error::ServerResult;
use crate::models::{Course, CourseFields, Student};
use crate::traits::CourseRepository;

const SELECT_COURSE: &str = "
    SELECT c.id, c.title, c.description, c.start_date, c.end_date, i.id
    FROM courses c
    LEFT JOIN instructors i ON i.id = c.instructor_id AND i.deleted_at IS NULL";

/// Course repository backed by `courses` and `course_students`
#[derive(Clone)]
pub struct SqliteCourseRepository {
    db: Database,
}

impl SqliteCourseRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: CourseId(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        instructor_id: row.get::<_, Option<i64>>(5)?.map(InstructorId),
        student_ids: Vec::new(),
    })
}

fn load_student_ids(conn: &Connection, course_id: CourseId) -> ServerResult<Vec<StudentId>> {
    let mut stmt = conn.prepare_cached(
        "SELECT cs.student_id
         FROM course_students cs
         JOIN students s ON s.id = cs.student_id
         WHERE cs.course_id = ?1 AND s.deleted_at IS NULL
         ORDER BY cs.student_id",
    )?;
    let ids = stmt
        .query_map(params![course_id.get()], |row| row.get::<_, i64>(0).map(StudentId))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

fn query_courses(conn: &Connection, filter: &str, args: &[&dyn rusqlite::ToSql]) -> ServerResult<Vec<Course>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COURSE} {filter} ORDER BY c.id"))?;
    let mut courses = stmt
        .query_map(args, course_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    for course in &mut courses {
        course.student_ids = load_student_ids(conn, course.id)?;
    }
    Ok(courses)
}

fn find_course(conn: &Connection, id: CourseId) -> ServerResult<Option<Course>> {
    let course = conn
        .query_row(
            &format!("{SELECT_COURSE} WHERE c.id = ?1"),
            params![id.get()],
            course_from_row,
        )
        .optional()?;

    match course {
        Some(mut course) => {
            course.student_ids = load_student_ids(conn, course.id)?;
            Ok(Some(course))
        }
        None => Ok(None),
    }
}

fn course_exists(conn: &Connection, id: CourseId) -> ServerResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM courses WHERE id = ?1", params![id.get()], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn insert(&self, fields: CourseFields) -> ServerResult<Course> {
        self.db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO courses (title, description, start_date, end_date) VALUES (?1, ?2, ?3, ?4)",
                    params![fields.title, fields.description, fields.start_date, fields.end_date],
                )?;

                Ok(Course {
                    id: CourseId(conn.last_insert_rowid()),
                    title: fields.title,
                    description: fields.description,
                    start_date: fields.start_date,
                    end_date: fields.end_date,
                    instructor_id: None,
                    student_ids: Vec::new(),
                })
            })
            .await
    }

    async fn find_all(&self) -> ServerResult<Vec<Course>> {
        self.db.call(|conn| query_courses(conn, "", params![])).await
    }

    async fn find_by_id(&self, id: CourseId) -> ServerResult<Option<Course>> {
        self.db.call(move |conn| find_course(conn, id)).await
    }

    async fn update(&self, id: CourseId, fields: CourseFields) -> ServerResult<Option<Course>> {
        self.db
            .call(move |conn| {
                let changed = conn.execute(
                    "UPDATE courses SET title = ?1, description = ?2, start_date = ?3, end_date = ?4 WHERE id = ?5",
                    params![fields.title, fields.description, fields.start_date, fields.end_date, id.get()],
                )?;
                if changed == 0 {
                    return Ok(None);
                }
                find_course(conn, id)
            })
            .await
    }

    async fn delete(&self, id: CourseId) -> ServerResult<bool> {
        self.db
            .call(move |conn| {
                let removed = conn.execute("DELETE FROM courses WHERE id = ?1", params![id.get()])?;
                Ok(removed > 0)
            })
            .await
    }

    async fn set_instructor(&self, id: CourseId, instructor_id: InstructorId) -> ServerResult<Option<Course>> {
        self.db
            .call(move |conn| {
                let changed = conn
                    .execute(
                        "UPDATE courses SET instructor_id = ?1 WHERE id = ?2",
                        params![instructor_id.get(), id.get()],
                    )
                    .map_err(|e| map_missing_reference(INSTRUCTORS.entity, instructor_id.get(), e))?;
                if changed == 0 {
                    return Ok(None);
                }
                find_course(conn, id)
            })
            .await
    }

    async fn add_student(&self, id: CourseId, student_id: StudentId) -> ServerResult<Option<Course>> {
        self.db
            .call(move |conn| {
                if !course_exists(conn, id)? {
                    return Ok(None);
                }
                conn.execute(
                    "INSERT OR IGNORE INTO course_students (course_id, student_id) VALUES (?1, ?2)",
                    params![id.get(), student_id.get()],
                )
                .map_err(|e| map_missing_reference(STUDENTS.entity, student_id.get(), e))?;
                find_course(conn, id)
            })
            .await
    }

    async fn find_by_instructor(&self, instructor_id: InstructorId) -> ServerResult<Vec<Course>> {
        self.db
            .call(move |conn| query_courses(conn, "WHERE i.id = ?1", params![instructor_id.get()]))
            .await
    }

    async fn find_students(&self, id: CourseId) -> ServerResult<Vec<Student>> {
        self.db
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT s.id, s.name, s.email, s.deleted_at
                     FROM course_students cs
                     JOIN {} s ON s.id = cs.student_id
                     WHERE cs.course_id = ?1 AND s.deleted_at IS NULL
                     ORDER BY s.id",
                    STUDENTS.table
                ))?;
                let students = stmt
                    .query_map(params![id.get()], PersonRow::from_row)?
                    .map(|row| row.map(Student::from))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(students)
            })
            .await
    }
}
