//! Repository trait definitions for dependency injection
//!
//! All database access goes through these traits so services can be tested
//! against generated mocks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{CourseId, InstructorId, PageRequest, StudentId};

use crate::error::ServerResult;
use crate::models::{Course, CourseFields, Instructor, PersonFields, Student};

/// Instructor persistence
///
/// Every lookup skips soft-deleted rows.
#[mockall::automock]
#[async_trait]
pub trait InstructorRepository: Send + Sync {
    /// Insert a new instructor
    async fn insert(&self, fields: PersonFields) -> ServerResult<Instructor>;

    /// All live instructors ordered by id
    async fn find_all(&self) -> ServerResult<Vec<Instructor>>;

    /// One page of live instructors plus the live total
    async fn find_page(&self, request: PageRequest) -> ServerResult<(Vec<Instructor>, u64)>;

    /// Live instructor by id
    async fn find_by_id(&self, id: InstructorId) -> ServerResult<Option<Instructor>>;

    /// Overwrite name and email of a live instructor
    async fn update(&self, id: InstructorId, fields: PersonFields) -> ServerResult<Option<Instructor>>;

    /// Stamp `deleted_at`; false when no live row matched
    async fn soft_delete(&self, id: InstructorId, at: DateTime<Utc>) -> ServerResult<bool>;
}

/// Student persistence
///
/// Every lookup skips soft-deleted rows.
#[mockall::automock]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student
    async fn insert(&self, fields: PersonFields) -> ServerResult<Student>;

    /// All live students ordered by id
    async fn find_all(&self) -> ServerResult<Vec<Student>>;

    /// Live student by id
    async fn find_by_id(&self, id: StudentId) -> ServerResult<Option<Student>>;

    /// Overwrite name and email of a live student
    async fn update(&self, id: StudentId, fields: PersonFields) -> ServerResult<Option<Student>>;

    /// Stamp `deleted_at`; false when no live row matched
    async fn soft_delete(&self, id: StudentId, at: DateTime<Utc>) -> ServerResult<bool>;
}

/// Course persistence, including both relationship tables
#[mockall::automock]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course with no instructor and no students
    async fn insert(&self, fields: CourseFields) -> ServerResult<Course>;

    /// All courses ordered by id
    async fn find_all(&self) -> ServerResult<Vec<Course>>;

    /// Course by id
    async fn find_by_id(&self, id: CourseId) -> ServerResult<Option<Course>>;

    /// Overwrite title, description and dates
    async fn update(&self, id: CourseId, fields: CourseFields) -> ServerResult<Option<Course>>;

    /// Physically remove the course and its enrollments; false when nothing was removed
    async fn delete(&self, id: CourseId) -> ServerResult<bool>;

    /// Point the course at an instructor
    ///
    /// `None` when the course is missing. An instructor row that does not exist
    /// is a `NotFound`; a soft-deleted one is accepted, so callers check liveness first.
    async fn set_instructor(&self, id: CourseId, instructor_id: InstructorId) -> ServerResult<Option<Course>>;

    /// Enroll a student; enrolling twice is a no-op
    ///
    /// `None` when the course is missing. A student row that does not exist is a
    /// `NotFound`; a soft-deleted one is accepted, so callers check liveness first.
    async fn add_student(&self, id: CourseId, student_id: StudentId) -> ServerResult<Option<Course>>;

    /// Courses taught by a live instructor
    async fn find_by_instructor(&self, instructor_id: InstructorId) -> ServerResult<Vec<Course>>;

    /// Live students enrolled in the course
    async fn find_students(&self, id: CourseId) -> ServerResult<Vec<Student>>;
}
