//! Test helpers for repository tests

use crate::db::Database;
use crate::repositories::{SqliteCourseRepository, SqliteInstructorRepository, SqliteStudentRepository};

/// All three repositories over one fresh in-memory database
pub struct TestRepositories {
    pub instructors: SqliteInstructorRepository,
    pub students: SqliteStudentRepository,
    pub courses: SqliteCourseRepository,
}

/// Create repositories sharing a new in-memory database
pub fn create_test_repositories() -> TestRepositories {
    let db = Database::open_in_memory().unwrap();
    TestRepositories {
        instructors: SqliteInstructorRepository::new(db.clone()),
        students: SqliteStudentRepository::new(db.clone()),
        courses: SqliteCourseRepository::new(db),
    }
}
