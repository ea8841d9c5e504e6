//! Shared application state handed to every request handler

use std::sync::Arc;
use std::time::Instant;

use crate::db::Database;
use crate::repositories::{SqliteCourseRepository, SqliteInstructorRepository, SqliteStudentRepository};
use crate::services::{CourseService, InstructorService, StudentService};
use crate::traits::{CourseRepository, InstructorRepository, StudentRepository};

/// Services plus server bookkeeping; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub courses: CourseService,
    pub instructors: InstructorService,
    pub students: StudentService,
    started_at: Instant,
}

impl AppState {
    /// Wire services over injected repositories
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        instructors: Arc<dyn InstructorRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            courses: CourseService::new(courses, Arc::clone(&instructors), Arc::clone(&students)),
            instructors: InstructorService::new(instructors),
            students: StudentService::new(students),
            started_at: Instant::now(),
        }
    }

    /// Wire the SQLite repositories over one database
    pub fn from_database(db: Database) -> Self {
        Self::new(
            Arc::new(SqliteCourseRepository::new(db.clone())),
            Arc::new(SqliteInstructorRepository::new(db.clone())),
            Arc::new(SqliteStudentRepository::new(db)),
        )
    }

    /// Server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
