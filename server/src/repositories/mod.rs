//! Repository implementations
//!
//! SQLite implementations of the repository traits for production use

mod person;

pub mod course_repository;
pub mod instructor_repository;
pub mod student_repository;

// Re-export repository implementations
pub use course_repository::SqliteCourseRepository;
pub use instructor_repository::SqliteInstructorRepository;
pub use student_repository::SqliteStudentRepository;

#[cfg(test)]
mod tests;
