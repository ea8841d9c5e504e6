//! Course management server library
//!
//! REST backend for courses, instructors and students: SQLite repositories
//! behind injectable traits, thin services that map DTOs, and an axum router.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;

// Re-export main types
pub use config::{Args, ServerConfig};
pub use db::Database;
pub use error::{ServerError, ServerResult};
pub use server_impl::CourseServer;
pub use state::AppState;

// Re-export trait definitions
pub use traits::{CourseRepository, InstructorRepository, StudentRepository};

// Re-export repository implementations
pub use repositories::{SqliteCourseRepository, SqliteInstructorRepository, SqliteStudentRepository};
