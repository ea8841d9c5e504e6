//! Business services
//!
//! One service per entity, mapping DTOs to repository calls and back

pub mod course_service;
pub mod instructor_service;
pub mod student_service;

// Re-export service types
pub use course_service::CourseService;
pub use instructor_service::InstructorService;
pub use student_service::StudentService;
