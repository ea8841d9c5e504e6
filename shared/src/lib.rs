//! Shared types for the course management system
//!
//! Contains the wire types used by both the server and its clients, plus the
//! logging setup every binary in the workspace goes through.

pub mod dto;
pub mod errors;
pub mod logging;
pub mod types;

pub use dto::{CourseDto, InstructorDto, MAX_PAGE_SIZE, Page, PageRequest, StudentDto};
pub use errors::*;
pub use types::*;
