//! Repository tests against an in-memory database

pub mod helpers;
pub mod course_repository;
pub mod instructor_repository;
