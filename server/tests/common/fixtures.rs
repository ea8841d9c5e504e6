//! Test fixtures for router integration tests

use axum::{Router, http::StatusCode};
use shared::{CourseDto, CourseId, InstructorDto, InstructorId, StudentDto, StudentId};

use super::helpers;

pub fn instructor(name: &str) -> InstructorDto {
    InstructorDto::new(name, format!("{}@school.edu", name.to_lowercase()))
}

pub fn student(name: &str) -> StudentDto {
    StudentDto::new(name, format!("{}@students.edu", name.to_lowercase()))
}

pub async fn create_instructor(router: &Router, name: &str) -> InstructorId {
    let response = helpers::post(router, "/api/instructors", &instructor(name)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json::<InstructorDto>().id.unwrap()
}

pub async fn create_student(router: &Router, name: &str) -> StudentId {
    let response = helpers::post(router, "/api/students", &student(name)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json::<StudentDto>().id.unwrap()
}

pub async fn create_course(router: &Router, title: &str) -> CourseId {
    let response = helpers::post(router, "/api/courses", &CourseDto::new(title)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json::<CourseDto>().id.unwrap()
}
