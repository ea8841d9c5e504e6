//! Persistent entities and their DTO mappings

use chrono::{DateTime, NaiveDate, Utc};
use shared::{CourseDto, CourseId, InstructorDto, InstructorId, StudentDto, StudentId};

/// Instructor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    pub email: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Student row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Course row joined with its live relationships
///
/// `instructor_id` is `None` when the instructor was never assigned or has
/// been soft-deleted; `student_ids` only lists students that are not deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub instructor_id: Option<InstructorId>,
    pub student_ids: Vec<StudentId>,
}

/// Fields written when creating or updating a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub email: String,
}

/// Course columns written on create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<&InstructorDto> for PersonFields {
    fn from(dto: &InstructorDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
        }
    }
}

impl From<&StudentDto> for PersonFields {
    fn from(dto: &StudentDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
        }
    }
}

impl From<&CourseDto> for CourseFields {
    fn from(dto: &CourseDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description.clone(),
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

impl From<Instructor> for InstructorDto {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: Some(instructor.id),
            name: instructor.name,
            email: instructor.email,
        }
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            name: student.name,
            email: student.email,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: Some(course.id),
            title: course.title,
            description: course.description,
            start_date: course.start_date,
            end_date: course.end_date,
            instructor_id: course.instructor_id,
            student_ids: course.student_ids,
        }
    }
}
