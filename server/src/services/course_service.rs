//! Course business operations, including both relationship mutations

use std::sync::Arc;

use shared::{Component, CourseDto, CourseId, InstructorId, StudentDto, StudentId, component_info};

use crate::error::{ServerError, ServerResult};
use crate::models::CourseFields;
use crate::traits::{CourseRepository, InstructorRepository, StudentRepository};

/// Course service; needs the people repositories to validate relationship targets
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    instructors: Arc<dyn InstructorRepository>,
    students: Arc<dyn StudentRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        instructors: Arc<dyn InstructorRepository>,
        students: Arc<dyn StudentRepository>,
    ) -> Self {
        Self {
            courses,
            instructors,
            students,
        }
    }

    /// Create a course; relationship fields in the body are ignored
    pub async fn create(&self, dto: CourseDto) -> ServerResult<CourseDto> {
        component_info!(Component::current(), "Saving course: {}", dto.title);
        dto.validate()?;

        let course = self.courses.insert(CourseFields::from(&dto)).await?;
        Ok(course.into())
    }

    pub async fn list(&self) -> ServerResult<Vec<CourseDto>> {
        component_info!(Component::current(), "Fetching all courses");
        let courses = self.courses.find_all().await?;
        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    pub async fn get(&self, id: CourseId) -> ServerResult<CourseDto> {
        component_info!(Component::current(), "Fetching course with ID: {}", id);
        self.courses
            .find_by_id(id)
            .await?
            .map(CourseDto::from)
            .ok_or_else(|| ServerError::not_found("Course", id))
    }

    /// Update title, description and dates
    pub async fn update(&self, id: CourseId, dto: CourseDto) -> ServerResult<CourseDto> {
        component_info!(Component::current(), "Updating course with ID: {}", id);
        dto.validate()?;

        self.courses
            .update(id, CourseFields::from(&dto))
            .await?
            .map(CourseDto::from)
            .ok_or_else(|| ServerError::not_found("Course", id))
    }

    /// Hard delete; deleting a missing course is not an error
    pub async fn delete(&self, id: CourseId) -> ServerResult<()> {
        component_info!(Component::current(), "Deleting course with ID: {}", id);
        self.courses.delete(id).await?;
        Ok(())
    }

    pub async fn assign_instructor(&self, course_id: CourseId, instructor_id: InstructorId) -> ServerResult<CourseDto> {
        component_info!(
            Component::current(),
            "Assigning instructor {} to course {}",
            instructor_id,
            course_id
        );

        self.require_course(course_id).await?;
        if self.instructors.find_by_id(instructor_id).await?.is_none() {
            return Err(ServerError::not_found("Instructor", instructor_id));
        }

        self.courses
            .set_instructor(course_id, instructor_id)
            .await?
            .map(CourseDto::from)
            .ok_or_else(|| ServerError::not_found("Course", course_id))
    }

    pub async fn enroll_student(&self, course_id: CourseId, student_id: StudentId) -> ServerResult<CourseDto> {
        component_info!(
            Component::current(),
            "Enrolling student {} in course {}",
            student_id,
            course_id
        );

        self.require_course(course_id).await?;
        if self.students.find_by_id(student_id).await?.is_none() {
            return Err(ServerError::not_found("Student", student_id));
        }

        self.courses
            .add_student(course_id, student_id)
            .await?
            .map(CourseDto::from)
            .ok_or_else(|| ServerError::not_found("Course", course_id))
    }

    /// Courses taught by an instructor; unknown instructors yield an empty list
    pub async fn courses_by_instructor(&self, instructor_id: InstructorId) -> ServerResult<Vec<CourseDto>> {
        component_info!(
            Component::current(),
            "Fetching courses for instructor ID: {}",
            instructor_id
        );
        let courses = self.courses.find_by_instructor(instructor_id).await?;
        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    pub async fn students_in_course(&self, course_id: CourseId) -> ServerResult<Vec<StudentDto>> {
        component_info!(Component::current(), "Fetching students for course ID: {}", course_id);

        self.require_course(course_id).await?;
        let students = self.courses.find_students(course_id).await?;
        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    async fn require_course(&self, id: CourseId) -> ServerResult<()> {
        match self.courses.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ServerError::not_found("Course", id)),
        }
    }
}
