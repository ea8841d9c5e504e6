//! Course endpoints - /api/courses

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use shared::{CourseDto, CourseId, InstructorId, StudentDto, StudentId};

use crate::error::ServerResult;
use crate::state::AppState;
use crate::web::extract::{ApiJson, ApiPath};

/// Routes mounted under `/api/courses`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route("/instructor/:instructor_id", get(courses_by_instructor))
        .route("/:id", get(get_course).put(update_course).delete(delete_course))
        .route("/:id/instructor/:instructor_id", post(assign_instructor))
        .route("/:id/student/:student_id", post(enroll_student))
        .route("/:id/students", get(students_in_course))
}

pub async fn create_course(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<CourseDto>,
) -> ServerResult<Json<CourseDto>> {
    Ok(Json(state.courses.create(dto).await?))
}

pub async fn list_courses(State(state): State<AppState>) -> ServerResult<Json<Vec<CourseDto>>> {
    Ok(Json(state.courses.list().await?))
}

pub async fn get_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<Json<CourseDto>> {
    Ok(Json(state.courses.get(CourseId(id)).await?))
}

pub async fn update_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<CourseDto>,
) -> ServerResult<Json<CourseDto>> {
    Ok(Json(state.courses.update(CourseId(id), dto).await?))
}

pub async fn delete_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<StatusCode> {
    state.courses.delete(CourseId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn assign_instructor(
    State(state): State<AppState>,
    ApiPath((id, instructor_id)): ApiPath<(i64, i64)>,
) -> ServerResult<Json<CourseDto>> {
    let course = state
        .courses
        .assign_instructor(CourseId(id), InstructorId(instructor_id))
        .await?;
    Ok(Json(course))
}

pub async fn enroll_student(
    State(state): State<AppState>,
    ApiPath((id, student_id)): ApiPath<(i64, i64)>,
) -> ServerResult<Json<CourseDto>> {
    let course = state
        .courses
        .enroll_student(CourseId(id), StudentId(student_id))
        .await?;
    Ok(Json(course))
}

pub async fn courses_by_instructor(
    State(state): State<AppState>,
    ApiPath(instructor_id): ApiPath<i64>,
) -> ServerResult<Json<Vec<CourseDto>>> {
    let courses = state
        .courses
        .courses_by_instructor(InstructorId(instructor_id))
        .await?;
    Ok(Json(courses))
}

pub async fn students_in_course(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<Json<Vec<StudentDto>>> {
    Ok(Json(state.courses.students_in_course(CourseId(id)).await?))
}
