//! Student endpoints - /api/students

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
};
use shared::{StudentDto, StudentId};

use crate::error::ServerResult;
use crate::state::AppState;
use crate::web::extract::{ApiJson, ApiPath};

/// Routes mounted under `/api/students`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/:id", get(get_student).put(update_student).delete(delete_student))
}

pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<StudentDto>,
) -> ServerResult<Json<StudentDto>> {
    Ok(Json(state.students.create(dto).await?))
}

pub async fn list_students(State(state): State<AppState>) -> ServerResult<Json<Vec<StudentDto>>> {
    Ok(Json(state.students.list().await?))
}

pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<Json<StudentDto>> {
    Ok(Json(state.students.get(StudentId(id)).await?))
}

pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<StudentDto>,
) -> ServerResult<Json<StudentDto>> {
    Ok(Json(state.students.update(StudentId(id), dto).await?))
}

pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<StatusCode> {
    state.students.delete(StudentId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
