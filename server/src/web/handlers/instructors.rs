//! Instructor endpoints - /api/instructors

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
};
use shared::{InstructorDto, InstructorId, Page, PageRequest};

use crate::error::ServerResult;
use crate::state::AppState;
use crate::web::extract::{ApiJson, ApiPath, ApiQuery};

/// Routes mounted under `/api/instructors`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_instructors).post(create_instructor))
        .route("/page", get(list_instructors_page))
        .route("/:id", get(get_instructor).put(update_instructor).delete(delete_instructor))
}

pub async fn create_instructor(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<InstructorDto>,
) -> ServerResult<Json<InstructorDto>> {
    Ok(Json(state.instructors.create(dto).await?))
}

pub async fn list_instructors(State(state): State<AppState>) -> ServerResult<Json<Vec<InstructorDto>>> {
    Ok(Json(state.instructors.list().await?))
}

/// Paged listing - /api/instructors/page?page=0&size=20
pub async fn list_instructors_page(
    State(state): State<AppState>,
    ApiQuery(request): ApiQuery<PageRequest>,
) -> ServerResult<Json<Page<InstructorDto>>> {
    Ok(Json(state.instructors.list_page(request).await?))
}

pub async fn get_instructor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<Json<InstructorDto>> {
    Ok(Json(state.instructors.get(InstructorId(id)).await?))
}

pub async fn update_instructor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(dto): ApiJson<InstructorDto>,
) -> ServerResult<Json<InstructorDto>> {
    Ok(Json(state.instructors.update(InstructorId(id), dto).await?))
}

pub async fn delete_instructor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ServerResult<StatusCode> {
    state.instructors.delete(InstructorId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
