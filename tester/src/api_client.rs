//! REST API client for the course management server
//!
//! Typed wrappers over every endpoint. Non-2xx responses surface as
//! [`ApiStatusError`] so scenarios can assert on expected failures.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{CourseDto, CourseId, InstructorDto, InstructorId, Page, PageRequest, StudentDto, StudentId};
use thiserror::Error;

/// A request the server answered with a non-success status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{method} {path} returned {status}: {message}")]
pub struct ApiStatusError {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub message: String,
}

/// Status of a failed call, if the failure came from the server
pub fn status_of(err: &anyhow::Error) -> Option<StatusCode> {
    err.downcast_ref::<ApiStatusError>().map(|e| e.status)
}

/// REST API client for the course management server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client for `host:port` or a full base URL
    pub fn new(server_addr: &str) -> anyhow::Result<Self> {
        let base_url = if server_addr.starts_with("http") {
            server_addr.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", server_addr)
        };

        let client = reqwest::Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe
    pub async fn health(&self) -> anyhow::Result<Value> {
        self.call(Method::GET, "/health", |r| r).await
    }

    // Instructors

    pub async fn create_instructor(&self, dto: &InstructorDto) -> anyhow::Result<InstructorDto> {
        tracing::info!("👩‍🏫 Creating instructor '{}'", dto.name);
        self.call(Method::POST, "/api/instructors", |r| r.json(dto)).await
    }

    pub async fn list_instructors(&self) -> anyhow::Result<Vec<InstructorDto>> {
        self.call(Method::GET, "/api/instructors", |r| r).await
    }

    pub async fn list_instructors_page(&self, request: PageRequest) -> anyhow::Result<Page<InstructorDto>> {
        self.call(Method::GET, "/api/instructors/page", |r| r.query(&request)).await
    }

    pub async fn get_instructor(&self, id: InstructorId) -> anyhow::Result<InstructorDto> {
        self.call(Method::GET, &format!("/api/instructors/{id}"), |r| r).await
    }

    pub async fn update_instructor(&self, id: InstructorId, dto: &InstructorDto) -> anyhow::Result<InstructorDto> {
        self.call(Method::PUT, &format!("/api/instructors/{id}"), |r| r.json(dto)).await
    }

    pub async fn delete_instructor(&self, id: InstructorId) -> anyhow::Result<()> {
        tracing::info!("🗑️ Deleting instructor {}", id);
        self.call_empty(Method::DELETE, &format!("/api/instructors/{id}")).await
    }

    // Students

    pub async fn create_student(&self, dto: &StudentDto) -> anyhow::Result<StudentDto> {
        tracing::info!("🎓 Creating student '{}'", dto.name);
        self.call(Method::POST, "/api/students", |r| r.json(dto)).await
    }

    pub async fn list_students(&self) -> anyhow::Result<Vec<StudentDto>> {
        self.call(Method::GET, "/api/students", |r| r).await
    }

    pub async fn get_student(&self, id: StudentId) -> anyhow::Result<StudentDto> {
        self.call(Method::GET, &format!("/api/students/{id}"), |r| r).await
    }

    pub async fn update_student(&self, id: StudentId, dto: &StudentDto) -> anyhow::Result<StudentDto> {
        self.call(Method::PUT, &format!("/api/students/{id}"), |r| r.json(dto)).await
    }

    pub async fn delete_student(&self, id: StudentId) -> anyhow::Result<()> {
        tracing::info!("🗑️ Deleting student {}", id);
        self.call_empty(Method::DELETE, &format!("/api/students/{id}")).await
    }

    // Courses

    pub async fn create_course(&self, dto: &CourseDto) -> anyhow::Result<CourseDto> {
        tracing::info!("📚 Creating course '{}'", dto.title);
        self.call(Method::POST, "/api/courses", |r| r.json(dto)).await
    }

    pub async fn list_courses(&self) -> anyhow::Result<Vec<CourseDto>> {
        self.call(Method::GET, "/api/courses", |r| r).await
    }

    pub async fn get_course(&self, id: CourseId) -> anyhow::Result<CourseDto> {
        self.call(Method::GET, &format!("/api/courses/{id}"), |r| r).await
    }

    pub async fn update_course(&self, id: CourseId, dto: &CourseDto) -> anyhow::Result<CourseDto> {
        self.call(Method::PUT, &format!("/api/courses/{id}"), |r| r.json(dto)).await
    }

    pub async fn delete_course(&self, id: CourseId) -> anyhow::Result<()> {
        self.call_empty(Method::DELETE, &format!("/api/courses/{id}")).await
    }

    pub async fn assign_instructor(&self, course: CourseId, instructor: InstructorId) -> anyhow::Result<CourseDto> {
        tracing::info!("🔗 Assigning instructor {} to course {}", instructor, course);
        self.call(Method::POST, &format!("/api/courses/{course}/instructor/{instructor}"), |r| r)
            .await
    }

    pub async fn enroll_student(&self, course: CourseId, student: StudentId) -> anyhow::Result<CourseDto> {
        tracing::info!("🔗 Enrolling student {} in course {}", student, course);
        self.call(Method::POST, &format!("/api/courses/{course}/student/{student}"), |r| r)
            .await
    }

    pub async fn courses_by_instructor(&self, instructor: InstructorId) -> anyhow::Result<Vec<CourseDto>> {
        self.call(Method::GET, &format!("/api/courses/instructor/{instructor}"), |r| r)
            .await
    }

    pub async fn students_in_course(&self, course: CourseId) -> anyhow::Result<Vec<StudentDto>> {
        self.call(Method::GET, &format!("/api/courses/{course}/students"), |r| r).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> anyhow::Result<T> {
        let response = self.send(method, path, build).await?;
        Ok(response.json().await?)
    }

    async fn call_empty(&self, method: Method, path: &str) -> anyhow::Result<()> {
        self.send(method, path, |r| r).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> anyhow::Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let request = build(self.client.request(method.clone(), &url));
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("{} {} -> {}", method, path, status);
            return Ok(response);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body["message"].as_str().map(str::to_string))
            .unwrap_or_default();
        Err(ApiStatusError {
            method,
            path: path.to_string(),
            status,
            message,
        }
        .into())
    }
}
