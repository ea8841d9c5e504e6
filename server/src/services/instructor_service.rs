//! Instructor business operations

use std::sync::Arc;

use chrono::Utc;
use shared::{Component, InstructorDto, InstructorId, Page, PageRequest, component_info, component_warn};

use crate::error::{ServerError, ServerResult};
use crate::models::PersonFields;
use crate::traits::InstructorRepository;

const ENTITY: &str = "Instructor";

/// Instructor service over an injected repository
#[derive(Clone)]
pub struct InstructorService {
    repository: Arc<dyn InstructorRepository>,
}

impl InstructorService {
    pub fn new(repository: Arc<dyn InstructorRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: InstructorDto) -> ServerResult<InstructorDto> {
        component_info!(Component::current(), "Creating instructor: {}", dto.name);
        dto.validate()?;

        let instructor = self.repository.insert(PersonFields::from(&dto)).await?;
        Ok(instructor.into())
    }

    pub async fn list(&self) -> ServerResult<Vec<InstructorDto>> {
        component_info!(Component::current(), "Fetching all instructors");
        let instructors = self.repository.find_all().await?;
        Ok(instructors.into_iter().map(InstructorDto::from).collect())
    }

    pub async fn list_page(&self, request: PageRequest) -> ServerResult<Page<InstructorDto>> {
        component_info!(
            Component::current(),
            "Fetching instructors for page: {}, size: {}",
            request.page,
            request.size
        );
        request.validate()?;

        let (instructors, total) = self.repository.find_page(request).await?;
        Ok(Page::new(instructors, request, total).map(InstructorDto::from))
    }

    pub async fn get(&self, id: InstructorId) -> ServerResult<InstructorDto> {
        component_info!(Component::current(), "Fetching instructor with ID: {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(InstructorDto::from)
            .ok_or_else(|| ServerError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: InstructorId, dto: InstructorDto) -> ServerResult<InstructorDto> {
        component_info!(Component::current(), "Updating instructor with ID: {}", id);
        dto.validate()?;

        self.repository
            .update(id, PersonFields::from(&dto))
            .await?
            .map(InstructorDto::from)
            .ok_or_else(|| ServerError::not_found(ENTITY, id))
    }

    pub async fn delete(&self, id: InstructorId) -> ServerResult<()> {
        component_info!(Component::current(), "Soft deleting instructor with ID: {}", id);
        if self.repository.soft_delete(id, Utc::now()).await? {
            Ok(())
        } else {
            component_warn!(Component::current(), "No live instructor with ID: {}", id);
            Err(ServerError::not_found(ENTITY, id))
        }
    }
}
