//! Student business operations

use std::sync::Arc;

use chrono::Utc;
use shared::{Component, StudentDto, StudentId, component_info, component_warn};

use crate::error::{ServerError, ServerResult};
use crate::models::PersonFields;
use crate::traits::StudentRepository;

const ENTITY: &str = "Student";

/// Student service over an injected repository
#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, dto: StudentDto) -> ServerResult<StudentDto> {
        component_info!(Component::current(), "Creating student: {}", dto.name);
        dto.validate()?;

        let student = self.repository.insert(PersonFields::from(&dto)).await?;
        Ok(student.into())
    }

    pub async fn list(&self) -> ServerResult<Vec<StudentDto>> {
        component_info!(Component::current(), "Fetching all students");
        let students = self.repository.find_all().await?;
        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    pub async fn get(&self, id: StudentId) -> ServerResult<StudentDto> {
        component_info!(Component::current(), "Fetching student with ID: {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .map(StudentDto::from)
            .ok_or_else(|| ServerError::not_found(ENTITY, id))
    }

    pub async fn update(&self, id: StudentId, dto: StudentDto) -> ServerResult<StudentDto> {
        component_info!(Component::current(), "Updating student with ID: {}", id);
        dto.validate()?;

        self.repository
            .update(id, PersonFields::from(&dto))
            .await?
            .map(StudentDto::from)
            .ok_or_else(|| ServerError::not_found(ENTITY, id))
    }

    pub async fn delete(&self, id: StudentId) -> ServerResult<()> {
        component_info!(Component::current(), "Soft deleting student with ID: {}", id);
        if self.repository.soft_delete(id, Utc::now()).await? {
            Ok(())
        } else {
            component_warn!(Component::current(), "No live student with ID: {}", id);
            Err(ServerError::not_found(ENTITY, id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;
    use crate::traits::MockStudentRepository;

    fn student(id: i64, name: &str) -> Student {
        Student {
            id: StudentId(id),
            name: name.to_string(),
            email: format!("{}@example.edu", name.to_lowercase()),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_list_maps_every_row() {
        let mut mock = MockStudentRepository::new();
        mock.expect_find_all()
            .returning(|| Ok(vec![student(1, "Ada"), student(2, "Alan")]));

        let students = StudentService::new(Arc::new(mock)).list().await.unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Alan"]);
        assert_eq!(students[1].id, Some(StudentId(2)));
    }

    #[tokio::test]
    async fn test_create_propagates_conflict() {
        let mut mock = MockStudentRepository::new();
        mock.expect_insert().returning(|fields| {
            Err(ServerError::Conflict {
                entity: "Student",
                detail: format!("email {} is already registered", fields.email),
            })
        });

        let result = StudentService::new(Arc::new(mock))
            .create(StudentDto::new("Ada", "ada@example.edu"))
            .await;
        assert!(matches!(result, Err(ServerError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_trims_fields() {
        let mut mock = MockStudentRepository::new();
        mock.expect_update()
            .withf(|id, fields| *id == StudentId(3) && fields.name == "Ada" && fields.email == "ada@example.edu")
            .returning(|id, fields| {
                Ok(Some(Student {
                    id,
                    name: fields.name,
                    email: fields.email,
                    deleted_at: None,
                }))
            });

        let dto = StudentService::new(Arc::new(mock))
            .update(StudentId(3), StudentDto::new("  Ada ", " ada@example.edu"))
            .await
            .unwrap();
        assert_eq!(dto.name, "Ada");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock = MockStudentRepository::new();
        mock.expect_soft_delete().returning(|_, _| Ok(false));

        let err = StudentService::new(Arc::new(mock))
            .delete(StudentId(11))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Student not found with ID: 11");
    }
}
