//! Tests for the SQLite instructor repository

use chrono::Utc;
use shared::{InstructorId, PageRequest};

use super::fixtures::*;
use super::helpers::*;
use crate::error::ServerError;
use crate::models::PersonFields;
use crate::traits::InstructorRepository;

mod sqlite_instructor_repository_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let repos = create_test_repositories();

        let first = repos.instructors.insert(person("Grace Hopper")).await.unwrap();
        let second = repos.instructors.insert(person("Alan Kay")).await.unwrap();

        assert_eq!(first.id, InstructorId(1));
        assert_eq!(second.id, InstructorId(2));
        assert_eq!(first.email, "grace.hopper@example.edu");
        assert!(first.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repos = create_test_repositories();
        repos.instructors.insert(person("Grace Hopper")).await.unwrap();

        let result = repos.instructors.insert(person("Grace Hopper")).await;
        assert!(matches!(result, Err(ServerError::Conflict { entity: "Instructor", .. })));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repos = create_test_repositories();
        let created = repos.instructors.insert(person("Barbara Liskov")).await.unwrap();

        let found = repos.instructors.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));

        let missing = repos.instructors.find_by_id(InstructorId(99)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_name_and_email() {
        let repos = create_test_repositories();
        let created = repos.instructors.insert(person("Ken Thompson")).await.unwrap();

        let fields = PersonFields {
            name: "Kenneth Thompson".into(),
            email: "ken@bell-labs.example".into(),
        };
        let updated = repos.instructors.update(created.id, fields).await.unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Kenneth Thompson");
        assert_eq!(updated.email, "ken@bell-labs.example");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repos = create_test_repositories();
        let result = repos.instructors.update(InstructorId(5), person("Nobody")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_soft_delete_hides_row() {
        let repos = create_test_repositories();
        let kept = repos.instructors.insert(person("Edsger Dijkstra")).await.unwrap();
        let deleted = repos.instructors.insert(person("Tony Hoare")).await.unwrap();

        assert!(repos.instructors.soft_delete(deleted.id, Utc::now()).await.unwrap());

        assert!(repos.instructors.find_by_id(deleted.id).await.unwrap().is_none());
        let all = repos.instructors.find_all().await.unwrap();
        assert_eq!(all, vec![kept]);

        // A second delete finds no live row
        assert!(!repos.instructors.soft_delete(deleted.id, Utc::now()).await.unwrap());
        // Nor can a deleted instructor be updated
        assert!(repos.instructors.update(deleted.id, person("Tony")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_soft_deleted_email_stays_reserved() {
        let repos = create_test_repositories();
        let created = repos.instructors.insert(person("Niklaus Wirth")).await.unwrap();
        repos.instructors.soft_delete(created.id, Utc::now()).await.unwrap();

        let result = repos.instructors.insert(person("Niklaus Wirth")).await;
        assert!(matches!(result, Err(ServerError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_find_page_skips_deleted_and_counts_live_rows() {
        let repos = create_test_repositories();
        let mut ids = Vec::new();
        for n in 0..5 {
            let created = repos.instructors.insert(person(&format!("Instructor {n}"))).await.unwrap();
            ids.push(created.id);
        }
        repos.instructors.soft_delete(ids[1], Utc::now()).await.unwrap();

        let (first, total) = repos.instructors.find_page(PageRequest::new(0, 2)).await.unwrap();
        assert_eq!(total, 4);
        assert_eq!(first.iter().map(|i| i.id).collect::<Vec<_>>(), vec![ids[0], ids[2]]);

        let (second, _) = repos.instructors.find_page(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(second.iter().map(|i| i.id).collect::<Vec<_>>(), vec![ids[3], ids[4]]);

        let (beyond, total) = repos.instructors.find_page(PageRequest::new(5, 2)).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 4);
    }
}
