//! Tests for the SQLite course repository

use chrono::{NaiveDate, Utc};
use shared::{CourseId, InstructorId, StudentId};

use super::fixtures::*;
use super::helpers::*;
use crate::error::ServerError;
use crate::models::CourseFields;
use crate::traits::{CourseRepository, InstructorRepository, StudentRepository};

mod crud_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_starts_without_relationships() {
        let repos = create_test_repositories();

        let created = repos.courses.insert(course("Operating Systems")).await.unwrap();
        assert_eq!(created.id, CourseId(1));
        assert!(created.instructor_id.is_none());
        assert!(created.student_ids.is_empty());

        let found = repos.courses.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.start_date, NaiveDate::from_ymd_opt(2025, 1, 13));
    }

    #[tokio::test]
    async fn test_update_changes_columns_only() {
        let repos = create_test_repositories();
        let instructor = repos.instructors.insert(person("Andrew Tanenbaum")).await.unwrap();
        let created = repos.courses.insert(course("Networks")).await.unwrap();
        repos.courses.set_instructor(created.id, instructor.id).await.unwrap();

        let fields = CourseFields {
            title: "Computer Networks".into(),
            description: None,
            start_date: None,
            end_date: None,
        };
        let updated = repos.courses.update(created.id, fields).await.unwrap().unwrap();

        assert_eq!(updated.title, "Computer Networks");
        assert!(updated.description.is_none());
        assert!(updated.start_date.is_none());
        assert_eq!(updated.instructor_id, Some(instructor.id));
    }

    #[tokio::test]
    async fn test_update_missing_course() {
        let repos = create_test_repositories();
        let result = repos.courses.update(CourseId(7), course("Ghost")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_physical_and_cascades_enrollments() {
        let repos = create_test_repositories();
        let student = repos.students.insert(person("Ada Lovelace")).await.unwrap();
        let created = repos.courses.insert(course("Analytical Engines")).await.unwrap();
        repos.courses.add_student(created.id, student.id).await.unwrap();

        assert!(repos.courses.delete(created.id).await.unwrap());
        assert!(repos.courses.find_by_id(created.id).await.unwrap().is_none());
        assert!(repos.courses.find_all().await.unwrap().is_empty());
        assert!(repos.courses.find_students(created.id).await.unwrap().is_empty());

        // Deleting again removes nothing
        assert!(!repos.courses.delete(created.id).await.unwrap());
        // The student survives the course
        assert!(repos.students.find_by_id(student.id).await.unwrap().is_some());
    }
}

mod relationship_tests {
    use super::*;

    #[tokio::test]
    async fn test_set_instructor_and_find_by_instructor() {
        let repos = create_test_repositories();
        let knuth = repos.instructors.insert(person("Donald Knuth")).await.unwrap();
        let other = repos.instructors.insert(person("Robert Sedgewick")).await.unwrap();
        let algorithms = repos.courses.insert(course("Algorithms")).await.unwrap();
        let typesetting = repos.courses.insert(course("Typesetting")).await.unwrap();
        let data = repos.courses.insert(course("Data Structures")).await.unwrap();

        repos.courses.set_instructor(algorithms.id, knuth.id).await.unwrap();
        repos.courses.set_instructor(typesetting.id, knuth.id).await.unwrap();
        let assigned = repos.courses.set_instructor(data.id, other.id).await.unwrap().unwrap();
        assert_eq!(assigned.instructor_id, Some(other.id));

        let taught = repos.courses.find_by_instructor(knuth.id).await.unwrap();
        assert_eq!(
            taught.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![algorithms.id, typesetting.id]
        );

        assert!(repos.courses.find_by_instructor(InstructorId(404)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reassigning_instructor_replaces_previous() {
        let repos = create_test_repositories();
        let first = repos.instructors.insert(person("First Teacher")).await.unwrap();
        let second = repos.instructors.insert(person("Second Teacher")).await.unwrap();
        let created = repos.courses.insert(course("Logic")).await.unwrap();

        repos.courses.set_instructor(created.id, first.id).await.unwrap();
        repos.courses.set_instructor(created.id, second.id).await.unwrap();

        assert!(repos.courses.find_by_instructor(first.id).await.unwrap().is_empty());
        assert_eq!(repos.courses.find_by_instructor(second.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_instructor_on_missing_course() {
        let repos = create_test_repositories();
        let instructor = repos.instructors.insert(person("Lonely Teacher")).await.unwrap();
        let result = repos.courses.set_instructor(CourseId(3), instructor.id).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_set_unknown_instructor_is_not_found() {
        let repos = create_test_repositories();
        let created = repos.courses.insert(course("Orphaned")).await.unwrap();
        let result = repos.courses.set_instructor(created.id, InstructorId(77)).await;
        assert!(matches!(
            result,
            Err(ServerError::NotFound { entity: "Instructor", id: 77 })
        ));
    }

    #[tokio::test]
    async fn test_add_unknown_student_is_not_found() {
        let repos = create_test_repositories();
        let created = repos.courses.insert(course("Empty Room")).await.unwrap();
        let result = repos.courses.add_student(created.id, StudentId(88)).await;
        assert!(matches!(
            result,
            Err(ServerError::NotFound { entity: "Student", id: 88 })
        ));
    }

    #[tokio::test]
    async fn test_add_student_is_idempotent() {
        let repos = create_test_repositories();
        let ada = repos.students.insert(person("Ada Lovelace")).await.unwrap();
        let alan = repos.students.insert(person("Alan Turing")).await.unwrap();
        let created = repos.courses.insert(course("Computability")).await.unwrap();

        repos.courses.add_student(created.id, alan.id).await.unwrap();
        repos.courses.add_student(created.id, ada.id).await.unwrap();
        let enrolled = repos.courses.add_student(created.id, ada.id).await.unwrap().unwrap();

        assert_eq!(enrolled.student_ids, vec![ada.id, alan.id]);

        let students = repos.courses.find_students(created.id).await.unwrap();
        assert_eq!(students, vec![ada, alan]);
    }

    #[tokio::test]
    async fn test_add_student_to_missing_course() {
        let repos = create_test_repositories();
        let ada = repos.students.insert(person("Ada Lovelace")).await.unwrap();
        let result = repos.courses.add_student(CourseId(9), ada.id).await.unwrap();
        assert!(result.is_none());
    }
}

mod soft_delete_visibility_tests {
    use super::*;

    #[tokio::test]
    async fn test_deleted_students_drop_out_of_courses() {
        let repos = create_test_repositories();
        let ada = repos.students.insert(person("Ada Lovelace")).await.unwrap();
        let alan = repos.students.insert(person("Alan Turing")).await.unwrap();
        let created = repos.courses.insert(course("History of Computing")).await.unwrap();
        repos.courses.add_student(created.id, ada.id).await.unwrap();
        repos.courses.add_student(created.id, alan.id).await.unwrap();

        repos.students.soft_delete(alan.id, Utc::now()).await.unwrap();

        let reloaded = repos.courses.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(reloaded.student_ids, vec![ada.id]);

        let students = repos.courses.find_students(created.id).await.unwrap();
        assert_eq!(students.iter().map(|s| s.id).collect::<Vec<StudentId>>(), vec![ada.id]);
    }

    #[tokio::test]
    async fn test_deleted_instructor_drops_off_course() {
        let repos = create_test_repositories();
        let instructor = repos.instructors.insert(person("Retiring Professor")).await.unwrap();
        let created = repos.courses.insert(course("Emeritus Seminar")).await.unwrap();
        repos.courses.set_instructor(created.id, instructor.id).await.unwrap();

        repos.instructors.soft_delete(instructor.id, Utc::now()).await.unwrap();

        let reloaded = repos.courses.find_by_id(created.id).await.unwrap().unwrap();
        assert!(reloaded.instructor_id.is_none());
        assert!(repos.courses.find_by_instructor(instructor.id).await.unwrap().is_empty());
        // The course itself is untouched
        assert_eq!(repos.courses.find_all().await.unwrap().len(), 1);
    }
}
