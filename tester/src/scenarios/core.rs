//! Core course management flow

use anyhow::ensure;
use shared::{CourseDto, InstructorDto, StudentDto};

use super::run_tag;
use crate::api_client::ApiClient;

/// Create people and a course, wire them together and read the relationships back
pub async fn basic(client: &ApiClient) -> anyhow::Result<()> {
    tracing::info!("🧪 Basic: create, assign, enroll");
    let tag = run_tag();

    let health = client.health().await?;
    ensure!(health["status"] == "healthy", "server is not healthy: {}", health);

    let instructor = client
        .create_instructor(&InstructorDto::new("Ada Lovelace", format!("ada-{tag}@school.edu")))
        .await?;
    let instructor_id = instructor.id.ok_or_else(|| anyhow::anyhow!("instructor id missing"))?;

    let course = client
        .create_course(&CourseDto::new(format!("Rust 101 ({tag})")).with_description("Ownership and borrowing"))
        .await?;
    let course_id = course.id.ok_or_else(|| anyhow::anyhow!("course id missing"))?;
    ensure!(course.instructor_id.is_none(), "new course already has an instructor");

    let mut student_ids = Vec::new();
    for name in ["Linus", "Ken"] {
        let student = client
            .create_student(&StudentDto::new(name, format!("{}-{tag}@students.edu", name.to_lowercase())))
            .await?;
        student_ids.push(student.id.ok_or_else(|| anyhow::anyhow!("student id missing"))?);
    }

    let assigned = client.assign_instructor(course_id, instructor_id).await?;
    ensure!(
        assigned.instructor_id == Some(instructor_id),
        "instructor not assigned: {:?}",
        assigned.instructor_id
    );

    for student_id in &student_ids {
        client.enroll_student(course_id, *student_id).await?;
    }
    // Enrolling twice must not duplicate the enrollment
    let course = client.enroll_student(course_id, student_ids[0]).await?;
    ensure!(
        course.student_ids == student_ids,
        "unexpected enrollments: {:?}",
        course.student_ids
    );

    let taught = client.courses_by_instructor(instructor_id).await?;
    ensure!(
        taught.iter().any(|c| c.id == Some(course_id)),
        "course missing from instructor listing"
    );

    let enrolled = client.students_in_course(course_id).await?;
    ensure!(enrolled.len() == 2, "expected 2 students, got {}", enrolled.len());

    let renamed = client
        .update_course(course_id, &CourseDto::new(format!("Rust 102 ({tag})")))
        .await?;
    ensure!(renamed.instructor_id == Some(instructor_id), "update dropped the instructor");
    ensure!(renamed.student_ids == student_ids, "update dropped enrollments");

    client.delete_course(course_id).await?;
    let courses = client.list_courses().await?;
    ensure!(courses.iter().all(|c| c.id != Some(course_id)), "deleted course still listed");

    tracing::info!("✅ Basic: PASSED");
    Ok(())
}
