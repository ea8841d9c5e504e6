//! Soft delete visibility checks

use anyhow::ensure;
use reqwest::StatusCode;
use shared::{CourseDto, InstructorDto, StudentDto};

use super::run_tag;
use crate::api_client::{ApiClient, status_of};

/// Deleted people vanish from listings and from course relationships
pub async fn soft_delete(client: &ApiClient) -> anyhow::Result<()> {
    tracing::info!("🧪 Soft delete: hidden people");
    let tag = run_tag();

    let instructor = client
        .create_instructor(&InstructorDto::new("Grace Hopper", format!("grace-{tag}@school.edu")))
        .await?;
    let instructor_id = instructor.id.ok_or_else(|| anyhow::anyhow!("instructor id missing"))?;
    let student = client
        .create_student(&StudentDto::new("Dennis", format!("dennis-{tag}@students.edu")))
        .await?;
    let student_id = student.id.ok_or_else(|| anyhow::anyhow!("student id missing"))?;
    let course = client.create_course(&CourseDto::new(format!("Compilers ({tag})"))).await?;
    let course_id = course.id.ok_or_else(|| anyhow::anyhow!("course id missing"))?;

    client.assign_instructor(course_id, instructor_id).await?;
    client.enroll_student(course_id, student_id).await?;

    client.delete_student(student_id).await?;
    client.delete_instructor(instructor_id).await?;

    let err = client.get_student(student_id).await.err();
    ensure!(
        err.as_ref().and_then(status_of) == Some(StatusCode::NOT_FOUND),
        "deleted student still readable: {:?}",
        err
    );
    let err = client.get_instructor(instructor_id).await.err();
    ensure!(
        err.as_ref().and_then(status_of) == Some(StatusCode::NOT_FOUND),
        "deleted instructor still readable: {:?}",
        err
    );

    let students = client.list_students().await?;
    ensure!(students.iter().all(|s| s.id != Some(student_id)), "deleted student still listed");
    let instructors = client.list_instructors().await?;
    ensure!(
        instructors.iter().all(|i| i.id != Some(instructor_id)),
        "deleted instructor still listed"
    );

    let course = client.get_course(course_id).await?;
    ensure!(course.instructor_id.is_none(), "course still shows deleted instructor");
    ensure!(course.student_ids.is_empty(), "course still shows deleted student");
    ensure!(
        client.students_in_course(course_id).await?.is_empty(),
        "deleted student still enrolled"
    );
    ensure!(
        client.courses_by_instructor(instructor_id).await?.is_empty(),
        "deleted instructor still teaches"
    );

    // Deleting again reports the person as missing
    let err = client.delete_student(student_id).await.err();
    ensure!(
        err.as_ref().and_then(status_of) == Some(StatusCode::NOT_FOUND),
        "second delete did not report not found"
    );

    client.delete_course(course_id).await?;
    tracing::info!("✅ Soft delete: PASSED");
    Ok(())
}
