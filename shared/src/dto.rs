//! Data transfer objects exchanged over the REST API
//!
//! Field names are camelCase on the wire. Soft-delete timestamps never leave
//! the server, so none of these types carry one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::{CourseId, InstructorId, StudentId};

/// Largest page the paged listings will return
pub const MAX_PAGE_SIZE: u32 = 100;

/// Instructor as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InstructorId>,
    pub name: String,
    pub email: String,
}

impl InstructorDto {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> SharedResult<()> {
        validate_person(&self.name, &self.email)
    }
}

/// Student as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StudentId>,
    pub name: String,
    pub email: String,
}

impl StudentDto {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> SharedResult<()> {
        validate_person(&self.name, &self.email)
    }
}

/// Course as seen by API clients
///
/// `instructor_id` and `student_ids` are output-only: they are filled in from
/// the relationship tables and ignored on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub instructor_id: Option<InstructorId>,
    #[serde(default)]
    pub student_ids: Vec<StudentId>,
}

impl CourseDto {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            start_date: None,
            end_date: None,
            instructor_id: None,
            student_ids: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "must not be blank"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(SharedError::validation("endDate", "must not precede startDate"));
            }
        }
        Ok(())
    }
}

/// Query parameters of a paged listing, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "PageRequest::default_size")]
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    fn default_size() -> u32 {
        20
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.size == 0 || self.size > MAX_PAGE_SIZE {
            return Err(SharedError::validation(
                "size",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        Ok(())
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::default_size())
    }
}

/// One page of a listing plus the totals needed to walk the rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

fn validate_person(name: &str, email: &str) -> SharedResult<()> {
    if name.trim().is_empty() {
        return Err(SharedError::validation("name", "must not be blank"));
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(SharedError::validation("email", "must not be blank"));
    }
    if !email.contains('@') {
        return Err(SharedError::validation("email", "must contain '@'"));
    }
    Ok(())
}
