//! Course repository interface

use async_trait::async_trait;

use super::model::{Course, CoursePatch, NewCourse};
use crate::domain::{DomainError, DomainResult};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course. A taken course code fails with `DuplicateKey`.
    async fn create(&self, course: NewCourse) -> DomainResult<Course>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Course>>;
    async fn find_by_code(&self, course_code: &str) -> DomainResult<Option<Course>>;
    async fn find_all(&self) -> DomainResult<Vec<Course>>;
    async fn update(&self, id: i32, patch: CoursePatch) -> DomainResult<Course>;
    /// Delete the course together with its enrollments. Missing ids are a no-op.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn get(&self, id: i32) -> DomainResult<Course> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Course", "course_id", id))
    }
}
