//! Student repository interface

use async_trait::async_trait;

use super::model::{NewStudent, Student, StudentPatch};
use crate::domain::enrollment::Enrollment;
use crate::domain::{DomainError, DomainResult};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student. A taken roll number fails with `DuplicateKey`.
    async fn create(&self, student: NewStudent) -> DomainResult<Student>;

    /// Insert a student and enroll them in `course_ids` in one transaction.
    /// Unknown course ids fail with `NotFound` and nothing is written.
    async fn create_with_courses(
        &self,
        student: NewStudent,
        course_ids: &[i32],
    ) -> DomainResult<(Student, Vec<Enrollment>)>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>>;
    async fn find_by_roll_number(&self, roll_number: &str) -> DomainResult<Option<Student>>;
    async fn find_all(&self) -> DomainResult<Vec<Student>>;

    /// Apply a patch in place and return the stored result.
    async fn update(&self, id: i32, patch: StudentPatch) -> DomainResult<Student>;

    /// Delete the student together with its enrollments. Missing ids are a no-op.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn get(&self, id: i32) -> DomainResult<Student> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Student", "student_id", id))
    }
}
