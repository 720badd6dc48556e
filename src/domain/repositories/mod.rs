//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::course::CourseRepository;
use super::enrollment::EnrollmentRepository;
use super::student::StudentRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Built once at startup and handed to services and handlers:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let student = repos.students().get(1).await?;
///     let courses = repos.enrollments().courses_of_student(student.student_id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn students(&self) -> &dyn StudentRepository;
    fn courses(&self) -> &dyn CourseRepository;
    fn enrollments(&self) -> &dyn EnrollmentRepository;
}
