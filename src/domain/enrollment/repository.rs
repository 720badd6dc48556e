//! Enrollment repository interface

use async_trait::async_trait;

use super::model::Enrollment;
use crate::domain::course::Course;
use crate::domain::student::Student;
use crate::domain::DomainResult;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Link a student to a course.
    ///
    /// A repeated pair fails with `AlreadyEnrolled`; a missing endpoint
    /// fails with `NotFound`.
    async fn create(&self, student_id: i32, course_id: i32) -> DomainResult<Enrollment>;

    /// Enrollments of a student, ordered by enrollment id
    async fn list_by_student(&self, student_id: i32) -> DomainResult<Vec<Enrollment>>;

    /// Enrollments in a course, ordered by enrollment id
    async fn list_by_course(&self, course_id: i32) -> DomainResult<Vec<Enrollment>>;

    /// Remove the pair. Returns `false` when there was nothing to remove.
    async fn delete(&self, student_id: i32, course_id: i32) -> DomainResult<bool>;

    /// Replace the whole course set of a student in one transaction.
    async fn replace_for_student(
        &self,
        student_id: i32,
        course_ids: &[i32],
    ) -> DomainResult<Vec<Enrollment>>;

    async fn courses_of_student(&self, student_id: i32) -> DomainResult<Vec<Course>>;
    async fn students_of_course(&self, course_id: i32) -> DomainResult<Vec<Student>>;
}
