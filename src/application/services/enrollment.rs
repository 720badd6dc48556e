//! Enrollment business logic service

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    Course, DomainError, DomainResult, Enrollment, NewStudent, RepositoryProvider, Student,
};

/// Links students to courses and answers "who takes what" queries.
///
/// Every operation checks that the student / course it names exists, so
/// callers get `NotFound` for unknown ids rather than an empty result.
pub struct EnrollmentService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EnrollmentService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    async fn require_student(&self, student_id: i32) -> DomainResult<Student> {
        self.repos.students().get(student_id).await
    }

    async fn require_course(&self, course_id: i32) -> DomainResult<Course> {
        self.repos.courses().get(course_id).await
    }

    /// Enroll a student in a course
    pub async fn enroll(&self, student_id: i32, course_id: i32) -> DomainResult<Enrollment> {
        self.require_student(student_id).await?;
        self.require_course(course_id).await?;
        self.repos.enrollments().create(student_id, course_id).await
    }

    /// Withdraw a student from a course.
    ///
    /// Withdrawing a pair that is not enrolled fails with `NotEnrolled` and
    /// changes nothing.
    pub async fn withdraw(&self, student_id: i32, course_id: i32) -> DomainResult<()> {
        self.require_student(student_id).await?;
        self.require_course(course_id).await?;

        if !self.repos.enrollments().delete(student_id, course_id).await? {
            return Err(DomainError::NotEnrolled {
                student_id,
                course_id,
            });
        }
        Ok(())
    }

    pub async fn list_by_student(&self, student_id: i32) -> DomainResult<Vec<Enrollment>> {
        self.require_student(student_id).await?;
        self.repos.enrollments().list_by_student(student_id).await
    }

    pub async fn list_by_course(&self, course_id: i32) -> DomainResult<Vec<Enrollment>> {
        self.require_course(course_id).await?;
        self.repos.enrollments().list_by_course(course_id).await
    }

    pub async fn courses_of_student(&self, student_id: i32) -> DomainResult<Vec<Course>> {
        self.require_student(student_id).await?;
        self.repos.enrollments().courses_of_student(student_id).await
    }

    pub async fn students_of_course(&self, course_id: i32) -> DomainResult<Vec<Student>> {
        self.require_course(course_id).await?;
        self.repos.enrollments().students_of_course(course_id).await
    }

    /// Create a student already enrolled in `course_ids`
    pub async fn register_student(
        &self,
        student: NewStudent,
        course_ids: &[i32],
    ) -> DomainResult<(Student, Vec<Enrollment>)> {
        if course_ids.is_empty() {
            let created = self.repos.students().create(student).await?;
            return Ok((created, Vec::new()));
        }
        self.repos
            .students()
            .create_with_courses(student, course_ids)
            .await
    }

    /// Replace the full course set of a student
    pub async fn set_courses(
        &self,
        student_id: i32,
        course_ids: &[i32],
    ) -> DomainResult<Vec<Enrollment>> {
        let enrollments = self
            .repos
            .enrollments()
            .replace_for_student(student_id, course_ids)
            .await?;
        info!(
            "Student {} now enrolled in {} course(s)",
            student_id,
            enrollments.len()
        );
        Ok(enrollments)
    }
}
