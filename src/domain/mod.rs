//! Domain layer
//!
//! Aggregates (student, course, enrollment), their repository interfaces and
//! the pure marks aggregation. No storage or HTTP concerns live here.

pub mod course;
pub mod enrollment;
pub mod marks;
pub mod repositories;
pub mod student;

pub use course::{Course, CoursePatch, CourseRepository, NewCourse};
pub use enrollment::{Enrollment, EnrollmentRepository};
pub use marks::{CourseSummary, MarkRecord, StudentReport};
pub use repositories::{DomainResult, RepositoryProvider};
pub use student::{NewStudent, Student, StudentPatch, StudentRepository};

pub use crate::shared::errors::DomainError;
