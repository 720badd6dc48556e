//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::course::CourseRepository;
use crate::domain::enrollment::EnrollmentRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::student::StudentRepository;

use super::course_repository::SeaOrmCourseRepository;
use super::enrollment_repository::SeaOrmEnrollmentRepository;
use super::student_repository::SeaOrmStudentRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let ann = repos.students().find_by_roll_number("R1").await?;
/// let courses = repos.enrollments().courses_of_student(ann.student_id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    students: SeaOrmStudentRepository,
    courses: SeaOrmCourseRepository,
    enrollments: SeaOrmEnrollmentRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            students: SeaOrmStudentRepository::new(db.clone()),
            courses: SeaOrmCourseRepository::new(db.clone()),
            enrollments: SeaOrmEnrollmentRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn students(&self) -> &dyn StudentRepository {
        &self.students
    }

    fn courses(&self) -> &dyn CourseRepository {
        &self.courses
    }

    fn enrollments(&self) -> &dyn EnrollmentRepository {
        &self.enrollments
    }
}
