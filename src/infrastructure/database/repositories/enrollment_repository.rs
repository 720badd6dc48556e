//! SeaORM implementation of EnrollmentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::course_repository::entity_to_domain as course_to_domain;
use super::student_repository::entity_to_domain as student_to_domain;
use super::{db_err, is_foreign_key_violation, is_unique_violation};
use crate::domain::course::Course;
use crate::domain::enrollment::{normalize_course_ids, Enrollment, EnrollmentRepository};
use crate::domain::student::Student;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{course, enrollment, student};

fn entity_to_domain(e: enrollment::Model) -> Enrollment {
    Enrollment {
        enrollment_id: e.enrollment_id,
        student_id: e.student_id,
        course_id: e.course_id,
    }
}

pub struct SeaOrmEnrollmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEnrollmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Work out which side of a rejected link is missing.
    async fn missing_endpoint<C: ConnectionTrait>(
        conn: &C,
        student_id: i32,
        course_id: i32,
    ) -> DomainError {
        match student::Entity::find_by_id(student_id).one(conn).await {
            Ok(None) => DomainError::not_found("Student", "student_id", student_id),
            Ok(Some(_)) => DomainError::not_found("Course", "course_id", course_id),
            Err(e) => db_err(e),
        }
    }
}

#[async_trait]
impl EnrollmentRepository for SeaOrmEnrollmentRepository {
    async fn create(&self, student_id: i32, course_id: i32) -> DomainResult<Enrollment> {
        let model = enrollment::ActiveModel {
            enrollment_id: NotSet,
            student_id: Set(student_id),
            course_id: Set(course_id),
        };

        match model.insert(&self.db).await {
            Ok(row) => {
                info!(
                    "Student {} enrolled in course {} (enrollment {})",
                    student_id, course_id, row.enrollment_id
                );
                Ok(entity_to_domain(row))
            }
            Err(e) if is_unique_violation(&e) => Err(DomainError::AlreadyEnrolled {
                student_id,
                course_id,
            }),
            Err(e) if is_foreign_key_violation(&e) => {
                Err(Self::missing_endpoint(&self.db, student_id, course_id).await)
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn list_by_student(&self, student_id: i32) -> DomainResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn list_by_course(&self, course_id: i32) -> DomainResult<Vec<Enrollment>> {
        let models = enrollment::Entity::find()
            .filter(enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn delete(&self, student_id: i32, course_id: i32) -> DomainResult<bool> {
        let result = enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            debug!(
                "No enrollment of student {} in course {} to remove",
                student_id, course_id
            );
            return Ok(false);
        }

        info!("Student {} withdrawn from course {}", student_id, course_id);
        Ok(true)
    }

    async fn replace_for_student(
        &self,
        student_id: i32,
        course_ids: &[i32],
    ) -> DomainResult<Vec<Enrollment>> {
        let course_ids = normalize_course_ids(course_ids);
        let txn = self.db.begin().await.map_err(db_err)?;

        if student::Entity::find_by_id(student_id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .is_none()
        {
            return Err(DomainError::not_found("Student", "student_id", student_id));
        }

        for course_id in &course_ids {
            let found = course::Entity::find_by_id(*course_id)
                .one(&txn)
                .await
                .map_err(db_err)?;
            if found.is_none() {
                return Err(DomainError::not_found("Course", "course_id", course_id));
            }
        }

        enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let mut enrollments = Vec::with_capacity(course_ids.len());
        for course_id in course_ids {
            let row = enrollment::ActiveModel {
                enrollment_id: NotSet,
                student_id: Set(student_id),
                course_id: Set(course_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
            enrollments.push(entity_to_domain(row));
        }

        txn.commit().await.map_err(db_err)?;

        info!(
            "Student {} course set replaced ({} course(s))",
            student_id,
            enrollments.len()
        );
        Ok(enrollments)
    }

    async fn courses_of_student(&self, student_id: i32) -> DomainResult<Vec<Course>> {
        let models = course::Entity::find()
            .inner_join(enrollment::Entity)
            .filter(enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(course_to_domain).collect())
    }

    async fn students_of_course(&self, course_id: i32) -> DomainResult<Vec<Student>> {
        let models = student::Entity::find()
            .inner_join(enrollment::Entity)
            .filter(enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(enrollment::Column::EnrollmentId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(student_to_domain).collect())
    }
}
