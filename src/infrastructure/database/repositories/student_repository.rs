//! SeaORM implementation of StudentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{db_err, unique_err};
use crate::domain::enrollment::{normalize_course_ids, Enrollment};
use crate::domain::student::{NewStudent, Student, StudentPatch, StudentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{course, enrollment, student};

pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn entity_to_domain(s: student::Model) -> Student {
    Student {
        student_id: s.student_id,
        roll_number: s.roll_number,
        first_name: s.first_name,
        last_name: s.last_name,
    }
}

fn new_active_model(s: NewStudent) -> student::ActiveModel {
    student::ActiveModel {
        student_id: NotSet,
        roll_number: Set(s.roll_number),
        first_name: Set(s.first_name),
        last_name: Set(s.last_name),
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn create(&self, new_student: NewStudent) -> DomainResult<Student> {
        let new_student = new_student.validated()?;
        let roll_number = new_student.roll_number.clone();

        let result = new_active_model(new_student)
            .insert(&self.db)
            .await
            .map_err(|e| unique_err(e, "Student", "roll_number", &roll_number))?;

        info!("Student created: {} ({})", result.roll_number, result.student_id);
        Ok(entity_to_domain(result))
    }

    async fn create_with_courses(
        &self,
        new_student: NewStudent,
        course_ids: &[i32],
    ) -> DomainResult<(Student, Vec<Enrollment>)> {
        let new_student = new_student.validated()?;
        let roll_number = new_student.roll_number.clone();
        let course_ids = normalize_course_ids(course_ids);

        let txn = self.db.begin().await.map_err(db_err)?;

        for course_id in &course_ids {
            let found = course::Entity::find_by_id(*course_id)
                .one(&txn)
                .await
                .map_err(db_err)?;
            if found.is_none() {
                return Err(DomainError::not_found("Course", "course_id", course_id));
            }
        }

        let created = new_active_model(new_student)
            .insert(&txn)
            .await
            .map_err(|e| unique_err(e, "Student", "roll_number", &roll_number))?;

        let mut enrollments = Vec::with_capacity(course_ids.len());
        for course_id in course_ids {
            let row = enrollment::ActiveModel {
                enrollment_id: NotSet,
                student_id: Set(created.student_id),
                course_id: Set(course_id),
            }
            .insert(&txn)
            .await
            .map_err(db_err)?;
            enrollments.push(Enrollment {
                enrollment_id: row.enrollment_id,
                student_id: row.student_id,
                course_id: row.course_id,
            });
        }

        txn.commit().await.map_err(db_err)?;

        info!(
            "Student created: {} ({}) with {} course(s)",
            created.roll_number,
            created.student_id,
            enrollments.len()
        );
        Ok((entity_to_domain(created), enrollments))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        let model = student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_roll_number(&self, roll_number: &str) -> DomainResult<Option<Student>> {
        let model = student::Entity::find()
            .filter(student::Column::RollNumber.eq(roll_number.trim()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::StudentId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, id: i32, patch: StudentPatch) -> DomainResult<Student> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = student::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Student", "student_id", id));
        };

        let updated = entity_to_domain(existing.clone()).apply(patch)?;

        let mut model: student::ActiveModel = existing.into();
        model.roll_number = Set(updated.roll_number.clone());
        model.first_name = Set(updated.first_name);
        model.last_name = Set(updated.last_name);

        let result = model
            .update(&txn)
            .await
            .map_err(|e| unique_err(e, "Student", "roll_number", &updated.roll_number))?;

        txn.commit().await.map_err(db_err)?;

        info!("Student {} updated", id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let enrollments = enrollment::Entity::delete_many()
            .filter(enrollment::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = student::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        if result.rows_affected == 0 {
            debug!("Student {} not present, nothing deleted", id);
        } else {
            info!(
                "Student {} deleted with {} enrollment(s)",
                id, enrollments.rows_affected
            );
        }
        Ok(())
    }
}
