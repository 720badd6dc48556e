//! SeaORM implementation of CourseRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::{db_err, unique_err};
use crate::domain::course::{Course, CoursePatch, CourseRepository, NewCourse};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{course, enrollment};

pub struct SeaOrmCourseRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub(crate) fn entity_to_domain(c: course::Model) -> Course {
    Course {
        course_id: c.course_id,
        course_code: c.course_code,
        course_name: c.course_name,
        course_description: c.course_description,
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn create(&self, new_course: NewCourse) -> DomainResult<Course> {
        let new_course = new_course.validated()?;
        let code = new_course.course_code.clone();

        let model = course::ActiveModel {
            course_id: NotSet,
            course_code: Set(new_course.course_code),
            course_name: Set(new_course.course_name),
            course_description: Set(new_course.course_description),
        };
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| unique_err(e, "Course", "course_code", &code))?;

        info!("Course created: {} ({})", result.course_code, result.course_id);
        Ok(entity_to_domain(result))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Course>> {
        let model = course::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_code(&self, course_code: &str) -> DomainResult<Option<Course>> {
        let model = course::Entity::find()
            .filter(course::Column::CourseCode.eq(course_code.trim()))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Course>> {
        let models = course::Entity::find()
            .order_by_asc(course::Column::CourseId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn update(&self, id: i32, patch: CoursePatch) -> DomainResult<Course> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let Some(existing) = course::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
        else {
            return Err(DomainError::not_found("Course", "course_id", id));
        };

        let updated = entity_to_domain(existing.clone()).apply(patch)?;

        let mut model: course::ActiveModel = existing.into();
        model.course_code = Set(updated.course_code.clone());
        model.course_name = Set(updated.course_name);
        model.course_description = Set(updated.course_description);

        let result = model
            .update(&txn)
            .await
            .map_err(|e| unique_err(e, "Course", "course_code", &updated.course_code))?;

        txn.commit().await.map_err(db_err)?;

        info!("Course {} updated", id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let enrollments = enrollment::Entity::delete_many()
            .filter(enrollment::Column::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        let result = course::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        if result.rows_affected == 0 {
            debug!("Course {} not present, nothing deleted", id);
        } else {
            info!(
                "Course {} deleted with {} enrollment(s)",
                id, enrollments.rows_affected
            );
        }
        Ok(())
    }
}
