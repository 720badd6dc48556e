//! Course DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Course, CoursePatch, NewCourse};

/// A course record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResponse {
    pub course_id: i32,
    pub course_code: String,
    pub course_name: String,
    pub course_description: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(c: Course) -> Self {
        Self {
            course_id: c.course_id,
            course_code: c.course_code,
            course_name: c.course_name,
            course_description: c.course_description,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(max = 32, message = "course_code is too long"))]
    pub course_code: String,
    #[validate(length(max = 200, message = "course_name is too long"))]
    pub course_name: String,
    #[validate(length(max = 2000))]
    pub course_description: Option<String>,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            course_code: req.course_code,
            course_name: req.course_name,
            course_description: req.course_description,
        }
    }
}

/// Fields left out keep their stored value; an empty description clears it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(max = 32, message = "course_code is too long"))]
    pub course_code: Option<String>,
    #[validate(length(max = 200, message = "course_name is too long"))]
    pub course_name: Option<String>,
    #[validate(length(max = 2000))]
    pub course_description: Option<String>,
}

impl From<UpdateCourseRequest> for CoursePatch {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            course_code: req.course_code,
            course_name: req.course_name,
            course_description: req.course_description,
        }
    }
}
