//! Enrollment DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Enrollment;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    pub enrollment_id: i32,
    pub student_id: i32,
    pub course_id: i32,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(e: Enrollment) -> Self {
        Self {
            enrollment_id: e.enrollment_id,
            student_id: e.student_id,
            course_id: e.course_id,
        }
    }
}

/// Any id is accepted here; unknown ones are answered with 404 by the service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnrollRequest {
    pub course_id: i32,
}
