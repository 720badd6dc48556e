//! Student DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewStudent, Student, StudentPatch};
use crate::interfaces::http::modules::enrollments::EnrollmentResponse;

/// A student record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub student_id: i32,
    pub roll_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            student_id: s.student_id,
            roll_number: s.roll_number,
            first_name: s.first_name,
            last_name: s.last_name,
        }
    }
}

/// A newly created student and the enrollments created with it
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedStudentResponse {
    pub student: StudentResponse,
    pub enrollments: Vec<EnrollmentResponse>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[validate(length(max = 64, message = "roll_number is too long"))]
    pub roll_number: String,
    #[validate(length(max = 100, message = "first_name is too long"))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    /// Courses to enroll the student in right away
    #[serde(default)]
    pub course_ids: Vec<i32>,
}

impl CreateStudentRequest {
    pub fn into_parts(self) -> (NewStudent, Vec<i32>) {
        let student = NewStudent {
            roll_number: self.roll_number,
            first_name: self.first_name,
            last_name: self.last_name,
        };
        (student, self.course_ids)
    }
}

/// Fields left out keep their stored value; an empty `last_name` clears it.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    #[validate(length(max = 64, message = "roll_number is too long"))]
    pub roll_number: Option<String>,
    #[validate(length(max = 100, message = "first_name is too long"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            roll_number: req.roll_number,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// Full replacement of a student's course set
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetCoursesRequest {
    pub course_ids: Vec<i32>,
}
