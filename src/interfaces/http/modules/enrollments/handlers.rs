//! Enrollment REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{EnrollRequest, EnrollmentResponse};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}/enrollments",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Enrollments of the student", body = ApiResponse<Vec<EnrollmentResponse>>),
        (status = 404, description = "Student not found")
    )
)]
pub async fn list_student_enrollments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<EnrollmentResponse>>>, ApiError> {
    let enrollments = state
        .enrollment_service
        .list_by_student(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        enrollments.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/students/{id}/enrollments",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = EnrollRequest,
    responses(
        (status = 201, description = "Enrolled", body = ApiResponse<EnrollmentResponse>),
        (status = 404, description = "Student or course not found"),
        (status = 409, description = "Already enrolled")
    )
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<EnrollRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EnrollmentResponse>>), ApiError> {
    let enrollment = state
        .enrollment_service
        .enroll(id, req.course_id)
        .await
        .map_err(domain_error)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(enrollment.into())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}/enrollments/{course_id}",
    tag = "Enrollments",
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Withdrawn", body = ApiResponse<String>),
        (status = 404, description = "Unknown student/course or not enrolled")
    )
)]
pub async fn withdraw_student(
    State(state): State<AppState>,
    Path((id, course_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state
        .enrollment_service
        .withdraw(id, course_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success("Enrollment removed".to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/enrollments",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Enrollments of the course", body = ApiResponse<Vec<EnrollmentResponse>>),
        (status = 404, description = "Course not found")
    )
)]
pub async fn list_course_enrollments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<EnrollmentResponse>>>, ApiError> {
    let enrollments = state
        .enrollment_service
        .list_by_course(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        enrollments.into_iter().map(Into::into).collect(),
    )))
}
