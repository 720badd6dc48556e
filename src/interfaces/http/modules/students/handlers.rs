//! Student REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateStudentRequest, CreatedStudentResponse, SetCoursesRequest, StudentResponse,
    UpdateStudentRequest,
};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::courses::CourseResponse;
use crate::interfaces::http::modules::enrollments::EnrollmentResponse;
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = "Students",
    responses(
        (status = 200, description = "Student list", body = ApiResponse<Vec<StudentResponse>>)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StudentResponse>>>, ApiError> {
    let students = state.repos.students().find_all().await.map_err(domain_error)?;
    let responses: Vec<StudentResponse> = students.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = ApiResponse<StudentResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StudentResponse>>, ApiError> {
    let student = state.repos.students().get(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(student.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = "Students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<CreatedStudentResponse>),
        (status = 400, description = "Required field missing or empty"),
        (status = 404, description = "Unknown course id"),
        (status = 409, description = "Roll number already exists")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedStudentResponse>>), ApiError> {
    let (new_student, course_ids) = req.into_parts();

    let (student, enrollments) = state
        .enrollment_service
        .register_student(new_student, &course_ids)
        .await
        .map_err(domain_error)?;

    let body = CreatedStudentResponse {
        student: student.into(),
        enrollments: enrollments.into_iter().map(Into::into).collect(),
    };
    Ok((StatusCode::CREATED, Json(ApiResponse::success(body))))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<StudentResponse>),
        (status = 400, description = "Required field empty"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Roll number already exists")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateStudentRequest>,
) -> Result<Json<ApiResponse<StudentResponse>>, ApiError> {
    let updated = state
        .repos
        .students()
        .update(id, req.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted (or was already absent)", body = ApiResponse<String>)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.repos.students().delete(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success("Student deleted".to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{id}/courses",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Courses the student is enrolled in", body = ApiResponse<Vec<CourseResponse>>),
        (status = 404, description = "Student not found")
    )
)]
pub async fn list_student_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let courses = state
        .enrollment_service
        .courses_of_student(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        courses.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{id}/courses",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = SetCoursesRequest,
    responses(
        (status = 200, description = "New enrollment set", body = ApiResponse<Vec<EnrollmentResponse>>),
        (status = 404, description = "Student or course not found")
    )
)]
pub async fn set_student_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<SetCoursesRequest>,
) -> Result<Json<ApiResponse<Vec<EnrollmentResponse>>>, ApiError> {
    let enrollments = state
        .enrollment_service
        .set_courses(id, &req.course_ids)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        enrollments.into_iter().map(Into::into).collect(),
    )))
}
