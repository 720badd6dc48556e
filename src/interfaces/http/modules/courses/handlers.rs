//! Course REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};
use crate::interfaces::http::common::{domain_error, ApiError, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::students::StudentResponse;
use crate::interfaces::http::router::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "Course list", body = ApiResponse<Vec<CourseResponse>>)
    )
)]
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let courses = state.repos.courses().find_all().await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        courses.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = ApiResponse<CourseResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let course = state.repos.courses().get(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(course.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses",
    tag = "Courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<CourseResponse>),
        (status = 400, description = "Required field missing or empty"),
        (status = 409, description = "Course code already exists")
    )
)]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CourseResponse>>), ApiError> {
    let created = state
        .repos
        .courses()
        .create(req.into())
        .await
        .map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<CourseResponse>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Course code already exists")
    )
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateCourseRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let updated = state
        .repos
        .courses()
        .update(id, req.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(updated.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Deleted (or was already absent)", body = ApiResponse<String>)
    )
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    state.repos.courses().delete(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success("Course deleted".to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/students",
    tag = "Courses",
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Students enrolled in the course", body = ApiResponse<Vec<StudentResponse>>),
        (status = 404, description = "Course not found")
    )
)]
pub async fn list_course_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<StudentResponse>>>, ApiError> {
    let students = state
        .enrollment_service
        .students_of_course(id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(
        students.into_iter().map(Into::into).collect(),
    )))
}
