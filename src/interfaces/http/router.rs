//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{delete, get},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::EnrollmentService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::health::HealthState;
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{courses, enrollments, health, students};

/// State shared by every REST handler.
///
/// Handlers that only need part of it extract that part via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub health: HealthState,
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        s.health.clone()
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Students
        students::list_students,
        students::get_student,
        students::create_student,
        students::update_student,
        students::delete_student,
        students::list_student_courses,
        students::set_student_courses,
        // Courses
        courses::list_courses,
        courses::get_course,
        courses::create_course,
        courses::update_course,
        courses::delete_course,
        courses::list_course_students,
        // Enrollments
        enrollments::list_student_enrollments,
        enrollments::enroll_student,
        enrollments::withdraw_student,
        enrollments::list_course_enrollments,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HealthResponse,
            health::StoreHealth,
            health::RecordCounts,
            students::StudentResponse,
            students::CreatedStudentResponse,
            students::CreateStudentRequest,
            students::UpdateStudentRequest,
            students::SetCoursesRequest,
            courses::CourseResponse,
            courses::CreateCourseRequest,
            courses::UpdateCourseRequest,
            enrollments::EnrollmentResponse,
            enrollments::EnrollRequest,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Students", description = "Student records"),
        (name = "Courses", description = "Course records"),
        (name = "Enrollments", description = "Links between students and courses"),
    ),
    info(
        title = "Roster Service API",
        version = "1.0.0",
        description = "REST API for students, courses and enrollments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    enrollment_service: Arc<EnrollmentService>,
    db: DatabaseConnection,
) -> Router {
    let state = AppState {
        repos,
        enrollment_service,
        health: HealthState::new(db),
    };

    let student_routes = Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/{id}",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route(
            "/{id}/courses",
            get(students::list_student_courses).put(students::set_student_courses),
        )
        .route(
            "/{id}/enrollments",
            get(enrollments::list_student_enrollments).post(enrollments::enroll_student),
        )
        .route(
            "/{id}/enrollments/{course_id}",
            delete(enrollments::withdraw_student),
        );

    let course_routes = Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route(
            "/{id}",
            get(courses::get_course)
                .put(courses::update_course)
                .delete(courses::delete_course),
        )
        .route("/{id}/students", get(courses::list_course_students))
        .route(
            "/{id}/enrollments",
            get(enrollments::list_course_enrollments),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1/students", student_routes)
        .nest("/api/v1/courses", course_routes)
        .with_state(state)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
