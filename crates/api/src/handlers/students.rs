//! Handlers for the `/students` resource: registration, enrollment, and
//! the enrolled-course list.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use scherzo_core::error::CoreError;
use scherzo_core::roles::ROLE_STUDENT;
use scherzo_core::types::DbId;
use scherzo_db::models::course::CourseSummary;
use scherzo_db::models::user::CreateUser;
use scherzo_db::repositories::{CourseRepo, EnrollmentRepo, RoleRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::{create_auth_response, AuthResponse};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length for self-registered accounts.
const MIN_PASSWORD_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /students/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 150, message = "Username must be 3-150 characters"))]
    pub username: String,
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /students/enroll`.
#[derive(Debug, Deserialize)]
pub struct EnrollRequest {
    pub course_id: DbId,
}

/// Response body for `POST /students/enroll`.
#[derive(Debug, Serialize)]
pub struct EnrollResponse {
    pub course_id: DbId,
    /// `false` when the caller was already enrolled.
    pub newly_enrolled: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/students/register
///
/// Create a student account and log it in immediately: the response is the
/// same token payload the login endpoint returns.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role = RoleRepo::find_by_name(&state.pool, ROLE_STUDENT)
        .await?
        .ok_or_else(|| AppError::InternalError("Student role is not seeded".into()))?;

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash: hashed,
            role_id: role.id,
        },
    )
    .await?;

    let response =
        create_auth_response(&state, user.id, &user.username, &user.email, &role.name).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/students/enroll
///
/// Enroll the authenticated user in a course. Idempotent: enrolling twice
/// succeeds and reports `newly_enrolled: false`.
pub async fn enroll(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<EnrollRequest>,
) -> AppResult<Json<EnrollResponse>> {
    let course = CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id: input.course_id,
        }))?;

    let newly_enrolled = EnrollmentRepo::enroll(&state.pool, course.id, user.user_id).await?;

    Ok(Json(EnrollResponse {
        course_id: course.id,
        newly_enrolled,
    }))
}

/// GET /api/v1/students/courses
///
/// List the courses the authenticated user is enrolled in, newest first.
pub async fn my_courses(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<CourseSummary>>>> {
    let courses = EnrollmentRepo::courses_for_student(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: courses }))
}
