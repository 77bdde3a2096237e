//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use copydesk_core::error::CoreError;
use copydesk_core::roles::role_name;
use copydesk_db::models::writer::{CreateWriter, WriterResponse};
use copydesk_db::repositories::WriterRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    /// Display name shown on the dashboard.
    pub name: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub writer: WriterResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a writer account. New accounts always start without editor
/// capability; the flag is raised administratively.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<WriterResponse>>)> {
    validate_registration(&input)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateWriter {
        username: input.username,
        email: input.email,
        name: input.name,
        password_hash,
    };

    // Duplicate username/email surfaces as a unique violation and maps
    // to 409 in the error layer.
    let writer = WriterRepo::create(&state.pool, &create).await?;

    tracing::info!(writer_id = writer.id, username = %writer.username, "Writer registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: writer.into(),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an access token whose
/// role claim reflects the account's editor capability at login time.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let writer = WriterRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &writer.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let role = role_name(writer.is_editor);
    let access_token = generate_access_token(writer.id, &writer.name, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;

    tracing::info!(writer_id = writer.id, role = role, "Writer logged in");

    Ok(Json(DataResponse {
        data: AuthResponse {
            access_token,
            expires_in,
            writer: writer.into(),
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate registration input, collecting every failing field into one
/// error instead of failing on the first.
fn validate_registration(input: &RegisterRequest) -> Result<(), CoreError> {
    let mut problems: Vec<String> = Vec::new();

    if input.username.trim().is_empty() {
        problems.push("username must not be empty".to_string());
    }
    if input.email.trim().is_empty() {
        problems.push("email must not be empty".to_string());
    } else if !input.email.contains('@') {
        problems.push("email must be a valid address".to_string());
    }
    if input.name.trim().is_empty() {
        problems.push("name must not be empty".to_string());
    }
    if input.password.len() < MIN_PASSWORD_LENGTH {
        problems.push(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(problems.join("; ")))
    }
}
