use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{RegisterRequest, RegisterResponse},
    queries::user_queries,
};

pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let (email, password, name) = validate_registration(&payload)?;

    if user_queries::find_by_email(&state.db, email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    let user = user_queries::create_user(&state.db, email, name, &password_hash).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

fn validate_registration(payload: &RegisterRequest) -> Result<(&str, &str, &str)> {
    let (email, password, name) = match (&payload.email, &payload.password, &payload.name) {
        (Some(email), Some(password), Some(name)) => {
            (email.as_str(), password.as_str(), name.as_str())
        }
        _ => {
            return Err(AppError::Validation {
                code: "MISSING_FIELDS",
                message: "Email, password, and name required".to_string(),
            });
        }
    };

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name cannot be empty".to_string()));
    }

    if password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    Ok((email, password, name))
}
