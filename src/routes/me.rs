use axum::{Extension, Json};

use crate::{
    error::Result,
    models::{LogoutResponse, MeResponse, UserResponse},
    utils::{extractors::extract_user_id, jwt::Claims},
};

/// Echoes the authenticated identity from the token claims; no store access.
pub async fn current_user(Extension(claims): Extension<Claims>) -> Result<Json<MeResponse>> {
    let user_id = extract_user_id(&claims)?;

    Ok(Json(MeResponse {
        user: UserResponse {
            id: user_id,
            email: claims.email,
            name: claims.name,
            role: claims.role,
        },
    }))
}

/// Stateless tokens: the client discards its copy, nothing to revoke here.
pub async fn logout_user() -> Json<LogoutResponse> {
    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}
