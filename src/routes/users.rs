use axum::{Json, extract::State};

use crate::{
    AppState,
    error::Result,
    models::{UserResponse, UsersListResponse},
    queries::user_queries,
};

pub async fn get_users(State(state): State<AppState>) -> Result<Json<UsersListResponse>> {
    let users = user_queries::get_all(&state.db).await?;

    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    let count = data.len();

    Ok(Json(UsersListResponse {
        success: true,
        data,
        count,
    }))
}
