use axum::{Json, extract::State};

use crate::{
    AppState, error::Result, models::CustomersListResponse, queries::customer_queries,
};

pub async fn get_customers(State(state): State<AppState>) -> Result<Json<CustomersListResponse>> {
    let customers = customer_queries::get_active(&state.db).await?;
    let count = customers.len();

    Ok(Json(CustomersListResponse {
        success: true,
        data: customers,
        count,
    }))
}
