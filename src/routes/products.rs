use axum::{Json, extract::State};

use crate::{AppState, error::Result, models::ProductsListResponse, queries::product_queries};

pub async fn get_products(State(state): State<AppState>) -> Result<Json<ProductsListResponse>> {
    let products = product_queries::get_active(&state.db).await?;
    let count = products.len();

    Ok(Json(ProductsListResponse {
        success: true,
        data: products,
        count,
    }))
}
