use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Local;
use rust_decimal::{Decimal, dec};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        CreateSaleRequest, MetricsData, MetricsResponse, NewSale, SaleDeletedResponse,
        SaleFilters, SaleMutationResponse, SaleQuery, SaleResponse, SaleStatus,
        SalesListResponse, UpdateSaleRequest,
    },
    queries::sale_queries,
    services::metrics_service,
    utils::{extractors::extract_user_id, jwt::Claims},
};

pub async fn get_sales(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SaleQuery>,
) -> Result<Json<SalesListResponse>> {
    let user_id = extract_user_id(&claims)?;

    let filters = SaleFilters {
        user_id: Some(user_id),
        status: params.status,
        start_date: params.start_date,
        end_date: params.end_date,
    };

    let sales = sale_queries::get_sales(&state.db, &filters).await?;
    let count = sales.len();

    Ok(Json(SalesListResponse {
        success: true,
        data: sales,
        count,
    }))
}

pub async fn get_metrics(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MetricsResponse>> {
    let user_id = extract_user_id(&claims)?;

    let sales = sale_queries::completed_sales(&state.db, Some(user_id)).await?;
    let metrics = metrics_service::compute_metrics(&sales, Local::now());

    // Heuristic estimate, not a calendar-month aggregation.
    let this_month_sales = (metrics.total_sales * dec!(0.3)).round();

    Ok(Json(MetricsResponse {
        success: true,
        data: MetricsData {
            total_sales: metrics.total_sales,
            sales_count: metrics.sales_count,
            average_order: metrics.average_order,
            today_sales: metrics.today_sales,
            this_month_sales,
        },
    }))
}

pub async fn get_sale(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<SaleResponse>> {
    let user_id = extract_user_id(&claims)?;

    let sale = sale_queries::find_by_id(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

    Ok(Json(SaleResponse {
        success: true,
        data: sale,
    }))
}

pub async fn create_sale(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleMutationResponse>)> {
    let user_id = extract_user_id(&claims)?;
    let new_sale = validate_create_sale(payload)?;

    let sale = sale_queries::create_sale(&state.db, user_id, &new_sale).await?;

    Ok((
        StatusCode::CREATED,
        Json(SaleMutationResponse {
            success: true,
            message: "Sale created successfully".to_string(),
            data: sale,
        }),
    ))
}

pub async fn update_sale(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSaleRequest>,
) -> Result<Json<SaleMutationResponse>> {
    let user_id = extract_user_id(&claims)?;
    validate_update_sale(&payload)?;

    let sale = sale_queries::update_sale(&state.db, id, user_id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale not found".to_string()))?;

    Ok(Json(SaleMutationResponse {
        success: true,
        message: "Sale updated successfully".to_string(),
        data: sale,
    }))
}

pub async fn delete_sale(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<SaleDeletedResponse>> {
    let user_id = extract_user_id(&claims)?;

    if !sale_queries::delete_sale(&state.db, id, user_id).await? {
        return Err(AppError::NotFound("Sale not found".to_string()));
    }

    Ok(Json(SaleDeletedResponse {
        success: true,
        message: "Sale deleted successfully".to_string(),
        id,
    }))
}

fn validate_create_sale(payload: CreateSaleRequest) -> Result<NewSale> {
    let (customer_id, product_id, amount) =
        match (payload.customer_id, payload.product_id, payload.amount) {
            (Some(customer_id), Some(product_id), Some(amount)) => {
                (customer_id, product_id, amount)
            }
            _ => {
                return Err(AppError::Validation {
                    code: "MISSING_FIELDS",
                    message: "customerId, productId, and amount required".to_string(),
                });
            }
        };

    if amount < Decimal::ZERO {
        return Err(AppError::Validation {
            code: "INVALID_FIELDS",
            message: "amount must be non-negative".to_string(),
        });
    }

    let quantity = payload.quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(AppError::Validation {
            code: "INVALID_FIELDS",
            message: "quantity must be a positive integer".to_string(),
        });
    }

    Ok(NewSale {
        customer_id,
        product_id,
        amount,
        quantity,
        status: payload.status.unwrap_or(SaleStatus::Completed),
        sale_date: payload.sale_date,
    })
}

fn validate_update_sale(payload: &UpdateSaleRequest) -> Result<()> {
    if let Some(amount) = payload.amount {
        if amount < Decimal::ZERO {
            return Err(AppError::Validation {
                code: "INVALID_FIELDS",
                message: "amount must be non-negative".to_string(),
            });
        }
    }

    if let Some(quantity) = payload.quantity {
        if quantity <= 0 {
            return Err(AppError::Validation {
                code: "INVALID_FIELDS",
                message: "quantity must be a positive integer".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_create_sale, validate_update_sale};
    use crate::{
        error::AppError,
        models::{CreateSaleRequest, SaleStatus, UpdateSaleRequest},
    };
    use rust_decimal::dec;

    fn request() -> CreateSaleRequest {
        CreateSaleRequest {
            customer_id: Some(1),
            product_id: Some(2),
            amount: Some(dec!(99.50)),
            quantity: None,
            status: None,
            sale_date: None,
        }
    }

    fn assert_code(err: AppError, expected: &str) {
        match err {
            AppError::Validation { code, .. } => assert_eq!(code, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn missing_amount_fails_with_missing_fields() {
        let payload = CreateSaleRequest {
            amount: None,
            ..request()
        };

        assert_code(validate_create_sale(payload).unwrap_err(), "MISSING_FIELDS");
    }

    #[test]
    fn missing_customer_or_product_fails_with_missing_fields() {
        let payload = CreateSaleRequest {
            customer_id: None,
            ..request()
        };
        assert_code(validate_create_sale(payload).unwrap_err(), "MISSING_FIELDS");

        let payload = CreateSaleRequest {
            product_id: None,
            ..request()
        };
        assert_code(validate_create_sale(payload).unwrap_err(), "MISSING_FIELDS");
    }

    #[test]
    fn quantity_defaults_to_one_and_status_to_completed() {
        let sale = validate_create_sale(request()).unwrap();

        assert_eq!(sale.quantity, 1);
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(sale.amount, dec!(99.50));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let payload = CreateSaleRequest {
            quantity: Some(0),
            ..request()
        };
        assert_code(validate_create_sale(payload).unwrap_err(), "INVALID_FIELDS");

        let payload = CreateSaleRequest {
            quantity: Some(-3),
            ..request()
        };
        assert_code(validate_create_sale(payload).unwrap_err(), "INVALID_FIELDS");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let payload = CreateSaleRequest {
            amount: Some(dec!(-1)),
            ..request()
        };
        assert_code(validate_create_sale(payload).unwrap_err(), "INVALID_FIELDS");
    }

    #[test]
    fn partial_update_validates_only_present_fields() {
        let payload = UpdateSaleRequest {
            customer_id: None,
            product_id: None,
            amount: None,
            quantity: None,
            status: Some(SaleStatus::Cancelled),
            sale_date: None,
        };
        assert!(validate_update_sale(&payload).is_ok());

        let payload = UpdateSaleRequest {
            customer_id: None,
            product_id: None,
            amount: Some(dec!(-5)),
            quantity: None,
            status: None,
            sale_date: None,
        };
        assert_code(validate_update_sale(&payload).unwrap_err(), "INVALID_FIELDS");
    }
}
