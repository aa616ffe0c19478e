use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// DB models

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sale_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i32,
    pub user_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub amount: Decimal,
    pub quantity: i32,
    pub status: SaleStatus,
    pub sale_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request types

/// Body of POST /api/sales. Field presence is checked at the route boundary
/// so missing fields surface as MISSING_FIELDS rather than a decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub customer_id: Option<i32>,
    pub product_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub status: Option<SaleStatus>,
    pub sale_date: Option<DateTime<Utc>>,
}

/// A create request that passed boundary validation.
#[derive(Debug)]
pub struct NewSale {
    pub customer_id: i32,
    pub product_id: i32,
    pub amount: Decimal,
    pub quantity: i32,
    pub status: SaleStatus,
    pub sale_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleRequest {
    pub customer_id: Option<i32>,
    pub product_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub quantity: Option<i32>,
    pub status: Option<SaleStatus>,
    pub sale_date: Option<DateTime<Utc>>,
}

/// Query params on GET /api/sales. Dates are RFC 3339.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleQuery {
    pub status: Option<SaleStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Filter criteria understood by the data access layer. All predicates are
/// optional and combine with AND.
#[derive(Debug, Default)]
pub struct SaleFilters {
    pub user_id: Option<i32>,
    pub status: Option<SaleStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

// Response types

#[derive(Debug, Serialize)]
pub struct SalesListResponse {
    pub success: bool,
    pub data: Vec<Sale>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SaleResponse {
    pub success: bool,
    pub data: Sale,
}

#[derive(Debug, Serialize)]
pub struct SaleMutationResponse {
    pub success: bool,
    pub message: String,
    pub data: Sale,
}

#[derive(Debug, Serialize)]
pub struct SaleDeletedResponse {
    pub success: bool,
    pub message: String,
    pub id: i32,
}

// Metrics

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_sales: Decimal,
    pub sales_count: i64,
    pub average_order: Decimal,
    pub today_sales: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsData {
    pub total_sales: Decimal,
    pub sales_count: i64,
    pub average_order: Decimal,
    pub today_sales: Decimal,
    pub this_month_sales: Decimal,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub success: bool,
    pub data: MetricsData,
}

#[cfg(test)]
mod tests {
    use super::{MetricsData, SaleStatus};
    use rust_decimal::dec;
    use serde_json::json;

    #[test]
    fn sale_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SaleStatus::Completed).unwrap(),
            json!("completed")
        );
        assert_eq!(
            serde_json::from_value::<SaleStatus>(json!("cancelled")).unwrap(),
            SaleStatus::Cancelled
        );
    }

    #[test]
    fn metrics_payload_uses_camel_case_keys() {
        let data = MetricsData {
            total_sales: dec!(300),
            sales_count: 2,
            average_order: dec!(150),
            today_sales: dec!(0),
            this_month_sales: dec!(90),
        };

        let value = serde_json::to_value(&data).unwrap();
        for key in [
            "totalSales",
            "salesCount",
            "averageOrder",
            "todaySales",
            "thisMonthSales",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
