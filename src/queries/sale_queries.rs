use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewSale, Sale, SaleFilters, SaleStatus, UpdateSaleRequest},
};

fn sales_query(filters: &SaleFilters) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM sales WHERE 1=1");

    if let Some(user_id) = filters.user_id {
        query.push(" AND user_id = ");
        query.push_bind(user_id);
    }

    if let Some(status) = filters.status {
        query.push(" AND status = ");
        query.push_bind(status);
    }

    if let Some(start_date) = filters.start_date {
        query.push(" AND sale_date >= ");
        query.push_bind(start_date);
    }

    if let Some(end_date) = filters.end_date {
        query.push(" AND sale_date <= ");
        query.push_bind(end_date);
    }

    query.push(" ORDER BY sale_date DESC");
    query
}

fn completed_sales_query(user_id: Option<i32>) -> QueryBuilder<'static, Postgres> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM sales WHERE status = ");
    query.push_bind(SaleStatus::Completed);

    if let Some(user_id) = user_id {
        query.push(" AND user_id = ");
        query.push_bind(user_id);
    }

    query
}

/// Filtered read over the sales table. All filters combine with AND; results
/// come back most recent first.
pub async fn get_sales(pool: &PgPool, filters: &SaleFilters) -> Result<Vec<Sale>> {
    let sales = sales_query(filters)
        .build_query_as::<Sale>()
        .fetch_all(pool)
        .await?;

    Ok(sales)
}

pub async fn find_by_id(pool: &PgPool, id: i32, user_id: i32) -> Result<Option<Sale>> {
    let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(sale)
}

/// All completed sales, optionally scoped to one owner. Input for the
/// metrics aggregation.
pub async fn completed_sales(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<Sale>> {
    let sales = completed_sales_query(user_id)
        .build_query_as::<Sale>()
        .fetch_all(pool)
        .await?;

    Ok(sales)
}

pub async fn create_sale(pool: &PgPool, user_id: i32, sale: &NewSale) -> Result<Sale> {
    let created = sqlx::query_as::<_, Sale>(
        "INSERT INTO sales (user_id, customer_id, product_id, amount, quantity, status, sale_date)
         VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, NOW()))
         RETURNING *",
    )
    .bind(user_id)
    .bind(sale.customer_id)
    .bind(sale.product_id)
    .bind(sale.amount)
    .bind(sale.quantity)
    .bind(sale.status)
    .bind(sale.sale_date)
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Partial update. Returns the updated row, or None when no row matches the
/// id/owner pair.
pub async fn update_sale(
    pool: &PgPool,
    id: i32,
    user_id: i32,
    req: &UpdateSaleRequest,
) -> Result<Option<Sale>> {
    let mut query_builder = QueryBuilder::<Postgres>::new("UPDATE sales SET ");
    let mut has_fields = false;

    if let Some(customer_id) = req.customer_id {
        query_builder.push("customer_id = ");
        query_builder.push_bind(customer_id);
        has_fields = true;
    }

    if let Some(product_id) = req.product_id {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("product_id = ");
        query_builder.push_bind(product_id);
        has_fields = true;
    }

    if let Some(amount) = req.amount {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("amount = ");
        query_builder.push_bind(amount);
        has_fields = true;
    }

    if let Some(quantity) = req.quantity {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("quantity = ");
        query_builder.push_bind(quantity);
        has_fields = true;
    }

    if let Some(status) = req.status {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("status = ");
        query_builder.push_bind(status);
        has_fields = true;
    }

    if let Some(sale_date) = req.sale_date {
        if has_fields {
            query_builder.push(", ");
        }
        query_builder.push("sale_date = ");
        query_builder.push_bind(sale_date);
        has_fields = true;
    }

    if !has_fields {
        return find_by_id(pool, id, user_id).await;
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" AND user_id = ");
    query_builder.push_bind(user_id);
    query_builder.push(" RETURNING *");

    let sale = query_builder
        .build_query_as::<Sale>()
        .fetch_optional(pool)
        .await?;

    Ok(sale)
}

pub async fn delete_sale(pool: &PgPool, id: i32, user_id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM sales WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::{completed_sales_query, sales_query};
    use crate::models::{SaleFilters, SaleStatus};
    use chrono::Utc;

    #[test]
    fn unfiltered_query_orders_by_sale_date_desc() {
        let sql = sales_query(&SaleFilters::default()).into_sql();
        assert_eq!(sql, "SELECT * FROM sales WHERE 1=1 ORDER BY sale_date DESC");
    }

    #[test]
    fn status_filter_selects_on_status_only() {
        let filters = SaleFilters {
            status: Some(SaleStatus::Completed),
            ..SaleFilters::default()
        };

        let sql = sales_query(&filters).into_sql();
        assert_eq!(
            sql,
            "SELECT * FROM sales WHERE 1=1 AND status = $1 ORDER BY sale_date DESC"
        );
    }

    #[test]
    fn all_filters_combine_with_and() {
        let now = Utc::now();
        let filters = SaleFilters {
            user_id: Some(7),
            status: Some(SaleStatus::Pending),
            start_date: Some(now),
            end_date: Some(now),
        };

        let sql = sales_query(&filters).into_sql();
        assert_eq!(
            sql,
            "SELECT * FROM sales WHERE 1=1 AND user_id = $1 AND status = $2 \
             AND sale_date >= $3 AND sale_date <= $4 ORDER BY sale_date DESC"
        );
    }

    #[test]
    fn completed_sales_query_scopes_to_owner_when_given() {
        assert_eq!(
            completed_sales_query(None).into_sql(),
            "SELECT * FROM sales WHERE status = $1"
        );
        assert_eq!(
            completed_sales_query(Some(3)).into_sql(),
            "SELECT * FROM sales WHERE status = $1 AND user_id = $2"
        );
    }
}
