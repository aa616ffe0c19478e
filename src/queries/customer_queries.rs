use sqlx::PgPool;

use crate::{error::Result, models::Customer};

pub async fn get_active(pool: &PgPool) -> Result<Vec<Customer>> {
    let customers = sqlx::query_as::<_, Customer>(
        "SELECT * FROM customers WHERE is_active = true ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(customers)
}
