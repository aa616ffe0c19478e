use sqlx::PgPool;

use crate::{error::Result, models::Product};

pub async fn get_active(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT * FROM products WHERE is_active = true ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}
