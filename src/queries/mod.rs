pub mod customer_queries;
pub mod product_queries;
pub mod sale_queries;
pub mod user_queries;
