mod customers;
mod health;
mod login;
mod me;
mod products;
mod register;
mod sales;
mod users;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

use crate::{AppState, middleware};

pub fn create_router() -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/info", get(health::service_info))
        .route("/auth/register", post(register::register_user))
        .route("/auth/login", post(login::login_user))
        .route("/auth/logout", post(me::logout_user));

    let protected = Router::new()
        .route("/auth/me", get(me::current_user))
        .route("/sales/metrics", get(sales::get_metrics))
        .route("/sales", get(sales::get_sales).post(sales::create_sale))
        .route(
            "/sales/{id}",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        .route("/customers", get(customers::get_customers))
        .route("/products", get(products::get_products))
        .route_layer(from_fn(middleware::auth_middleware));

    let admin = Router::new()
        .route("/users", get(users::get_users))
        .route_layer(from_fn(middleware::admin_middleware));

    Router::new().nest("/api", public.merge(protected).merge(admin))
}
