//! Route registration.

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod products;
pub mod slides;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::middleware::require_admin;
use crate::state::AppState;

/// Build the full application router.
pub fn routes(state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/products", post(admin::create_product))
        .route("/products/{id}", put(admin::update_product))
        .route("/products/{id}", delete(admin::delete_product))
        .route("/slides", post(admin::create_slide))
        .route("/slides/{id}", put(admin::update_slide))
        .route("/slides/{id}", delete(admin::delete_slide))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/api/products", get(products::list))
        .route("/api/products/{id}", get(products::get_by_id))
        .route("/api/products/categories", get(products::list_categories))
        .route("/api/slides", get(slides::list))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/checkout", post(checkout::place_order))
        .nest("/api/admin", admin_routes)
}
