use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use fertibase_domain::{JobListing, Product};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::records::routes::<Product>())
        .merge(handlers::records::routes::<JobListing>())
        .with_state(state)
}
