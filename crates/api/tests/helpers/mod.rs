#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fertibase_api::{create_api_routes, AppState, RecordUseCases};
use fertibase_domain::config::DatabaseConfig;
use fertibase_domain::{JobListing, Product};
use fertibase_infrastructure::{database::create_pool, SqliteDocumentRepository};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn create_test_app() -> Router {
    let pool = create_pool(&DatabaseConfig::default()).await.unwrap();

    let state = AppState {
        products: Arc::new(RecordUseCases::<Product>::new(Arc::new(
            SqliteDocumentRepository::<Product>::new(pool.clone()),
        ))),
        careers: Arc::new(RecordUseCases::<JobListing>::new(Arc::new(
            SqliteDocumentRepository::<JobListing>::new(pool),
        ))),
    };

    create_api_routes(state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
