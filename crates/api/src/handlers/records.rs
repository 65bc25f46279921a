//! Generic CRUD handlers mounted once per record domain at
//! `/{segment}` and `/{segment}/{id}`, where the segment comes from
//! `CatalogDomain::api_segment` (`products` or `careers`).

use axum::{
    extract::{rejection::JsonRejection, FromRef, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use fertibase_domain::{CatalogRecord, DomainError};
use std::sync::Arc;
use tracing::debug;

use crate::{
    errors::ApiError,
    state::{AppState, RecordUseCases},
};

pub fn routes<T: CatalogRecord>() -> Router<AppState>
where
    Arc<RecordUseCases<T>>: FromRef<AppState>,
{
    let segment = T::DOMAIN.api_segment();

    Router::new()
        .route(
            &format!("/{}", segment),
            get(list_records::<T>).post(create_record::<T>),
        )
        .route(
            &format!("/{}/{{id}}", segment),
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>),
        )
}

async fn list_records<T: CatalogRecord>(
    State(use_cases): State<Arc<RecordUseCases<T>>>,
) -> Result<Json<Vec<T>>, ApiError> {
    let records = use_cases.get.get_all().await?;
    debug!(domain = T::DOMAIN.to_str(), count = records.len(), "Records listed");
    Ok(Json(records))
}

async fn get_record<T: CatalogRecord>(
    State(use_cases): State<Arc<RecordUseCases<T>>>,
    Path(id): Path<String>,
) -> Result<Json<T>, ApiError> {
    match use_cases.get.get_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(DomainError::NotFound(format!("{} '{}'", T::DOMAIN, id)).into()),
    }
}

async fn create_record<T: CatalogRecord>(
    State(use_cases): State<Arc<RecordUseCases<T>>>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let Json(record) = body?;
    let created = use_cases.create.execute(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update_record<T: CatalogRecord>(
    State(use_cases): State<Arc<RecordUseCases<T>>>,
    Path(id): Path<String>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError> {
    let Json(record) = body?;
    let updated = use_cases.update.execute(&id, record).await?;
    Ok(Json(updated))
}

async fn delete_record<T: CatalogRecord>(
    State(use_cases): State<Arc<RecordUseCases<T>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    use_cases.delete.execute(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
