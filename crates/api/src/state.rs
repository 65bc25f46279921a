use axum::extract::FromRef;
use fertibase_application::ports::CatalogRepository;
use fertibase_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, UpdateRecordUseCase,
};
use fertibase_domain::{CatalogRecord, JobListing, Product};
use std::sync::Arc;

/// The CRUD use cases for one record domain, all sharing a repository.
pub struct RecordUseCases<T: CatalogRecord> {
    pub get: GetRecordsUseCase<T>,
    pub create: CreateRecordUseCase<T>,
    pub update: UpdateRecordUseCase<T>,
    pub delete: DeleteRecordUseCase<T>,
}

impl<T: CatalogRecord> RecordUseCases<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self {
            get: GetRecordsUseCase::new(repo.clone()),
            create: CreateRecordUseCase::new(repo.clone()),
            update: UpdateRecordUseCase::new(repo.clone()),
            delete: DeleteRecordUseCase::new(repo),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RecordUseCases<Product>>,
    pub careers: Arc<RecordUseCases<JobListing>>,
}

impl FromRef<AppState> for Arc<RecordUseCases<Product>> {
    fn from_ref(state: &AppState) -> Self {
        state.products.clone()
    }
}

impl FromRef<AppState> for Arc<RecordUseCases<JobListing>> {
    fn from_ref(state: &AppState) -> Self {
        state.careers.clone()
    }
}
