use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::CatalogRepository;

pub struct GetRecordsUseCase<T: CatalogRecord> {
    repo: Arc<dyn CatalogRepository<T>>,
}

impl<T: CatalogRecord> GetRecordsUseCase<T> {
    pub fn new(repo: Arc<dyn CatalogRepository<T>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        self.repo.get_all().await
    }

    /// Malformed ids cannot exist in the store and resolve to `None`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        match RecordId::parse(id) {
            Ok(id) => self.repo.get_by_id(&id).await,
            Err(_) => Ok(None),
        }
    }
}
