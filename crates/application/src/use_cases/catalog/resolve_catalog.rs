use fertibase_domain::{CatalogRecord, CatalogSource, DomainError, LookupError, RecordId};
use std::collections::HashSet;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::{RemoteCatalogPort, StaticCatalogPort};

/// A collection that came entirely from one source.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCatalog<T> {
    pub source: CatalogSource,
    pub items: Vec<T>,
}

impl<T> ResolvedCatalog<T> {
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CatalogSource::Static
    }
}

/// Reads one catalog domain, substituting the bundled records whenever the
/// remote listing fails or comes back empty.
pub struct ResolveCatalogUseCase<T: CatalogRecord> {
    remote: Arc<dyn RemoteCatalogPort<T>>,
    fallback: Arc<dyn StaticCatalogPort<T>>,
    retries: u32,
}

impl<T: CatalogRecord> ResolveCatalogUseCase<T> {
    pub fn new(
        remote: Arc<dyn RemoteCatalogPort<T>>,
        fallback: Arc<dyn StaticCatalogPort<T>>,
    ) -> Self {
        Self {
            remote,
            fallback,
            retries: 0,
        }
    }

    /// Extra attempts for `get_by_id` after a transport failure.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Never fails: any remote failure resolves to the static collection.
    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    pub async fn list_all(&self) -> Result<ResolvedCatalog<T>, Infallible> {
        match self.remote.fetch_all().await {
            Ok(items) if items.is_empty() => {
                info!("Remote catalog returned no records, using static catalog");
            }
            Ok(items) => match first_duplicate_id(&items).cloned() {
                None => {
                    debug!(count = items.len(), "Catalog resolved from remote");
                    return Ok(ResolvedCatalog {
                        source: CatalogSource::Remote,
                        items,
                    });
                }
                Some(id) => {
                    warn!(id = %id, "Remote catalog repeats a record id, using static catalog");
                }
            },
            Err(e) => {
                warn!(error = %e, "Remote catalog fetch failed, using static catalog");
            }
        }

        let items = self.fallback.all();
        info!(count = items.len(), "Catalog resolved from static fallback");
        Ok(ResolvedCatalog {
            source: CatalogSource::Static,
            items,
        })
    }

    /// Single-record lookup. There is no static fallback here: bundled
    /// records do not share the remote id space.
    #[instrument(skip(self), fields(domain = T::DOMAIN.to_str()))]
    pub async fn get_by_id(&self, id: &str) -> Result<T, LookupError> {
        let id = match RecordId::parse(id) {
            Ok(id) => id,
            Err(e) => {
                debug!(error = %e, "Rejected lookup id");
                return Err(LookupError::NotFound(id.to_string()));
            }
        };

        let mut attempt = 0;
        loop {
            match self.remote.fetch_by_id(&id).await {
                Ok(mut record) => {
                    if record.id().is_empty() {
                        record.set_id(id.clone());
                    }
                    if record.id() != &id {
                        warn!(returned = %record.id(), "Remote catalog answered with another record");
                        return Err(LookupError::Unavailable(format!(
                            "requested {} but received {}",
                            id,
                            record.id()
                        )));
                    }
                    return Ok(record);
                }
                Err(DomainError::NotFound(_)) => {
                    debug!("Record not found in remote catalog");
                    return Err(LookupError::NotFound(id.to_string()));
                }
                Err(e) if e.is_transport() && attempt < self.retries => {
                    attempt += 1;
                    warn!(error = %e, attempt, "Remote lookup failed, retrying");
                }
                Err(e) => {
                    warn!(error = %e, "Remote lookup failed");
                    return Err(LookupError::Unavailable(e.to_string()));
                }
            }
        }
    }
}

fn first_duplicate_id<T: CatalogRecord>(items: &[T]) -> Option<&RecordId> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(T::id).find(|id| !seen.insert(*id))
}
