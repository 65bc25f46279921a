use super::Repositories;
use fertibase_api::{AppState, RecordUseCases};
use fertibase_application::use_cases::{ResolveCatalogUseCase, SeedCatalogUseCase};
use fertibase_domain::{Config, DomainError, JobListing, Product};
use fertibase_infrastructure::{EmbeddedCatalog, HttpCatalogClient};
use std::sync::Arc;
use tracing::info;

pub fn build_app_state(repos: &Repositories) -> AppState {
    AppState {
        products: Arc::new(RecordUseCases::<Product>::new(repos.products.clone())),
        careers: Arc::new(RecordUseCases::<JobListing>::new(repos.careers.clone())),
    }
}

pub async fn seed_from_static(repos: &Repositories) -> Result<(), DomainError> {
    let embedded = Arc::new(EmbeddedCatalog::load()?);

    let products = SeedCatalogUseCase::<Product>::new(repos.products.clone(), embedded.clone())
        .execute()
        .await?;
    let careers = SeedCatalogUseCase::<JobListing>::new(repos.careers.clone(), embedded)
        .execute()
        .await?;

    info!(products, careers, "Static catalog seeding finished");
    Ok(())
}

/// Catalog readers for the client commands: remote service first, bundled
/// records as the fallback.
pub struct Resolvers {
    pub products: ResolveCatalogUseCase<Product>,
    pub careers: ResolveCatalogUseCase<JobListing>,
}

impl Resolvers {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = Arc::new(HttpCatalogClient::new(&config.remote)?);
        let embedded = Arc::new(EmbeddedCatalog::load()?);

        info!(
            remote = client.base_url(),
            timeout_ms = config.remote.timeout_ms,
            "Catalog resolvers ready"
        );

        Ok(Self {
            products: ResolveCatalogUseCase::<Product>::new(client.clone(), embedded.clone())
                .with_retries(config.remote.retries),
            careers: ResolveCatalogUseCase::<JobListing>::new(client, embedded)
                .with_retries(config.remote.retries),
        })
    }
}
