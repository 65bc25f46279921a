use fertibase_application::ports::StaticCatalogPort;
use fertibase_domain::{CatalogRecord, DomainError, JobListing, Product};
use std::collections::HashSet;

/// Fallback records compiled into the binary from `products.json` and `jobs.json`.
pub struct EmbeddedCatalog {
    products: Vec<Product>,
    jobs: Vec<JobListing>,
}

impl EmbeddedCatalog {
    pub fn load() -> Result<Self, DomainError> {
        Self::from_json(include_str!("products.json"), include_str!("jobs.json"))
    }

    pub fn from_json(products: &str, jobs: &str) -> Result<Self, DomainError> {
        Ok(Self {
            products: parse_records(products)?,
            jobs: parse_records(jobs)?,
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }
}

fn parse_records<T: CatalogRecord>(json: &str) -> Result<Vec<T>, DomainError> {
    let records: Vec<T> = serde_json::from_str(json)
        .map_err(|e| DomainError::StaticCatalog(format!("{}: {}", T::DOMAIN, e)))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if record.id().is_empty() {
            return Err(DomainError::StaticCatalog(format!(
                "{} record '{}' has no id",
                T::DOMAIN,
                record.display_name()
            )));
        }
        if !seen.insert(record.id().clone()) {
            return Err(DomainError::StaticCatalog(format!(
                "duplicate {} id '{}'",
                T::DOMAIN,
                record.id()
            )));
        }
    }

    Ok(records)
}

impl StaticCatalogPort<Product> for EmbeddedCatalog {
    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}

impl StaticCatalogPort<JobListing> for EmbeddedCatalog {
    fn all(&self) -> Vec<JobListing> {
        self.jobs.clone()
    }
}
