use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::record_id::RecordId;

const MAX_DISPLAY_NAME_LEN: usize = 200;

/// The two record kinds served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogDomain {
    Products,
    Jobs,
}

impl CatalogDomain {
    /// Path segment under `/api` used by the catalog service.
    pub fn api_segment(&self) -> &'static str {
        match self {
            CatalogDomain::Products => "products",
            CatalogDomain::Jobs => "careers",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            CatalogDomain::Products => "products",
            CatalogDomain::Jobs => "jobs",
        }
    }
}

impl fmt::Display for CatalogDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Where a resolved collection came from. A collection is never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Remote,
    Static,
}

impl CatalogSource {
    pub fn to_str(&self) -> &'static str {
        match self {
            CatalogSource::Remote => "remote",
            CatalogSource::Static => "static",
        }
    }
}

/// A record that can be listed, looked up by id and searched.
pub trait CatalogRecord: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const DOMAIN: CatalogDomain;

    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);

    fn category(&self) -> Option<&str>;

    fn display_name(&self) -> &str;

    /// String fields considered by substring search.
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Checks the fields the catalog service requires on write.
    fn validate(&self) -> Result<(), DomainError> {
        let name = self.display_name().trim();
        if name.is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "{} record needs a non-empty name",
                Self::DOMAIN
            )));
        }
        if name.chars().count() > MAX_DISPLAY_NAME_LEN {
            return Err(DomainError::InvalidRecord(format!(
                "name cannot exceed {} characters",
                MAX_DISPLAY_NAME_LEN
            )));
        }
        Ok(())
    }
}
