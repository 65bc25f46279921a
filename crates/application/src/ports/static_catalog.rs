use fertibase_domain::CatalogRecord;

/// Bundled fallback records. Immutable for the process lifetime.
pub trait StaticCatalogPort<T: CatalogRecord>: Send + Sync {
    /// Fresh copies on every call.
    fn all(&self) -> Vec<T>;
}
