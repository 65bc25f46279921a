mod catalog_repository;
mod remote_catalog;
mod static_catalog;

pub use catalog_repository::CatalogRepository;
pub use remote_catalog::RemoteCatalogPort;
pub use static_catalog::StaticCatalogPort;
