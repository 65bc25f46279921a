pub mod catalog_client;
pub mod database;
pub mod repositories;
pub mod static_catalog;

pub use catalog_client::HttpCatalogClient;
pub use repositories::SqliteDocumentRepository;
pub use static_catalog::EmbeddedCatalog;
