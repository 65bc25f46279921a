mod builders;
mod mock_catalog;

pub use builders::{job, product};
pub use mock_catalog::{MockCatalogRepository, MockRemoteCatalog, MockStaticCatalog};
