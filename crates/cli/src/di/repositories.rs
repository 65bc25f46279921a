use fertibase_domain::{JobListing, Product};
use fertibase_infrastructure::repositories::SqliteDocumentRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub products: Arc<SqliteDocumentRepository<Product>>,
    pub careers: Arc<SqliteDocumentRepository<JobListing>>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            products: Arc::new(SqliteDocumentRepository::new(pool.clone())),
            careers: Arc::new(SqliteDocumentRepository::new(pool)),
        }
    }
}
