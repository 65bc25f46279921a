use async_trait::async_trait;
use fertibase_application::ports::CatalogRepository;
use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use sqlx::SqlitePool;
use std::marker::PhantomData;
use tracing::{error, instrument};

/// Stores each record as a JSON document keyed by its SQLite rowid.
///
/// The table is chosen by the record's domain (`products` or `careers`).
/// The stored document never carries an id; it is restored from the row.
pub struct SqliteDocumentRepository<T> {
    pool: SqlitePool,
    table: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T: CatalogRecord> SqliteDocumentRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table: T::DOMAIN.api_segment(),
            _record: PhantomData,
        }
    }

    fn row_to_record(&self, row: (i64, String)) -> Result<T, DomainError> {
        let (id, document) = row;
        let mut record: T = serde_json::from_str(&document).map_err(|e| {
            error!(error = %e, table = self.table, id, "Stored document is not valid");
            DomainError::DatabaseError(e.to_string())
        })?;
        record.set_id(RecordId::from(id));
        Ok(record)
    }

    fn to_document(record: &T) -> Result<String, DomainError> {
        let mut record = record.clone();
        record.set_id(RecordId::default());
        serde_json::to_string(&record).map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}

/// Store ids are decimal rowids; anything else cannot exist in the table.
fn row_id(id: &RecordId) -> Option<i64> {
    id.as_str().parse::<i64>().ok().filter(|n| *n > 0)
}

fn now() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[async_trait]
impl<T: CatalogRecord> CatalogRepository<T> for SqliteDocumentRepository<T> {
    #[instrument(skip(self), fields(table = self.table))]
    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        let rows = sqlx::query_as::<_, (i64, String)>(&format!(
            "SELECT id, document FROM {} ORDER BY id ASC",
            self.table
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query catalog documents");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(|row| self.row_to_record(row)).collect()
    }

    #[instrument(skip(self), fields(table = self.table))]
    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>, DomainError> {
        let Some(row_id) = row_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, (i64, String)>(&format!(
            "SELECT id, document FROM {} WHERE id = ?",
            self.table
        ))
        .bind(row_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query catalog document by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|row| self.row_to_record(row)).transpose()
    }

    #[instrument(skip(self, record), fields(table = self.table))]
    async fn create(&self, record: T) -> Result<T, DomainError> {
        let document = Self::to_document(&record)?;
        let now = now();

        let result = sqlx::query(&format!(
            "INSERT INTO {} (document, created_at, updated_at) VALUES (?, ?, ?)",
            self.table
        ))
        .bind(&document)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert catalog document");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut created = record;
        created.set_id(RecordId::from(result.last_insert_rowid()));
        Ok(created)
    }

    #[instrument(skip(self, record), fields(table = self.table))]
    async fn update(&self, id: &RecordId, record: T) -> Result<T, DomainError> {
        let row_id = row_id(id).ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        let document = Self::to_document(&record)?;

        let result = sqlx::query(&format!(
            "UPDATE {} SET document = ?, updated_at = ? WHERE id = ?",
            self.table
        ))
        .bind(&document)
        .bind(now())
        .bind(row_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update catalog document");
            DomainError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(id.to_string()));
        }

        let mut updated = record;
        updated.set_id(RecordId::from(row_id));
        Ok(updated)
    }

    #[instrument(skip(self), fields(table = self.table))]
    async fn delete(&self, id: &RecordId) -> Result<(), DomainError> {
        let row_id = row_id(id).ok_or_else(|| DomainError::NotFound(id.to_string()))?;

        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", self.table))
            .bind(row_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete catalog document");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(id.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self), fields(table = self.table))]
    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", self.table))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count catalog documents");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count.max(0) as u64)
    }
}
