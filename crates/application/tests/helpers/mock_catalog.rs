#![allow(dead_code)]

use async_trait::async_trait;
use fertibase_application::ports::{CatalogRepository, RemoteCatalogPort, StaticCatalogPort};
use fertibase_domain::{CatalogRecord, DomainError, RecordId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockRemoteCatalog<T: CatalogRecord> {
    list_response: Mutex<Result<Vec<T>, DomainError>>,
    records: Mutex<HashMap<String, T>>,
    lookup_error: Mutex<Option<DomainError>>,
    transient_failures: AtomicU32,
    delays: Mutex<HashMap<String, Duration>>,
    list_calls: AtomicUsize,
    lookup_calls: AtomicUsize,
}

impl<T: CatalogRecord> MockRemoteCatalog<T> {
    pub fn new() -> Self {
        Self {
            list_response: Mutex::new(Ok(Vec::new())),
            records: Mutex::new(HashMap::new()),
            lookup_error: Mutex::new(None),
            transient_failures: AtomicU32::new(0),
            delays: Mutex::new(HashMap::new()),
            list_calls: AtomicUsize::new(0),
            lookup_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let mock = Self::new();
        for record in &records {
            mock.records
                .lock()
                .unwrap()
                .insert(record.id().to_string(), record.clone());
        }
        *mock.list_response.lock().unwrap() = Ok(records);
        mock
    }

    pub fn set_list_response(&self, response: Result<Vec<T>, DomainError>) {
        *self.list_response.lock().unwrap() = response;
    }

    pub fn insert_record(&self, key: &str, record: T) {
        self.records.lock().unwrap().insert(key.to_string(), record);
    }

    pub fn set_lookup_error(&self, error: DomainError) {
        *self.lookup_error.lock().unwrap() = Some(error);
    }

    /// The next `count` lookups fail with a transport error.
    pub fn fail_next_lookups(&self, count: u32) {
        self.transient_failures.store(count, Ordering::SeqCst);
    }

    pub fn set_delay(&self, id: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(id.to_string(), delay);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: CatalogRecord> RemoteCatalogPort<T> for MockRemoteCatalog<T> {
    async fn fetch_all(&self) -> Result<Vec<T>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_response.lock().unwrap().clone()
    }

    async fn fetch_by_id(&self, id: &RecordId) -> Result<T, DomainError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.delays.lock().unwrap().get(id.as_str()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let remaining = self.transient_failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.transient_failures.store(remaining - 1, Ordering::SeqCst);
            return Err(DomainError::TransportFailure("connection reset".to_string()));
        }

        if let Some(err) = self.lookup_error.lock().unwrap().clone() {
            return Err(err);
        }

        self.records
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }
}

pub struct MockStaticCatalog<T> {
    records: Vec<T>,
}

impl<T: CatalogRecord> MockStaticCatalog<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: CatalogRecord> StaticCatalogPort<T> for MockStaticCatalog<T> {
    fn all(&self) -> Vec<T> {
        self.records.clone()
    }
}

#[derive(Clone)]
pub struct MockCatalogRepository<T> {
    records: Arc<Mutex<Vec<T>>>,
    next_id: Arc<Mutex<i64>>,
}

impl<T: CatalogRecord> MockCatalogRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl<T: CatalogRecord> CatalogRepository<T> for MockCatalogRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<T>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn create(&self, mut record: T) -> Result<T, DomainError> {
        let mut next_id = self.next_id.lock().unwrap();
        record.set_id(RecordId::from(*next_id));
        *next_id += 1;
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, record: T) -> Result<T, DomainError> {
        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(DomainError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }
}
