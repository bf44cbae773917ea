use crate::core::{MappingRecord, UrlRepository};
use crate::error::ShortenerError;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// Process-local stand-in for the mapping table, for tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<Vec<MappingRecord>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from records written by someone else, duplicates included.
    pub fn seeded(records: Vec<MappingRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn records(&self) -> Vec<MappingRecord> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MappingRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> Result<Vec<MappingRecord>, ShortenerError> {
        Ok(self
            .lock()
            .iter()
            .filter(|record| record.long_url == long_url)
            .cloned()
            .collect())
    }

    /// Plain put: a record with the same identifier is replaced.
    async fn put_mapping(&self, record: MappingRecord) -> Result<(), ShortenerError> {
        let mut records = self.lock();
        match records.iter_mut().find(|r| r.short_url == record.short_url) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }
}
