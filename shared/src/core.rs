use crate::error::ShortenerError;
use async_trait::async_trait;
use lambda_http::tracing;
use std::fmt::Debug;
use std::sync::Mutex;
use ulid::{Generator, Ulid};

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

/// A stored association between a long URL and the identifier minted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    pub long_url: String,
    pub short_url: String,
}

impl MappingRecord {
    pub fn new(long_url: String, short_url: String) -> Self {
        Self {
            long_url,
            short_url,
        }
    }
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait UrlRepository: Debug {
    /// Every record whose long URL is exactly `long_url`.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Vec<MappingRecord>, ShortenerError>;
    async fn put_mapping(&self, record: MappingRecord) -> Result<(), ShortenerError>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Mints ULIDs: millisecond timestamp followed by randomness, so ids sort by
/// creation time. Ids from one generator are strictly increasing.
pub struct UlidGenerator {
    gen: Mutex<Generator>,
}

impl Debug for UlidGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UlidGenerator").finish_non_exhaustive()
    }
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self {
            gen: Mutex::new(Generator::new()),
        }
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UlidGenerator {
    fn generate_id(&self) -> String {
        let mut gen = self
            .gen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // the random part only overflows after 2^80 ids in the same millisecond
        gen.generate().unwrap_or_else(|_| Ulid::new()).to_string()
    }
}

#[derive(Debug)]
pub struct UrlShortener<R: UrlRepository, I: IdGenerator> {
    url_repo: R,
    id_generator: I,
}

impl<R: UrlRepository, I: IdGenerator> UrlShortener<R, I> {
    pub fn new(url_repo: R, id_generator: I) -> Self {
        Self {
            url_repo,
            id_generator,
        }
    }

    pub fn url_repo(&self) -> &R {
        &self.url_repo
    }

    /// Returns the identifier recorded for `long_url`, minting and storing a
    /// new one when there is none yet.
    ///
    /// The lookup and the write are not atomic: two concurrent calls for the
    /// same unseen URL can both miss and store two different identifiers.
    pub async fn resolve(&self, long_url: &str) -> Result<String, ShortenerError> {
        let mut existing = self.url_repo.find_by_long_url(long_url).await?;

        match existing.len() {
            0 => {}
            1 => {
                let record = existing.remove(0);
                tracing::info!(short_url = %record.short_url, "Found existing short URL");
                return Ok(record.short_url);
            }
            count => {
                return Err(ShortenerError::MultipleMatches {
                    long_url: long_url.to_string(),
                    count,
                })
            }
        }

        let short_url = self.id_generator.generate_id();
        tracing::info!(short_url = %short_url, "Storing new short URL");
        self.url_repo
            .put_mapping(MappingRecord::new(long_url.to_string(), short_url.clone()))
            .await?;

        Ok(short_url)
    }
}
