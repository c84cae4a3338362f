use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::LoadError;
use crate::models::record::Dataset;

/// Cache key: SHA-256 digest of the uploaded bytes.
pub type ContentKey = [u8; 32];

/// Session-scoped memo of parsed uploads.
///
/// The same file content always parses to the same dataset, so a re-upload
/// (or a rerun after a filter change) returns the stored `Arc<Dataset>`
/// instead of parsing again. Failed loads are never stored. Entries are
/// never invalidated; dropping the cache is the only way to release them.
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: HashMap<ContentKey, Arc<Dataset>>,
    hits: u64,
    misses: u64,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_for(bytes: &[u8]) -> ContentKey {
        let digest = Sha256::digest(bytes);
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);
        key
    }

    pub fn get(&self, bytes: &[u8]) -> Option<Arc<Dataset>> {
        self.entries.get(&Self::key_for(bytes)).cloned()
    }

    /// Return the cached dataset for `bytes`, or run `load` and remember its
    /// result if it succeeds.
    pub fn get_or_load<F>(&mut self, bytes: &[u8], load: F) -> Result<Arc<Dataset>, LoadError>
    where
        F: FnOnce(&[u8]) -> Result<Dataset, LoadError>,
    {
        let key = Self::key_for(bytes);
        if let Some(dataset) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!("Load cache hit ({} records)", dataset.len());
            return Ok(Arc::clone(dataset));
        }

        self.misses += 1;
        tracing::debug!("Load cache miss, parsing {} bytes", bytes.len());
        let dataset = Arc::new(load(bytes)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
