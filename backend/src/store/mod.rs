use indexmap::IndexMap;

use crate::models::Provider;
use crate::seed;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("provider {0} already exists")]
    AlreadyExists(i64),
}

/// In-memory provider repository.
///
/// Backed by an `IndexMap` keyed by provider id: lookups for the duplicate
/// check are O(1) and iteration follows insertion order.
#[derive(Debug, Default, Clone)]
pub struct ProviderStore {
    providers: IndexMap<i64, Provider>,
}

impl ProviderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with [`seed::default_providers`].
    pub fn seeded() -> Self {
        Self::from_providers(seed::default_providers())
    }

    /// Later entries with an already-seen id are dropped.
    pub fn from_providers(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut store = Self::new();
        for provider in providers {
            if store.contains(provider.id) {
                continue;
            }
            store.providers.insert(provider.id, provider);
        }
        store
    }

    pub fn list_all(&self) -> Vec<Provider> {
        self.providers.values().cloned().collect()
    }

    /// Appends `provider` unless its id is taken, in which case nothing changes.
    pub fn create(&mut self, provider: Provider) -> Result<Provider, StoreError> {
        if self.providers.contains_key(&provider.id) {
            return Err(StoreError::AlreadyExists(provider.id));
        }
        self.providers.insert(provider.id, provider.clone());
        Ok(provider)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.providers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
