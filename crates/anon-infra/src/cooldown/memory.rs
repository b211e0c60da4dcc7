//! In-memory cool-down store - state is lost when the process exits.

use std::sync::Mutex;

use anon_core::ports::{CooldownStore, StoreError};

#[derive(Debug, Default)]
pub struct InMemoryCooldownStore {
    last_post_ms: Mutex<Option<i64>>,
}

impl InMemoryCooldownStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_post(last_post_ms: i64) -> Self {
        Self {
            last_post_ms: Mutex::new(Some(last_post_ms)),
        }
    }
}

impl CooldownStore for InMemoryCooldownStore {
    fn load(&self) -> Result<Option<i64>, StoreError> {
        let guard = self
            .last_post_ms
            .lock()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        Ok(*guard)
    }

    fn save(&self, last_post_ms: i64) -> Result<(), StoreError> {
        let mut guard = self
            .last_post_ms
            .lock()
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        *guard = Some(last_post_ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let store = InMemoryCooldownStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(42).unwrap();
        assert_eq!(store.load().unwrap(), Some(42));
    }
}
