use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage. The ephemeral backend in production wiring, and the
/// test double everywhere. Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builder for pre-seeded stores in tests.
    #[derive(Default)]
    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(mut self, key: &str, value: &str) -> Self {
            self.store.set(key, value).unwrap();
            self
        }
    }
}
