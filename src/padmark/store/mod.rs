//! # Storage Layer
//!
//! This module defines the storage abstraction for padmark. The
//! [`KeyValueStore`] trait is the shape of browser-local storage reduced to
//! what the editor needs: get/set/remove by string key.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Let hosts plug in their own backends (web storage, a tauri store)
//!   without changing core logic
//! - Keep the editor **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: durable storage, one `data.json` map per directory
//! - [`memory::MemoryStore`]: ephemeral storage, also the test double
//!
//! ## Scope Pattern
//!
//! [`scoped::ScopedStore`] composes one durable and one ephemeral backend and
//! routes the note by the active [`StorageScope`](crate::model::StorageScope).
//! The scope flag itself always lives in the durable backend, under its own
//! key, so the choice survives sessions.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod scoped;

/// Abstract interface for note storage.
pub trait KeyValueStore {
    /// Look up a value. Absent keys are `None`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value (create or overwrite).
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
