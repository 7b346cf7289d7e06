use super::KeyValueStore;
use crate::config::PadmarkConfig;
use crate::error::Result;
use crate::model::StorageScope;

/// Routes the note between a durable and an ephemeral backend by the active
/// [`StorageScope`], and owns the one operation that touches both backends:
/// [`toggle_scope`](ScopedStore::toggle_scope).
pub struct ScopedStore<D: KeyValueStore, E: KeyValueStore> {
    durable: D,
    ephemeral: E,
    scope: StorageScope,
    note_key: String,
    scope_key: String,
}

impl<D: KeyValueStore, E: KeyValueStore> ScopedStore<D, E> {
    /// Open the composed store, reading the persisted scope flag from the
    /// durable backend. An absent or unknown flag means Durable.
    pub fn open(durable: D, ephemeral: E, config: &PadmarkConfig) -> Result<Self> {
        let scope = durable
            .get(&config.scope_key)?
            .map(|flag| StorageScope::from_flag(&flag))
            .unwrap_or(StorageScope::Durable);

        Ok(Self {
            durable,
            ephemeral,
            scope,
            note_key: config.note_key.clone(),
            scope_key: config.scope_key.clone(),
        })
    }

    pub fn scope(&self) -> StorageScope {
        self.scope
    }

    /// Load the note from the active scope. Absent means empty.
    pub fn load_note(&self) -> Result<String> {
        Ok(self.get_note_in(self.scope)?.unwrap_or_default())
    }

    /// Persist the note to the active scope.
    pub fn save_note(&mut self, text: &str) -> Result<()> {
        self.set_note_in(self.scope, text)
    }

    /// Flip the scope and migrate the note to the other backend. The content
    /// is written to the destination before the source copy is cleared, so an
    /// interruption can duplicate but never lose it. Afterwards the note
    /// exists in exactly one backend, and the new flag is persisted durably.
    pub fn toggle_scope(&mut self) -> Result<StorageScope> {
        let from = self.scope;
        let to = from.inverse();

        if let Some(content) = self.get_note_in(from)? {
            self.set_note_in(to, &content)?;
            self.remove_note_in(from)?;
        }

        self.scope = to;
        self.durable.set(&self.scope_key, to.as_flag())?;
        Ok(to)
    }

    fn get_note_in(&self, scope: StorageScope) -> Result<Option<String>> {
        match scope {
            StorageScope::Durable => self.durable.get(&self.note_key),
            StorageScope::Ephemeral => self.ephemeral.get(&self.note_key),
        }
    }

    fn set_note_in(&mut self, scope: StorageScope, value: &str) -> Result<()> {
        match scope {
            StorageScope::Durable => self.durable.set(&self.note_key, value),
            StorageScope::Ephemeral => self.ephemeral.set(&self.note_key, value),
        }
    }

    fn remove_note_in(&mut self, scope: StorageScope) -> Result<()> {
        match scope {
            StorageScope::Durable => self.durable.remove(&self.note_key),
            StorageScope::Ephemeral => self.ephemeral.remove(&self.note_key),
        }
    }

    /// Direct access to the backends, for hosts that persist adjacent state
    /// (theme, window geometry) through the same stores.
    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn ephemeral(&self) -> &E {
        &self.ephemeral
    }
}
