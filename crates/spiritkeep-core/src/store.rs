//! Store seams between the engine and its persistence layer.
//!
//! The engine consumes and produces through two narrow interfaces: a
//! [`SpiritlingStore`] of creature records and an append-only
//! [`ActionLogSink`]. The `PostgreSQL` implementations live in
//! `spiritkeep-db`; the in-memory implementations here back the processor
//! and scheduler tests.
//!
//! The store is assumed to provide last-writer-wins semantics per record:
//! an owner action arriving between the engine's load and save can lose an
//! update. That is a documented limitation of the game, not something this
//! layer papers over with optimistic locking.

// The engine holds its stores as concrete generic parameters; no trait
// objects or extra Send bounds are needed, so plain async trait methods
// are fine here.
#![allow(async_fn_in_trait)]

use std::collections::BTreeMap;

use spiritkeep_types::{ActionKind, ActionLogEntry, ActionLogId, Spiritling, SpiritlingId};
use tokio::sync::Mutex;

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store rejected the operation.
    #[error("store backend error: {message}")]
    Backend {
        /// Description of the backend failure.
        message: String,
    },

    /// A stored record could not be mapped back into the domain model.
    #[error("corrupt record: {message}")]
    Corrupt {
        /// Description of what failed to map.
        message: String,
    },
}

/// A store of spiritling records.
///
/// The engine never creates or deletes records through this interface;
/// it only lists, loads, and saves. `load` returning `None` is a normal
/// outcome -- an owner may delete a spiritling between listing and
/// loading.
pub trait SpiritlingStore {
    /// List the ids of every spiritling in the store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the listing cannot be produced.
    async fn list_ids(&self) -> Result<Vec<SpiritlingId>, StoreError>;

    /// Load one spiritling record, or `None` if it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read fails or the record is corrupt.
    async fn load(&self, id: SpiritlingId) -> Result<Option<Spiritling>, StoreError>;

    /// Persist a (possibly mutated) spiritling record, last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write is rejected.
    async fn save(&self, spiritling: &Spiritling) -> Result<(), StoreError>;
}

/// An append-only sink for action-log entries.
///
/// Entries are fire-and-forget from the engine's point of view: a failed
/// append is logged and dropped, never retried and never fatal to the
/// tick that produced it.
pub trait ActionLogSink {
    /// Append one log entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the append is rejected.
    async fn append(
        &self,
        spiritling_id: SpiritlingId,
        kind: ActionKind,
        message: &str,
    ) -> Result<(), StoreError>;
}

// Shared handles delegate to the inner store, so the engine and the API
// layer can hold the same instance.
impl<T: SpiritlingStore + Sync> SpiritlingStore for std::sync::Arc<T> {
    async fn list_ids(&self) -> Result<Vec<SpiritlingId>, StoreError> {
        T::list_ids(self).await
    }

    async fn load(&self, id: SpiritlingId) -> Result<Option<Spiritling>, StoreError> {
        T::load(self, id).await
    }

    async fn save(&self, spiritling: &Spiritling) -> Result<(), StoreError> {
        T::save(self, spiritling).await
    }
}

impl<T: ActionLogSink + Sync> ActionLogSink for std::sync::Arc<T> {
    async fn append(
        &self,
        spiritling_id: SpiritlingId,
        kind: ActionKind,
        message: &str,
    ) -> Result<(), StoreError> {
        T::append(self, spiritling_id, kind, message).await
    }
}

// ---------------------------------------------------------------------------
// In-memory implementations
// ---------------------------------------------------------------------------

/// In-memory [`SpiritlingStore`] used by unit tests.
#[derive(Debug, Default)]
pub struct MemorySpiritlingStore {
    records: Mutex<BTreeMap<SpiritlingId, Spiritling>>,
}

impl MemorySpiritlingStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            records: Mutex::const_new(BTreeMap::new()),
        }
    }

    /// Seed the store with a record (test setup).
    pub async fn insert(&self, spiritling: Spiritling) {
        self.records.lock().await.insert(spiritling.id, spiritling);
    }

    /// Remove a record (simulates an owner deleting mid-pass).
    pub async fn remove(&self, id: SpiritlingId) {
        self.records.lock().await.remove(&id);
    }
}

impl SpiritlingStore for MemorySpiritlingStore {
    async fn list_ids(&self) -> Result<Vec<SpiritlingId>, StoreError> {
        Ok(self.records.lock().await.keys().copied().collect())
    }

    async fn load(&self, id: SpiritlingId) -> Result<Option<Spiritling>, StoreError> {
        Ok(self.records.lock().await.get(&id).cloned())
    }

    async fn save(&self, spiritling: &Spiritling) -> Result<(), StoreError> {
        self.records
            .lock()
            .await
            .insert(spiritling.id, spiritling.clone());
        Ok(())
    }
}

/// In-memory [`ActionLogSink`] used by unit tests.
#[derive(Debug, Default)]
pub struct MemoryActionLog {
    entries: Mutex<Vec<ActionLogEntry>>,
}

impl MemoryActionLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::const_new(Vec::new()),
        }
    }

    /// Snapshot of all appended entries, in append order.
    pub async fn entries(&self) -> Vec<ActionLogEntry> {
        self.entries.lock().await.clone()
    }
}

impl ActionLogSink for MemoryActionLog {
    async fn append(
        &self,
        spiritling_id: SpiritlingId,
        kind: ActionKind,
        message: &str,
    ) -> Result<(), StoreError> {
        self.entries.lock().await.push(ActionLogEntry {
            id: ActionLogId::new(),
            spiritling_id,
            kind,
            message: message.to_owned(),
            created_at: chrono::Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use spiritkeep_types::{Element, OwnerId, Temperament};

    use super::*;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = MemorySpiritlingStore::new();
        let s = Spiritling::hatch(OwnerId::new(), "Nib", Element::Fire, Temperament::Normal);
        let id = s.id;
        store.insert(s.clone()).await;

        assert_eq!(store.list_ids().await.ok(), Some(vec![id]));
        assert_eq!(store.load(id).await.ok(), Some(Some(s)));

        store.remove(id).await;
        assert_eq!(store.load(id).await.ok(), Some(None));
    }

    #[tokio::test]
    async fn memory_log_preserves_append_order() {
        let log = MemoryActionLog::new();
        let id = SpiritlingId::new();
        let _ = log.append(id, ActionKind::AutoEat, "first").await;
        let _ = log.append(id, ActionKind::LevelUp, "second").await;

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().map(|e| e.kind), Some(ActionKind::AutoEat));
        assert_eq!(entries.last().map(|e| e.kind), Some(ActionKind::LevelUp));
    }
}
