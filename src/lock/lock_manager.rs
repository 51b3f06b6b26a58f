use std::sync::Arc;

use super::{Lock, LockError};

/// Factory trait for obtaining per-key locks.
///
/// Callers that guard many independent resources (one per entity id, file
/// path, account, ...) ask the manager for the lock of a key instead of
/// keeping their own table. The default [`InMemoryLockManager`](super::InMemoryLockManager)
/// keeps its locks in a `HashMap`.
pub trait LockManager: Send + Sync {
    /// The concrete lock type returned by this manager.
    type Lock: Lock;

    /// Get (or create) a lock for the given identifier.
    ///
    /// Repeated calls with the same `id` must return the same logical lock.
    fn get_lock(&self, id: &str) -> Result<Arc<Self::Lock>, LockError>;
}
