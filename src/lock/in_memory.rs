use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{LockError, LockManager, ReentrantLock};

/// In-memory lock manager backed by a `HashMap<String, Arc<ReentrantLock>>`.
///
/// Lazily creates one `ReentrantLock` per unique key and returns the same
/// `Arc` for repeated lookups. Locks are never evicted.
pub struct InMemoryLockManager {
    locks: Mutex<HashMap<String, Arc<ReentrantLock>>>,
}

impl InMemoryLockManager {
    pub fn new() -> Self {
        InMemoryLockManager {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Number of keys a lock has been created for.
    pub fn len(&self) -> Result<usize, LockError> {
        Ok(self.map()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, LockError> {
        Ok(self.map()?.is_empty())
    }

    fn map(&self) -> Result<MutexGuard<'_, HashMap<String, Arc<ReentrantLock>>>, LockError> {
        self.locks
            .lock()
            .map_err(|_| LockError::Poisoned("lock manager map poisoned".into()))
    }
}

impl Default for InMemoryLockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LockManager for InMemoryLockManager {
    type Lock = ReentrantLock;

    fn get_lock(&self, id: &str) -> Result<Arc<ReentrantLock>, LockError> {
        let mut locks = self.map()?;
        Ok(locks
            .entry(id.to_string())
            .or_insert_with(|| {
                log::debug!("creating reentrant lock for key {:?}", id);
                Arc::new(ReentrantLock::new())
            })
            .clone())
    }
}
