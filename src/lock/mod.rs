//! Reentrant locking.
//!
//! [`ReentrantLock`] is a monitor-style lock (a `Mutex` guarding the owner and
//! hold count, plus a `Condvar` to park contended acquirers) that its holder
//! may acquire again. The [`Lock`] and [`LockManager`] traits are the seams
//! for code that only needs "a lock" or "the lock for key X".

mod error;
mod in_memory;
#[allow(clippy::module_inception)]
mod lock;
mod lock_manager;
mod owner;
mod reentrant;
mod state;

pub use error::LockError;
pub use in_memory::InMemoryLockManager;
pub use lock::Lock;
pub use lock_manager::LockManager;
pub use owner::OwnerId;
pub use reentrant::{ReentrantLock, ReentrantLockGuard};
pub use state::LockState;
