//! A reentrant (recursive) lock for OS threads.
//!
//! The thread holding a [`ReentrantLock`] may acquire it again without
//! deadlocking; the lock only passes to another thread once every `acquire`
//! has been matched by a `release`.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use reentrant_lock::ReentrantLock;
//!
//! let lock = Arc::new(ReentrantLock::new());
//! let guard = lock.guard();
//! let nested = lock.guard();
//! assert_eq!(lock.hold_count(), 2);
//!
//! let other = Arc::clone(&lock);
//! let handle = thread::spawn(move || {
//!     let _guard = other.guard(); // waits until both guards below are dropped
//!     other.hold_count()
//! });
//!
//! drop(nested);
//! drop(guard);
//! assert_eq!(handle.join().unwrap(), 1);
//! ```

pub mod lock;

pub use lock::{
    InMemoryLockManager, Lock, LockError, LockManager, LockState, OwnerId, ReentrantLock,
    ReentrantLockGuard,
};
