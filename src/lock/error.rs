use std::fmt;

use super::OwnerId;

/// Error type for lock operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockError {
    /// `release` was called by a thread that does not hold the lock.
    /// `owner` is `None` when the lock was not held at all.
    IllegalOwnership {
        caller: OwnerId,
        owner: Option<OwnerId>,
    },
    /// A lock manager's key map was poisoned (a thread panicked while holding it).
    Poisoned(String),
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::IllegalOwnership {
                caller,
                owner: Some(owner),
            } => write!(
                f,
                "illegal lock ownership: {} released a lock held by {}",
                caller, owner
            ),
            LockError::IllegalOwnership {
                caller,
                owner: None,
            } => write!(
                f,
                "illegal lock ownership: {} released a lock that is not held",
                caller
            ),
            LockError::Poisoned(msg) => write!(f, "lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for LockError {}
