use super::LockError;

/// Trait for a single lock instance.
///
/// Implementations provide blocking lock, non-blocking try-lock, and unlock.
/// Whether a holder may lock again without unlocking first is up to the
/// implementation; [`ReentrantLock`](super::ReentrantLock) allows it.
pub trait Lock: Send + Sync {
    /// Acquire the lock, blocking until it becomes available.
    fn lock(&self) -> Result<(), LockError>;

    /// Try to acquire the lock without blocking.
    /// Returns `Ok(true)` if acquired, `Ok(false)` if held by someone else.
    fn try_lock(&self) -> Result<bool, LockError>;

    /// Release the lock.
    fn unlock(&self) -> Result<(), LockError>;
}
