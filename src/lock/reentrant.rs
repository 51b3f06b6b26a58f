use std::fmt;
use std::marker::PhantomData;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use super::{Lock, LockError, LockState, OwnerId};

/// A lock the holding thread may acquire again without deadlocking itself.
///
/// Each `acquire` by the owner bumps a hold count; the lock is only handed
/// to another thread once the owner has called `release` the same number of
/// times.
///
/// Internally this is a monitor: `gate` guards the [`LockState`] and
/// `no_holder` parks acquirers until the hold count drops back to zero.
/// A release that frees the lock wakes a single waiter. There is no
/// queueing, so waiters are not served in arrival order.
///
/// ## Example
///
/// ```
/// use reentrant_lock::ReentrantLock;
///
/// let lock = ReentrantLock::new();
/// lock.acquire();
/// lock.acquire();
/// assert_eq!(lock.hold_count(), 2);
///
/// lock.release().unwrap();
/// lock.release().unwrap();
/// assert!(!lock.is_locked());
/// ```
pub struct ReentrantLock {
    gate: Mutex<LockState>,
    no_holder: Condvar,
}

impl ReentrantLock {
    pub fn new() -> Self {
        ReentrantLock {
            gate: Mutex::new(LockState::new()),
            no_holder: Condvar::new(),
        }
    }

    // Poisoning can only come from a panic on another thread while it held
    // the gate. The state is updated in single steps, so it is still
    // consistent and we carry on with it.
    fn gate(&self) -> MutexGuard<'_, LockState> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquire the lock, blocking while another thread holds it.
    ///
    /// Returns immediately if the lock is free or already held by the
    /// calling thread. There is no timeout and no way to abandon a pending
    /// acquire.
    pub fn acquire(&self) {
        let id = OwnerId::current();
        let mut state = self.gate();
        while state.blocks(id) {
            log::trace!(
                "{} waiting for reentrant lock held by {:?}",
                id,
                state.owner()
            );
            state = self
                .no_holder
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        state.enter(id);
        log::trace!("{} acquired reentrant lock (depth {})", id, state.hold_count());
    }

    /// Acquire the lock only if that does not require blocking.
    ///
    /// Returns `true` if the calling thread now holds the lock.
    pub fn try_acquire(&self) -> bool {
        let id = OwnerId::current();
        let mut state = self.gate();
        if state.blocks(id) {
            return false;
        }
        state.enter(id);
        true
    }

    /// Undo one `acquire` by the calling thread.
    ///
    /// When the hold count reaches zero the lock becomes free and one
    /// blocked acquirer, if any, is woken.
    ///
    /// # Errors
    ///
    /// [`LockError::IllegalOwnership`] if the calling thread does not hold
    /// the lock. The state is left untouched in that case.
    pub fn release(&self) -> Result<(), LockError> {
        let id = OwnerId::current();
        let mut state = self.gate();
        if !state.is_held_by(id) {
            log::warn!(
                "{} tried to release a reentrant lock held by {:?}",
                id,
                state.owner()
            );
            return Err(LockError::IllegalOwnership {
                caller: id,
                owner: state.owner(),
            });
        }
        if state.exit() {
            log::trace!("{} freed reentrant lock", id);
            self.no_holder.notify_one();
        }
        Ok(())
    }

    /// Acquire the lock and return a guard that releases it when dropped.
    pub fn guard(&self) -> ReentrantLockGuard<'_> {
        self.acquire();
        ReentrantLockGuard {
            lock: self,
            _not_send: PhantomData,
        }
    }

    /// How many times the calling thread currently holds the lock.
    /// Zero if it is free or held by another thread.
    pub fn hold_count(&self) -> usize {
        let state = self.gate();
        if state.is_held_by(OwnerId::current()) {
            state.hold_count()
        } else {
            0
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.gate().is_free()
    }

    pub fn is_held_by_current_thread(&self) -> bool {
        self.gate().is_held_by(OwnerId::current())
    }

    /// Snapshot of the owner and hold count.
    pub fn state(&self) -> LockState {
        *self.gate()
    }
}

impl Default for ReentrantLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReentrantLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentrantLock")
            .field("state", &self.state())
            .finish()
    }
}

impl Lock for ReentrantLock {
    fn lock(&self) -> Result<(), LockError> {
        self.acquire();
        Ok(())
    }

    fn try_lock(&self) -> Result<bool, LockError> {
        Ok(self.try_acquire())
    }

    fn unlock(&self) -> Result<(), LockError> {
        self.release()
    }
}

/// RAII guard returned by [`ReentrantLock::guard`].
///
/// Not `Send`: it has to be dropped on the thread that acquired the lock.
#[must_use = "if unused the lock is released immediately"]
pub struct ReentrantLockGuard<'a> {
    lock: &'a ReentrantLock,
    _not_send: PhantomData<*const ()>,
}

impl fmt::Debug for ReentrantLockGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentrantLockGuard")
            .field("lock", self.lock)
            .finish()
    }
}

impl Drop for ReentrantLockGuard<'_> {
    fn drop(&mut self) {
        // Fails only if the owner already released past this guard's
        // acquisition by calling `release` by hand.
        if let Err(err) = self.lock.release() {
            log::warn!("reentrant lock guard dropped after manual release: {}", err);
        }
    }
}
