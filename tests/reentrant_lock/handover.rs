//! Hand-over from a releasing owner to blocked acquirers.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use reentrant_lock::{OwnerId, ReentrantLock};

use crate::support::{Acquirer, UNBLOCKED};

// ============================================================================
// Scenario 3: a blocked acquirer takes over once the owner releases
// ============================================================================

#[test]
fn blocked_acquirer_takes_over() {
    let lock = Arc::new(ReentrantLock::new());
    lock.acquire();

    let waiter = Acquirer::spawn(&lock);
    assert!(waiter.is_blocked());

    lock.release().unwrap();

    let seen = waiter.wait_acquired();
    assert_eq!(seen.hold_count(), 1);
    assert_ne!(seen.owner(), Some(OwnerId::current()));
    assert!(!lock.is_held_by_current_thread());

    waiter.finish();
    assert!(!lock.is_locked());
}

// ============================================================================
// Every waiter eventually gets the lock, one at a time
// ============================================================================

#[test]
fn waiters_are_served_one_at_a_time() {
    const WAITERS: usize = 4;

    let lock = Arc::new(ReentrantLock::new());
    lock.acquire();

    let mut waiters: Vec<Acquirer> = (0..WAITERS).map(|_| Acquirer::spawn(&lock)).collect();
    for waiter in &waiters {
        assert!(waiter.is_blocked());
    }

    lock.release().unwrap();

    // No fairness: whichever waiter wins is fine, but only one may win.
    while !waiters.is_empty() {
        let deadline = Instant::now() + UNBLOCKED;
        let winner = loop {
            if let Some(pos) = waiters
                .iter()
                .position(|w| w.acquired.try_recv().is_ok())
            {
                break pos;
            }
            assert!(Instant::now() < deadline, "no waiter was woken after a release");
            thread::sleep(Duration::from_millis(5));
        };

        let winner = waiters.swap_remove(winner);
        for waiter in &waiters {
            assert!(waiter.is_blocked());
        }
        winner.finish();
    }

    assert!(!lock.is_locked());
}
