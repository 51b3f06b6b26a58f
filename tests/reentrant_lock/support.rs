//! Helpers for observing whether a thread is blocked.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reentrant_lock::{LockState, ReentrantLock};

/// How long a thread has to stay parked before we call it blocked.
pub const BLOCKED: Duration = Duration::from_millis(100);

/// Upper bound for a woken thread to report back.
pub const UNBLOCKED: Duration = Duration::from_secs(5);

/// A thread that acquires `lock`, reports the state it saw, then holds it
/// until [`finish`](Acquirer::finish) is called.
pub struct Acquirer {
    pub acquired: Receiver<LockState>,
    release: Sender<()>,
    handle: JoinHandle<()>,
}

impl Acquirer {
    pub fn spawn(lock: &Arc<ReentrantLock>) -> Self {
        let lock = Arc::clone(lock);
        let (acquired_tx, acquired) = channel();
        let (release, release_rx) = channel::<()>();

        let handle = thread::spawn(move || {
            lock.acquire();
            acquired_tx.send(lock.state()).unwrap();
            let _ = release_rx.recv();
            lock.release().unwrap();
        });

        Self {
            acquired,
            release,
            handle,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.acquired.recv_timeout(BLOCKED).is_err()
    }

    pub fn wait_acquired(&self) -> LockState {
        self.acquired
            .recv_timeout(UNBLOCKED)
            .expect("acquirer never got the lock")
    }

    pub fn finish(self) {
        let _ = self.release.send(());
        self.handle.join().unwrap();
    }
}
