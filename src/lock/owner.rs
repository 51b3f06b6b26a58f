use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: OwnerId = OwnerId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
}

/// Identity of a thread of execution, as recorded in a lock's owner field.
///
/// Ids are handed out from a process-wide counter the first time a thread
/// asks for one, then cached for the rest of that thread's life. They are
/// never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(u64);

impl OwnerId {
    /// The id of the calling thread.
    pub fn current() -> Self {
        CURRENT.with(|id| *id)
    }

    /// The raw numeric value of this id.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread#{}", self.0)
    }
}
