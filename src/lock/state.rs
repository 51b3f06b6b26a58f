use serde::{Deserialize, Serialize};

use super::OwnerId;

/// Bookkeeping of a reentrant lock: who holds it and how deep.
///
/// `owner` is `None` exactly when `hold_count` is zero. Every mutation goes
/// through [`enter`](LockState::enter) and [`exit`](LockState::exit), which
/// keep the two fields in step. Deserializing rejects input where they
/// disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLockState")]
pub struct LockState {
    owner: Option<OwnerId>,
    hold_count: usize,
}

impl LockState {
    /// A free lock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    pub fn hold_count(&self) -> usize {
        self.hold_count
    }

    pub fn is_free(&self) -> bool {
        self.hold_count == 0
    }

    pub fn is_held_by(&self, id: OwnerId) -> bool {
        self.hold_count > 0 && self.owner == Some(id)
    }

    /// True when the lock is held by some thread other than `id`, i.e. an
    /// acquire by `id` has to wait.
    pub fn blocks(&self, id: OwnerId) -> bool {
        self.hold_count > 0 && self.owner != Some(id)
    }

    /// Record one more acquisition by `id`.
    ///
    /// Callers must have checked [`blocks`](LockState::blocks) first.
    pub(crate) fn enter(&mut self, id: OwnerId) {
        debug_assert!(!self.blocks(id));
        self.owner = Some(id);
        self.hold_count += 1;
    }

    /// Undo one acquisition. Returns `true` if the lock is now free.
    ///
    /// Callers must have checked [`is_held_by`](LockState::is_held_by) first.
    pub(crate) fn exit(&mut self) -> bool {
        debug_assert!(self.hold_count > 0);
        self.hold_count -= 1;
        if self.hold_count == 0 {
            self.owner = None;
            true
        } else {
            false
        }
    }
}

#[derive(Deserialize)]
struct RawLockState {
    owner: Option<OwnerId>,
    hold_count: usize,
}

impl TryFrom<RawLockState> for LockState {
    type Error = String;

    fn try_from(raw: RawLockState) -> Result<Self, Self::Error> {
        match (raw.owner, raw.hold_count) {
            (None, 0) | (Some(_), 1..) => Ok(LockState {
                owner: raw.owner,
                hold_count: raw.hold_count,
            }),
            (None, n) => Err(format!("lock state has hold count {} but no owner", n)),
            (Some(owner), _) => Err(format!("lock state owned by {} with hold count 0", owner)),
        }
    }
}
