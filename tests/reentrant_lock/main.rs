//! Reentrant lock integration tests.
//!
//! Exercises the lock from several OS threads:
//! - Mutual exclusion and reentrancy
//! - Ownership checks on release
//! - Hand-over to blocked acquirers
//! - Keyed locks from the in-memory manager

mod support;
mod handover;
