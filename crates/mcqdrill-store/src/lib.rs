//! mcqdrill-store — Persistence for banks and result history.
//!
//! Everything persisted is a string-valued JSON blob behind the
//! [`kv::KeyValueStore`] trait. All operations are whole-value
//! read-modify-write: there is no partial update and no cross-process
//! serialization, so concurrent writers are last-write-wins by design.

pub mod bank;
pub mod history;
pub mod kv;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
