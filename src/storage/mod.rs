//! Snapshot persistence — a pluggable key-value store plus a versioned,
//! validated save/load layer on top of it.
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `store`    | `SnapshotStore` trait, `MemoryStore`, `FileStore` |
//! | `snapshot` | Versioned JSON snapshots with schema validation |
//!
//! Persistence is best-effort throughout: a session that cannot save keeps
//! playing, and a stored entry that fails validation is silently discarded
//! (with a `log::warn!`) and removed.

pub mod snapshot;
pub mod store;

pub use snapshot::{load, save, CollectionRule, SnapshotSchema, SCHEMA_VERSION};
pub use store::{FileStore, MemoryStore, SnapshotStore, StoreError};
