//! Storage Handle
//!
//! Thin wrapper over the embedded engine. Durability, indexing, MVCC and
//! the on-disk format all belong to the engine; this module only owns the
//! handle lifecycle and the three operations the resolver needs.

mod handle;

pub use handle::Store;
