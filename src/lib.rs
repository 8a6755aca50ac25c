//! # kvpath
//!
//! A command-line front end over an embedded, ordered key-value store:
//! - JSON values stored under byte-string path keys
//! - `get` resolves exact matches first, falling back to a prefix scan
//! - One storage handle per invocation, released on every exit path
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Command Surface               │
//! │            (clap get/set + --dir)           │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │             Resolution Engine               │
//! │       (exact read → prefix-scan fallback)   │
//! └──────────┬─────────────────────┬────────────┘
//!            │                     │
//!            ▼                     ▼
//!     ┌─────────────┐       ┌─────────────┐
//!     │    Store    │       │    Codec    │
//!     │   (redb)    │       │   (JSON)    │
//!     └─────────────┘       └─────────────┘
//! ```
//!
//! All durability, indexing and isolation guarantees belong to the embedded
//! engine; this crate is the orchestration layer.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod store;
pub mod resolve;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvPathError, Result};
pub use config::Config;
pub use resolve::{resolve, Operation, Resolved};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvpath
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
