//! # Pantry - a tiny local inventory list
//!
//! One screen's worth of functionality: type a name and a quantity,
//! persist the entry to a local SQLite file, view the accumulated list.
//!
//! Pantry provides:
//! - A storage adapter (`SqliteStore`) owning schema setup and the two
//!   supported queries: a parameterized insert and a full-table fetch
//! - A form/list controller (`ItemScreen`) owning the ephemeral input
//!   fields and the displayed item list, with validate-then-save flow
//! - A terminal surface (interactive screen plus one-shot subcommands)

pub mod config;
pub mod controller;
pub mod item;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use controller::{ItemScreen, Rejection, SaveOutcome};
pub use item::Item;
pub use storage::SqliteStore;

/// Result type alias for pantry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pantry operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
