//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - items(id, name, quantity)
//!
//! The adapter exposes exactly three operations: schema initialization
//! (run on open), a parameterized insert, and a full-table fetch.

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteStore;
