//! SQLite backend for the roster record store.
//!
//! Wraps [`rusqlite`] directly: the program is single-threaded and
//! synchronous, so no async shim sits between the store and the database.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
