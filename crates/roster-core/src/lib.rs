//! Core types and trait definitions for the roster record store.
//!
//! This crate is deliberately free of database and I/O dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
