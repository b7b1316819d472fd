//! SQL schema for the roster SQLite store.
//!
//! Executed on every open: `PRAGMA foreign_keys` is per-connection in
//! SQLite, so it has to run each time, and the DDL is idempotent. Future
//! migrations will be gated on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Table and column names are camelCase to match already-populated database
/// files, so opening one keeps working.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS user (
    userID    INTEGER PRIMARY KEY,
    firstName TEXT NOT NULL,
    lastName  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS contactInfo (
    userID      INTEGER NOT NULL REFERENCES user(userID) ON DELETE CASCADE,
    phoneNumber INTEGER NOT NULL
);

PRAGMA user_version = 1;
";
