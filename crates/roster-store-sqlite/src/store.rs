//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::{Connection, OptionalExtension as _, params};

use roster_core::{
  record::{ContactInfo, User, UserRecord},
  store::RecordStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster record store backed by a single SQLite file.
///
/// Owns the process-wide connection, opened once at startup and closed once
/// at shutdown. The clean-exit path closes explicitly via
/// [`SqliteStore::close`]; every other path closes by drop.
pub struct SqliteStore {
  conn: Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_connection(Connection::open(path)?)
  }

  /// Open an in-memory store — useful for testing.
  pub fn open_in_memory() -> Result<Self> {
    Self::from_connection(Connection::open_in_memory()?)
  }

  fn from_connection(conn: Connection) -> Result<Self> {
    conn.execute_batch(SCHEMA)?;
    Ok(Self { conn })
  }

  /// Close the connection, surfacing any error SQLite reports on the way
  /// out. Dropping the store closes it too; this exists so the clean-exit
  /// path can hear about failures.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e))
  }

  #[cfg(test)]
  pub(crate) fn connection(&self) -> &Connection { &self.conn }
}

/// Existence probe shared by [`RecordStore::validate`] and the gates inside
/// each transaction (`Transaction` derefs to `Connection`).
fn user_exists(conn: &Connection, user_id: i64) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM user WHERE userID = ?1",
        params![user_id],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  fn validate(&self, user_id: i64) -> Result<bool> {
    Ok(user_exists(&self.conn, user_id)?)
  }

  fn create(&mut self, record: &UserRecord) -> Result<()> {
    let tx = self.conn.transaction()?;

    if user_exists(&tx, record.user_id)? {
      return Err(roster_core::Error::UserExists(record.user_id).into());
    }

    let (user, contact) = record.split();
    tx.execute(
      "INSERT INTO user (userID, firstName, lastName) VALUES (?1, ?2, ?3)",
      params![user.user_id, user.first_name, user.last_name],
    )?;
    tx.execute(
      "INSERT INTO contactInfo (userID, phoneNumber) VALUES (?1, ?2)",
      params![contact.user_id, contact.phone_number],
    )?;

    tx.commit()?;
    Ok(())
  }

  fn read_all(&self) -> Result<Vec<UserRecord>> {
    let mut stmt = self.conn.prepare(
      "SELECT user.userID, firstName, lastName, phoneNumber
       FROM user JOIN contactInfo ON user.userID = contactInfo.userID",
    )?;

    let records = stmt
      .query_map([], |row| {
        let user = User {
          user_id: row.get(0)?,
          first_name: row.get(1)?,
          last_name: row.get(2)?,
        };
        let contact = ContactInfo {
          user_id: user.user_id,
          phone_number: row.get(3)?,
        };
        Ok(UserRecord::join(user, contact))
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
  }

  fn update(&mut self, record: &UserRecord) -> Result<()> {
    let tx = self.conn.transaction()?;

    if !user_exists(&tx, record.user_id)? {
      return Err(roster_core::Error::UserNotFound(record.user_id).into());
    }

    let (user, contact) = record.split();
    tx.execute(
      "UPDATE user SET firstName = ?2, lastName = ?3 WHERE userID = ?1",
      params![user.user_id, user.first_name, user.last_name],
    )?;
    tx.execute(
      "UPDATE contactInfo SET phoneNumber = ?2 WHERE userID = ?1",
      params![contact.user_id, contact.phone_number],
    )?;

    tx.commit()?;
    Ok(())
  }

  fn delete(&mut self, user_id: i64) -> Result<()> {
    let tx = self.conn.transaction()?;

    if !user_exists(&tx, user_id)? {
      return Err(roster_core::Error::UserNotFound(user_id).into());
    }

    // contactInfo goes first so the pair stays consistent even with
    // foreign-key enforcement toggled off.
    tx.execute("DELETE FROM contactInfo WHERE userID = ?1", params![user_id])?;
    tx.execute("DELETE FROM user WHERE userID = ?1", params![user_id])?;

    tx.commit()?;
    Ok(())
  }
}
