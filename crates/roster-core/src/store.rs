//! The `RecordStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! The CLI depends on this abstraction, not on any concrete backend.

use crate::record::UserRecord;

/// Abstraction over a roster record store backend.
///
/// Every mutating operation is gated on an existence check of the user
/// identifier and applies its statements as a single transactional unit: a
/// failure partway through must leave both tables untouched.
///
/// All methods are synchronous. The store is single-caller by design, so
/// mutating operations take `&mut self`.
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether a user row with the given identifier exists.
  ///
  /// The precondition gate for every mutating operation; no side effects.
  fn validate(&self, user_id: i64) -> Result<bool, Self::Error>;

  /// Insert one user row and one contact-info row for `record`.
  ///
  /// Fails with the duplicate-identifier error, mutating nothing, if the
  /// identifier is already taken.
  fn create(&mut self, record: &UserRecord) -> Result<(), Self::Error>;

  /// The equi-join of the two tables, in storage order, fully materialised.
  fn read_all(&self) -> Result<Vec<UserRecord>, Self::Error>;

  /// Overwrite first name, last name, and phone number for the identifier
  /// in `record`. Always a full replacement; there is no partial-field
  /// update.
  ///
  /// Fails with the unknown-identifier error, mutating nothing, if the
  /// identifier is absent.
  fn update(&mut self, record: &UserRecord) -> Result<(), Self::Error>;

  /// Remove the contact-info row, then the user row. No orphaned
  /// contact-info row may remain.
  ///
  /// Fails with the unknown-identifier error, mutating nothing, if the
  /// identifier is absent.
  fn delete(&mut self, user_id: i64) -> Result<(), Self::Error>;
}
