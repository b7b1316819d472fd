//! Record types: one named type per entity, plus the joined row.
//!
//! A user's identity fields and their contact information live in two
//! related tables joined on the user identifier. [`UserRecord`] is the flat
//! equi-join row the CRUD operations speak in; [`User`] and [`ContactInfo`]
//! are its per-table halves.

// ─── Entities ────────────────────────────────────────────────────────────────

/// A row of the `user` table: caller-supplied identifier plus name fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  pub user_id:    i64,
  pub first_name: String,
  pub last_name:  String,
}

/// A row of the `contactInfo` table. Exactly one exists per [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
  pub user_id:      i64,
  pub phone_number: i64,
}

// ─── Joined row ──────────────────────────────────────────────────────────────

/// The equi-join of [`User`] and [`ContactInfo`] on the user identifier.
/// The unit of create/update input and of read output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
  pub user_id:      i64,
  pub first_name:   String,
  pub last_name:    String,
  pub phone_number: i64,
}

impl UserRecord {
  /// Split into the two table rows, both carrying the same identifier.
  pub fn split(&self) -> (User, ContactInfo) {
    (
      User {
        user_id: self.user_id,
        first_name: self.first_name.clone(),
        last_name: self.last_name.clone(),
      },
      ContactInfo {
        user_id: self.user_id,
        phone_number: self.phone_number,
      },
    )
  }

  /// Rebuild the flat row from its halves. The identifier is taken from
  /// `user`; callers are expected to have joined on identifier equality.
  pub fn join(user: User, contact: ContactInfo) -> Self {
    Self {
      user_id: user.user_id,
      first_name: user.first_name,
      last_name: user.last_name,
      phone_number: contact.phone_number,
    }
  }
}
