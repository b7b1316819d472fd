//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A create was attempted on an identifier already present.
  #[error("user with ID {0} already exists")]
  UserExists(i64),

  /// An update or delete was attempted on an absent identifier.
  #[error("no user with ID {0} exists")]
  UserNotFound(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
