//! Store operator domain types.

use chrono::{DateTime, Utc};

use larder_core::{Email, UserId};

/// A store operator account.
///
/// Created at signup and never mutated afterwards; the password hash lives
/// only in the database row and in [`crate::db::UserRepository`] lookups.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
