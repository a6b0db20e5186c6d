//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors that can occur during authentication operations.
///
/// These are the closed set of authentication failure kinds matched at the
/// HTTP boundary; handlers never string-match error messages.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Authorization header absent or not of the form `Bearer <token>`.
    #[error("missing or invalid authorization header")]
    MissingCredential,

    /// Token signature mismatch, malformed payload, or expired token.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Signin with an unknown email or wrong password.
    #[error("Invalid credentials")]
    CredentialMismatch,

    /// Signup with an email that already has an account.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// The identity no longer resolves to a user row.
    #[error("User not found")]
    UserNotFound,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] larder_core::EmailError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
