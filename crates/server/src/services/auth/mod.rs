//! Authentication service.
//!
//! Handles operator signup, signin, and identity resolution. Passwords are
//! hashed with Argon2id before storage; signin verifies the hash and mints
//! a bearer token via the token service.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use larder_core::{Email, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;
use crate::services::token::TokenService;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, tokens: &'a TokenService) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens,
        }
    }

    /// Register a new operator account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(name, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Sign in with email and password, minting a fresh identity token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialMismatch` if the email is unknown or
    /// the password is wrong; the two cases are indistinguishable to the
    /// caller.
    pub async fn signin(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::CredentialMismatch)?;

        verify_password(password, &password_hash)?;

        let token = self.tokens.issue(user.id)?;
        Ok((token, user))
    }

    /// Resolve the user row behind a verified identity.
    ///
    /// Token verification deliberately trusts the token without a lookup;
    /// this is the one place the row is re-checked, for `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the row no longer exists.
    pub async fn current_user(&self, user_id: UserId) -> Result<User, AuthError> {
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::CredentialMismatch)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::CredentialMismatch)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_verify_roundtrip() {
        let hash = hash_password("till-drawer-9").unwrap();
        assert!(verify_password("till-drawer-9", &hash).is_ok());
    }

    #[test]
    fn test_password_verify_rejects_wrong_password() {
        let hash = hash_password("till-drawer-9").unwrap();
        assert!(matches!(
            verify_password("till-drawer-8", &hash),
            Err(AuthError::CredentialMismatch)
        ));
    }

    #[test]
    fn test_password_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AuthError::CredentialMismatch)
        ));
    }
}
