//! Signed, time-limited identity tokens.
//!
//! Tokens are stateless HS256 JWTs carrying the owner's `user_id` and an
//! expiry one hour after issuance. Verification is self-contained: it checks
//! the signature and expiry against the service secret and never consults
//! the database. There is no revocation list; a minted token stays valid
//! until it expires.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use larder_core::UserId;

/// Token lifetime in seconds (1 hour).
const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Errors that can occur in the token service.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed payload, or expired token.
    #[error("invalid or expired token")]
    Invalid,

    /// Signing a new token failed.
    #[error("token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Claims carried by an identity token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Owner identity, as the canonical UUID string.
    user_id: String,
    /// Issued-at (unix timestamp).
    iat: i64,
    /// Expiry (unix timestamp).
    exp: i64,
}

/// Issues and verifies signed identity tokens.
///
/// Built once at startup from the configured signing secret and shared via
/// [`crate::state::AppState`].
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        // A token must fail from the moment its expiry elapses.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
        }
    }

    /// Issue a token for `user_id`, expiring one hour from now.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as of `issued_at`. Split out so expiry behavior can be
    /// exercised without waiting an hour.
    fn issue_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            user_id: user_id.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return the owner identity it carries.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the signature does not match, the
    /// payload is malformed, or the token is expired.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        UserId::parse(&data.claims.user_id).map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::*;

    fn service() -> TokenService {
        TokenService::new(&SecretString::from(
            "an-integration-test-signing-key-0123456789",
        ))
    }

    #[test]
    fn test_verify_roundtrip() {
        let tokens = service();
        let user_id = UserId::new(Uuid::new_v4());

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_expired() {
        let tokens = service();
        let user_id = UserId::new(Uuid::new_v4());

        // Issued two hours ago with a one-hour lifetime.
        let token = tokens
            .issue_at(user_id, Utc::now() - Duration::hours(2))
            .unwrap();
        assert!(matches!(tokens.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_accepts_before_expiry() {
        let tokens = service();
        let user_id = UserId::new(Uuid::new_v4());

        // 59 minutes into a one-hour lifetime.
        let token = tokens
            .issue_at(user_id, Utc::now() - Duration::minutes(59))
            .unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let user_id = UserId::new(Uuid::new_v4());
        let token = TokenService::new(&SecretString::from("another-signing-key-0123456789abcdef"))
            .issue(user_id)
            .unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(service().verify(""), Err(TokenError::Invalid)));
    }
}
