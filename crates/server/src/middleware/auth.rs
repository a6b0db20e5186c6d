//! Authentication extractor: the single trust boundary.
//!
//! Every owner-scoped handler takes [`RequireAuth`], which turns the
//! `Authorization: Bearer <token>` header into an [`Identity`] or rejects
//! the request with 401. There is no secondary authorization check
//! anywhere downstream; repositories scope every query by the identity's
//! `user_id`.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use larder_core::UserId;

use crate::error::AppError;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// The authenticated owner of a request.
///
/// Existence of the user row is not re-checked here; a verified token is
/// trusted for its lifetime.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// Owner whose `user_id` scopes all catalog and order visibility.
    pub user_id: UserId,
}

/// Extractor that requires bearer-token authentication.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(identity): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", identity.user_id)
/// }
/// ```
pub struct RequireAuth(pub Identity);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = extract_bearer_token(header).ok_or(AuthError::MissingCredential)?;

        let user_id = state
            .tokens()
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Self(Identity { user_id }))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
///
/// Returns `None` for an absent header, a non-Bearer scheme, or an empty
/// token.
fn extract_bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer_token(Some("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn test_rejects_absent_header() {
        assert_eq!(extract_bearer_token(None), None);
    }

    #[test]
    fn test_rejects_missing_prefix() {
        assert_eq!(extract_bearer_token(Some("abc123")), None);
    }

    #[test]
    fn test_rejects_other_scheme() {
        assert_eq!(extract_bearer_token(Some("Basic abc123")), None);
    }

    #[test]
    fn test_rejects_empty_token() {
        assert_eq!(extract_bearer_token(Some("Bearer ")), None);
        assert_eq!(extract_bearer_token(Some("Bearer    ")), None);
    }
}
