//! Authentication route handlers: signup, signin, and identity lookup.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use larder_core::UserId;

use super::MessageResponse;
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Signup request body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signin request body.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Signin response body.
#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Public user fields returned on signin.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Response body for `GET /me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserProfile,
}

/// Public user fields returned by `GET /me`.
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// `POST /signup` - create an operator account.
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<MessageResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    auth.signup(&req.name, &req.email, &req.password).await?;

    Ok(Json(MessageResponse::new("User created successfully")))
}

/// `POST /signin` - verify credentials and mint a bearer token.
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<SigninRequest>,
) -> Result<Json<SigninResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let (token, user) = auth.signin(&req.email, &req.password).await?;

    Ok(Json(SigninResponse {
        token,
        user: UserInfo {
            name: user.name,
            email: user.email.into_inner(),
        },
    }))
}

/// `GET /me` - resolve the authenticated operator.
///
/// Returns 404 if the identity no longer resolves to a row.
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<MeResponse>> {
    let auth = AuthService::new(state.pool(), state.tokens());
    let user = auth.current_user(identity.user_id).await?;

    Ok(Json(MeResponse {
        user: UserProfile {
            id: user.id,
            name: user.name,
            email: user.email.into_inner(),
        },
    }))
}
