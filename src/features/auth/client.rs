//! Client wrappers for the auth API endpoints. These helpers centralize
//! paths and payload types, keeping auth flows consistent and preventing
//! token handling from leaking into route code.

use crate::{
    app_lib::{ApiError, get_json, post_json, post_no_content},
    features::auth::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile},
};

/// Exchanges credentials for a token pair.
/// Must never log the password or the returned tokens.
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    post_json("/api/v1/auth/login", request).await
}

/// Creates a new account. The success body is not consumed; callers sign in
/// afterwards to obtain tokens.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    post_no_content("/api/v1/auth/register", request).await
}

/// Fetches the profile behind the current access token.
pub async fn fetch_me() -> Result<UserProfile, ApiError> {
    get_json("/api/v1/auth/me").await
}
