//! Shared frontend utilities for API access, configuration, errors, token
//! storage, and build metadata.
//!
//! ## Session model
//!
//! 1. **Sign-in:** The client POSTs credentials to `/api/v1/auth/login` and
//!    stores the returned access and refresh tokens.
//! 2. **Requests:** Authenticated calls attach `Authorization: Bearer` from
//!    the token store. A 401 triggers one transparent refresh-and-retry.
//! 3. **Guarding:** The access token is mirrored into a cookie so route
//!    checks can run on navigation without touching `localStorage`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid logging
//! sensitive data.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod tokens;

pub use api::{get_json, post_json, post_no_content};
pub use errors::ApiError;
