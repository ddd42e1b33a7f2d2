//! Auth feature module covering credential flows, session hydration, and
//! route guarding. It keeps authentication logic out of the UI and must stay
//! aligned with backend contract expectations. This module touches security
//! boundaries and must avoid logging secrets or token material.
//!
//! Flow overview: Signup registers the account and immediately signs in with
//! the same credentials. Login exchanges credentials for a token pair and
//! hydrates the profile. Authenticated requests refresh expired access
//! tokens once, transparently, before giving up.

pub mod client;
mod guards;
pub mod state;
pub mod types;

pub use guards::RouteGuard;
