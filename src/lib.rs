//! Client-side web front end for the Limen authentication API: sign-up,
//! sign-in, a protected dashboard, and cookie-based route guarding over a
//! `localStorage`-backed token store.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;
