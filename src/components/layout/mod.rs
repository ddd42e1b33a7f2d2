//! Layout components shared across routes.

mod app_shell;

pub use app_shell::AppShell;
