//! Navigation-time access control decided from the mirrored session cookie
//! alone. The policy is a pure function over the path and cookie presence so
//! it can be tested without a browser. Token validity is the API's concern;
//! an expired cookie just means one bounced request and a redirect later.

use crate::app_lib::tokens;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Route prefixes that require a session.
const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];

/// Pages meant for signed-out visitors only.
const AUTH_PAGES: &[&str] = &["/login", "/register"];

/// Prefixes the guard never inspects: API calls and static assets.
const EXEMPT_PREFIXES: &[&str] = &["/api/", "/assets/", "/favicon.ico"];

/// Guard decision for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Pass,
    Redirect(String),
}

/// Applies the access policy to a path given the session cookie's presence.
/// Visitors without a session are sent to sign-in with the original path in
/// `next`; signed-in visitors are kept off the auth pages.
pub fn evaluate(path: &str, has_session: bool) -> GuardOutcome {
    if EXEMPT_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return GuardOutcome::Pass;
    }

    if !has_session && PROTECTED_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return GuardOutcome::Redirect(format!("/login?next={path}"));
    }

    if has_session && AUTH_PAGES.iter().any(|prefix| path.starts_with(prefix)) {
        return GuardOutcome::Redirect("/dashboard".to_string());
    }

    GuardOutcome::Pass
}

/// Applies the access policy on every client-side navigation.
#[component]
pub fn RouteGuard(children: Children) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        // UX-only guard; real access control must live on the API.
        if let GuardOutcome::Redirect(target) = evaluate(&path, tokens::session_cookie_present()) {
            navigate(&target, Default::default());
        }
    });

    view! { {children()} }
}

#[cfg(test)]
mod tests {
    use super::{GuardOutcome, evaluate};

    #[test]
    fn protected_route_without_session_redirects_to_login() {
        assert_eq!(
            evaluate("/dashboard", false),
            GuardOutcome::Redirect("/login?next=/dashboard".to_string())
        );
    }

    #[test]
    fn nested_protected_route_keeps_full_path_in_next() {
        assert_eq!(
            evaluate("/dashboard/settings", false),
            GuardOutcome::Redirect("/login?next=/dashboard/settings".to_string())
        );
    }

    #[test]
    fn protected_route_with_session_passes() {
        assert_eq!(evaluate("/dashboard", true), GuardOutcome::Pass);
    }

    #[test]
    fn auth_pages_with_session_redirect_to_dashboard() {
        assert_eq!(
            evaluate("/login", true),
            GuardOutcome::Redirect("/dashboard".to_string())
        );
        assert_eq!(
            evaluate("/register", true),
            GuardOutcome::Redirect("/dashboard".to_string())
        );
    }

    #[test]
    fn auth_pages_without_session_pass() {
        assert_eq!(evaluate("/login", false), GuardOutcome::Pass);
        assert_eq!(evaluate("/register", false), GuardOutcome::Pass);
    }

    #[test]
    fn public_routes_pass_in_both_states() {
        assert_eq!(evaluate("/", false), GuardOutcome::Pass);
        assert_eq!(evaluate("/", true), GuardOutcome::Pass);
        assert_eq!(evaluate("/about", false), GuardOutcome::Pass);
    }

    #[test]
    fn exempt_prefixes_always_pass() {
        assert_eq!(evaluate("/api/v1/auth/me", false), GuardOutcome::Pass);
        assert_eq!(evaluate("/api/v1/auth/login", true), GuardOutcome::Pass);
        assert_eq!(evaluate("/assets/logo.svg", false), GuardOutcome::Pass);
        assert_eq!(evaluate("/favicon.ico", false), GuardOutcome::Pass);
    }
}
