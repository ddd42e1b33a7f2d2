//! Browser-side store for the access and refresh token pair. Both tokens
//! live in `localStorage`, and the access token is mirrored into a cookie
//! so the route guard can check for a session without touching storage.
//! Tokens are opaque strings here; expiry and validity are the API's call.

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Cookie that mirrors the access token for navigation-time route checks.
pub const SESSION_COOKIE: &str = "auth-token";

/// Reads the stored access token, if any.
pub fn access_token() -> Option<String> {
    storage_get(ACCESS_TOKEN_KEY)
}

/// Reads the stored refresh token, if any.
pub fn refresh_token() -> Option<String> {
    storage_get(REFRESH_TOKEN_KEY)
}

/// Persists a token pair and refreshes the mirrored session cookie.
/// Both halves are written together so the store never holds a partial pair.
pub fn set_tokens(access: &str, refresh: &str) {
    storage_set(ACCESS_TOKEN_KEY, access);
    storage_set(REFRESH_TOKEN_KEY, refresh);
    write_cookie(&session_cookie(access));
}

/// Removes both tokens and expires the mirrored session cookie.
pub fn clear_tokens() {
    storage_remove(ACCESS_TOKEN_KEY);
    storage_remove(REFRESH_TOKEN_KEY);
    write_cookie(&expired_session_cookie());
}

/// Whether the mirrored session cookie is present on the document.
pub fn session_cookie_present() -> bool {
    cookie_present(&document_cookies(), SESSION_COOKIE)
}

fn session_cookie(value: &str) -> String {
    format!("{SESSION_COOKIE}={value}; path=/; SameSite=Lax")
}

fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// Scans a `document.cookie` string for a cookie with the given name.
/// Only presence matters; values are never read back from the cookie.
fn cookie_present(cookies: &str, name: &str) -> bool {
    cookies
        .split(';')
        .any(|part| part.split_once('=').is_some_and(|(key, _)| key.trim() == name))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_get(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok()).flatten()
}

#[cfg(target_arch = "wasm32")]
fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn storage_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
}

#[cfg(target_arch = "wasm32")]
fn document_cookies() -> String {
    html_document()
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_cookie(cookie: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(cookie);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn storage_remove(_key: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn document_cookies() -> String {
    String::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn write_cookie(_cookie: &str) {}

#[cfg(test)]
mod tests {
    use super::{
        access_token, cookie_present, expired_session_cookie, refresh_token, session_cookie,
        session_cookie_present, set_tokens,
    };

    #[test]
    fn session_cookie_carries_path_and_samesite() {
        let cookie = session_cookie("abc123");
        assert!(cookie.starts_with("auth-token=abc123"));
        assert!(cookie.contains("path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn expired_session_cookie_uses_epoch_expiry() {
        let cookie = expired_session_cookie();
        assert!(cookie.starts_with("auth-token="));
        assert!(cookie.contains("expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn cookie_present_finds_cookie_among_others() {
        assert!(cookie_present("auth-token=abc", "auth-token"));
        assert!(cookie_present("theme=dark; auth-token=abc; lang=en", "auth-token"));
        assert!(cookie_present("theme=dark;  auth-token=abc", "auth-token"));
    }

    #[test]
    fn cookie_present_rejects_missing_and_similar_names() {
        assert!(!cookie_present("", "auth-token"));
        assert!(!cookie_present("theme=dark; lang=en", "auth-token"));
        assert!(!cookie_present("auth-token-v2=abc", "auth-token"));
        assert!(!cookie_present("auth", "auth-token"));
    }

    #[test]
    fn cookie_present_matches_empty_values() {
        assert!(cookie_present("auth-token=", "auth-token"));
    }

    #[test]
    fn reads_outside_browsing_context_are_absent() {
        set_tokens("access", "refresh");

        assert_eq!(access_token(), None);
        assert_eq!(refresh_token(), None);
        assert!(!session_cookie_present());
    }
}
