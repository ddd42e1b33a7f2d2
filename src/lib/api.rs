//! HTTP helpers for the JSON API with bearer authentication and a single
//! transparent refresh-and-retry on 401. Feature clients use these helpers
//! to avoid duplicating request setup. Tokens are read from the token store
//! at send time, never cached here.

use super::{config::AppConfig, errors::ApiError, tokens};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;

/// Refresh endpoint used internally when a request comes back 401.
const REFRESH_PATH: &str = "/api/v1/auth/refresh";

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct RefreshedTokens {
    access_token: String,
    refresh_token: String,
}

/// Fetches JSON from an authenticated endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send_with_refresh(path, None).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let payload = encode_body(body)?;
    let response = send_with_refresh(path, Some(payload)).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

/// Posts JSON and discards the response body. Covers 204 responses and
/// endpoints whose success body the caller does not need.
pub async fn post_no_content<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let payload = encode_body(body)?;
    send_with_refresh(path, Some(payload)).await?;
    Ok(())
}

/// Attempts to exchange the stored refresh token for a fresh pair.
/// Returns whether new tokens were persisted; never fails the caller.
pub async fn try_refresh() -> bool {
    let Some(refresh) = tokens::refresh_token() else {
        return false;
    };
    let Ok(payload) = to_string(&RefreshRequest {
        refresh_token: &refresh,
    }) else {
        return false;
    };
    let Ok(request) = Request::post(&build_url(REFRESH_PATH))
        .header("Content-Type", "application/json")
        .body(payload)
    else {
        return false;
    };
    let Ok(response) = request.send().await else {
        return false;
    };
    if !response.ok() {
        return false;
    }
    match response.json::<RefreshedTokens>().await {
        Ok(pair) => {
            tokens::set_tokens(&pair.access_token, &pair.refresh_token);
            true
        }
        Err(_) => false,
    }
}

/// What to do with a response given its status and the retry state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Disposition {
    Return,
    RefreshAndRetry,
    Fail,
}

/// Decides a response's fate. A 401 earns exactly one refresh-and-retry,
/// and only while a refresh token is on hand.
fn disposition(status: u16, already_retried: bool, has_refresh_token: bool) -> Disposition {
    if (200..300).contains(&status) {
        Disposition::Return
    } else if status == 401 && has_refresh_token && !already_retried {
        Disposition::RefreshAndRetry
    } else {
        Disposition::Fail
    }
}

/// Sends the request, refreshing expired credentials once when the first
/// attempt bounces with a 401. Terminal auth failures clear the token store
/// so stale credentials cannot wedge the session.
async fn send_with_refresh(path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = build_url(path);
    let response = send_once(&url, body.as_deref()).await?;

    match disposition(response.status(), false, tokens::refresh_token().is_some()) {
        Disposition::Return => Ok(response),
        Disposition::Fail => Err(http_error(response).await),
        Disposition::RefreshAndRetry => {
            if try_refresh().await {
                let retry = send_once(&url, body.as_deref()).await?;
                match disposition(retry.status(), true, true) {
                    Disposition::Return => Ok(retry),
                    _ => {
                        tokens::clear_tokens();
                        Err(http_error(retry).await)
                    }
                }
            } else {
                tokens::clear_tokens();
                Err(http_error(response).await)
            }
        }
    }
}

/// Builds and sends one attempt: GET without a payload, POST with one. The
/// access token is re-read from the store on every attempt so a retry picks
/// up freshly refreshed credentials.
async fn send_once(url: &str, body: Option<&str>) -> Result<Response, ApiError> {
    let headers = request_headers(tokens::access_token().as_deref(), body.is_some());
    let request = match body {
        Some(payload) => {
            let mut builder = Request::post(url);
            for (name, value) in headers {
                builder = builder.header(name, &value);
            }
            builder
                .body(payload.to_string())
                .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))?
        }
        None => {
            let mut builder = Request::get(url);
            for (name, value) in headers {
                builder = builder.header(name, &value);
            }
            builder
                .build()
                .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))?
        }
    };

    request
        .send()
        .await
        .map_err(|err| ApiError::Network(format!("Unable to reach the server: {err}")))
}

/// Headers for one attempt: JSON content type when a body is sent and a
/// bearer header exactly when an access token is supplied.
fn request_headers(access_token: Option<&str>, has_body: bool) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if has_body {
        headers.push(("Content-Type", "application/json".to_string()));
    }
    if let Some(token) = access_token {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    to_string(body)
        .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))
}

/// Turns a failed response into an error carrying the server's detail.
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        detail: error_detail(&body, &status_text),
    }
}

/// Extracts the `detail` field from a JSON error body, falling back to the
/// HTTP status text when the body is not JSON or carries no string detail.
fn error_detail(body: &str, status_text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| status_text.to_string())
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Disposition, RefreshRequest, build_url_with_base, disposition, error_detail,
        request_headers,
    };

    #[test]
    fn build_url_with_base_joins_and_trims_slashes() {
        assert_eq!(
            build_url_with_base("https://api.limen.dev", "/api/v1/auth/login"),
            "https://api.limen.dev/api/v1/auth/login"
        );
        assert_eq!(
            build_url_with_base("https://api.limen.dev/", "api/v1/auth/login"),
            "https://api.limen.dev/api/v1/auth/login"
        );
        assert_eq!(
            build_url_with_base(" https://api.limen.dev ", " /api/v1/auth/me "),
            "https://api.limen.dev/api/v1/auth/me"
        );
    }

    #[test]
    fn build_url_with_base_keeps_relative_paths_without_base() {
        assert_eq!(build_url_with_base("", "/api/v1/auth/me"), "/api/v1/auth/me");
        assert_eq!(build_url_with_base("  ", "/api/v1/auth/me"), "/api/v1/auth/me");
    }

    #[test]
    fn disposition_returns_successful_responses() {
        assert_eq!(disposition(200, false, true), Disposition::Return);
        assert_eq!(disposition(201, false, false), Disposition::Return);
        assert_eq!(disposition(204, true, true), Disposition::Return);
    }

    #[test]
    fn disposition_refreshes_first_401_with_refresh_token() {
        assert_eq!(disposition(401, false, true), Disposition::RefreshAndRetry);
    }

    #[test]
    fn disposition_fails_401_without_refresh_token() {
        assert_eq!(disposition(401, false, false), Disposition::Fail);
    }

    #[test]
    fn disposition_never_retries_twice() {
        assert_eq!(disposition(401, true, true), Disposition::Fail);
    }

    #[test]
    fn disposition_fails_other_statuses_without_retry() {
        assert_eq!(disposition(400, false, true), Disposition::Fail);
        assert_eq!(disposition(409, false, true), Disposition::Fail);
        assert_eq!(disposition(500, false, true), Disposition::Fail);
    }

    #[test]
    fn request_headers_sets_bearer_only_with_token() {
        let headers = request_headers(Some("token-1"), true);
        assert_eq!(
            headers,
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer token-1".to_string()),
            ]
        );

        let headers = request_headers(None, true);
        assert_eq!(headers, vec![("Content-Type", "application/json".to_string())]);
    }

    #[test]
    fn request_headers_skips_content_type_without_body() {
        let headers = request_headers(Some("token-1"), false);
        assert_eq!(headers, vec![("Authorization", "Bearer token-1".to_string())]);
        assert!(request_headers(None, false).is_empty());
    }

    #[test]
    fn refresh_request_serializes_stored_token() {
        let payload = serde_json::to_string(&RefreshRequest {
            refresh_token: "refresh-1",
        })
        .expect("Failed to serialize");

        assert_eq!(payload, r#"{"refresh_token":"refresh-1"}"#);
    }

    #[test]
    fn error_detail_prefers_json_detail_field() {
        assert_eq!(
            error_detail(r#"{"detail":"Incorrect email or password"}"#, "Unauthorized"),
            "Incorrect email or password"
        );
    }

    #[test]
    fn error_detail_falls_back_to_status_text() {
        assert_eq!(error_detail("", "Unauthorized"), "Unauthorized");
        assert_eq!(error_detail("not json", "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_detail(r#"{"message":"nope"}"#, "Conflict"), "Conflict");
        assert_eq!(
            error_detail(r#"{"detail":[{"loc":"body"}]}"#, "Unprocessable Entity"),
            "Unprocessable Entity"
        );
    }
}
