//! Request and response types for auth API calls. These payloads carry
//! credentials and bearer tokens, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Serialized as an explicit `null` when absent, matching the API schema.
    pub full_name: Option<String>,
}

/// Token pair issued by login and refresh.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Account profile returned by the API to hydrate auth state.
/// Read-only on the client; it is fetched, never locally edited.
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_serialization() {
        let tokens = TokenResponse {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            token_type: "bearer".to_string(),
        };

        let json = serde_json::to_string(&tokens).expect("Failed to serialize");
        assert!(json.contains("access-1"));
        assert!(json.contains("refresh-1"));

        let deserialized: TokenResponse =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized.access_token, "access-1");
        assert_eq!(deserialized.token_type, "bearer");
    }

    #[test]
    fn register_request_serializes_missing_name_as_null() {
        let request = RegisterRequest {
            email: "user@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            full_name: None,
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains(r#""full_name":null"#));
    }

    #[test]
    fn user_profile_accepts_null_full_name() {
        let json = r#"{"id":"u-1","email":"user@example.com","full_name":null,"is_active":true}"#;

        let profile: UserProfile = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(profile.id, "u-1");
        assert_eq!(profile.full_name, None);
        assert!(profile.is_active);
    }
}
