use serde::{Deserialize, Serialize};

/// Token lifetime assumed when the server omits `expiresIn`.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Lifetime of `token` in seconds
    #[serde(rename = "expiresIn", default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn ttl_secs(&self) -> i64 {
        self.expires_in
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_expiry_uses_default_ttl() {
        let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.ttl_secs(), DEFAULT_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_login_response_with_expiry() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","expiresIn":120}"#).unwrap();
        assert_eq!(resp.ttl_secs(), 120);

        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","expiresIn":0}"#).unwrap();
        assert_eq!(resp.ttl_secs(), DEFAULT_TOKEN_TTL_SECS);
    }
}
