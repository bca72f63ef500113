use contracts::system::auth::LoginResponse;

/// Authenticated admin session.
///
/// Created on login and restored from storage at start-up; provided
/// through context and handed to [`crate::shared::api::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Expiry as epoch milliseconds
    pub expires_at_ms: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, expires_at_ms: i64) -> Self {
        Self {
            token: token.into(),
            expires_at_ms,
        }
    }

    /// Expiry saturates at `i64::MAX` for TTLs too large to represent
    pub fn from_login(response: &LoginResponse, now_ms: i64) -> Self {
        let ttl_ms = response.ttl_secs().saturating_mul(1000);
        Self::new(response.token.clone(), now_ms.saturating_add(ttl_ms))
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Milliseconds until expiry, zero once expired
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expires_at_ms.saturating_sub(now_ms).max(0)
    }
}

/// Current time in epoch milliseconds from the browser clock
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_login_uses_server_ttl() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t0k","expiresIn":60}"#).unwrap();
        let session = Session::from_login(&response, 1_000);

        assert_eq!(session.token, "t0k");
        assert_eq!(session.expires_at_ms, 61_000);
    }

    #[test]
    fn test_from_login_saturates_huge_ttl() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token":"t","expiresIn":9223372036854775}"#).unwrap();
        let session = Session::from_login(&response, 1_000);

        assert_eq!(session.expires_at_ms, i64::MAX);
        assert!(!session.is_expired_at(1_000));
        assert_eq!(session.remaining_ms(-1), i64::MAX);
    }

    #[test]
    fn test_expiry() {
        let session = Session::new("t", 10_000);
        assert!(!session.is_expired_at(9_999));
        assert!(session.is_expired_at(10_000));
        assert_eq!(session.remaining_ms(4_000), 6_000);
        assert_eq!(session.remaining_ms(20_000), 0);
    }
}
