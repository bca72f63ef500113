//! Runtime configuration of the admin frontend.
//!
//! The API base URL is fixed at build time through `ECO_STAY_API_BASE`.
//! Without it the base is derived from the page location, with the API
//! expected on port 3000 of the same host. Dates are shown in the
//! browser's UTC offset at load time.

use crate::shared::date_utils::local_offset;
use chrono::{FixedOffset, Offset, Utc};

/// Compile-time override of the API base URL
const API_BASE_ENV: Option<&str> = option_env!("ECO_STAY_API_BASE");

/// Path under the API base where uploaded images are served
const IMAGE_ASSETS_PATH: &str = "assets/images";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    api_base: String,
    utc_offset: FixedOffset,
}

impl AppConfig {
    /// Config for `api_base` showing dates in UTC
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim().trim_end_matches('/').to_string();
        Self {
            api_base,
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Resolve the configuration for the running page
    pub fn load() -> Self {
        match API_BASE_ENV {
            Some(base) if !base.trim().is_empty() => {
                log::info!("API base from ECO_STAY_API_BASE: {}", base);
                Self::new(base).with_utc_offset(local_offset())
            }
            _ => {
                let base = api_base_from_location();
                log::info!("API base derived from location: {}", base);
                Self::new(base).with_utc_offset(local_offset())
            }
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Offset timestamps are converted to before their day is shown
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Build a full API URL. `path` may or may not start with a slash.
    ///
    /// # Example
    /// ```ignore
    /// let url = config.api_url("/admin/package");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// URL of an uploaded image: `{BASE_URL}/assets/images/{identifier}`
    pub fn asset_url(&self, identifier: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_base,
            IMAGE_ASSETS_PATH,
            identifier.trim().trim_start_matches('/')
        )
    }
}

/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// Returns an empty string when there is no window (tests, SSR).
fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_with_single_slash() {
        let config = AppConfig::new("https://api.ecostay.in/");
        assert_eq!(config.api_base(), "https://api.ecostay.in");
        assert_eq!(config.utc_offset(), Utc.fix());
        assert_eq!(
            config.api_url("/admin/package"),
            "https://api.ecostay.in/admin/package"
        );
        assert_eq!(
            config.api_url("admin/enquiry"),
            "https://api.ecostay.in/admin/enquiry"
        );
    }

    #[test]
    fn test_asset_url() {
        let config = AppConfig::new("http://localhost:3000");
        assert_eq!(
            config.asset_url("room-1.jpg"),
            "http://localhost:3000/assets/images/room-1.jpg"
        );
        assert_eq!(
            config.asset_url("/id.png"),
            "http://localhost:3000/assets/images/id.png"
        );
    }
}
