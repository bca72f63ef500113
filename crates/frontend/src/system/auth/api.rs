use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::shared::api::{error_message, parse_body};

/// Exchange admin credentials for a token
pub async fn login(
    config: &AppConfig,
    email: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&config.api_url("/admin/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !response.ok() {
        return Err(error_message(response.status(), &parse_body(&text)));
    }

    serde_json::from_str::<LoginResponse>(&text)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
