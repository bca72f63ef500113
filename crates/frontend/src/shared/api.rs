//! Authorised JSON client for the admin REST API.

use crate::config::AppConfig;
use crate::shared::table::Row;
use crate::system::auth::context::use_session;
use crate::system::auth::session::Session;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use web_sys::FormData;

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: AppConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: AppConfig, session: Option<&Session>) -> Self {
        Self {
            config,
            token: session.map(|s| s.token.clone()),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            // The API expects the bare token, without a scheme
            Some(token) => builder.header("Authorization", token),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = self.config.api_url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let body = read_body(&response).await?;
        serde_json::from_value(body).map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// Fetch a collection endpoint as raw rows
    pub async fn get_rows(&self, path: &str) -> Result<Vec<Row>, String> {
        self.get_json::<Vec<Row>>(path).await
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, String> {
        let request = self
            .authorize(Request::post(&self.config.api_url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send(request).await
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, String> {
        let request = self
            .authorize(Request::put(&self.config.api_url(path)))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;
        send(request).await
    }

    pub async fn post_form(&self, path: &str, form: FormData) -> Result<Value, String> {
        let request = self
            .authorize(Request::post(&self.config.api_url(path)))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?;
        send(request).await
    }

    pub async fn put_form(&self, path: &str, form: FormData) -> Result<Value, String> {
        let request = self
            .authorize(Request::put(&self.config.api_url(path)))
            .body(form)
            .map_err(|e| format!("Failed to build request: {}", e))?;
        send(request).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, String> {
        let url = self.config.api_url(path);
        log::debug!("DELETE {}", url);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;
        read_body(&response).await
    }
}

async fn send(request: Request) -> Result<Value, String> {
    log::debug!("sending {}", request.url());
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_body(&response).await
}

/// Read a response body as JSON. Empty bodies become `null`, non-JSON
/// bodies a string. Non-2xx statuses turn into an error message.
async fn read_body(response: &Response) -> Result<Value, String> {
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let body = parse_body(&text);

    if !response.ok() {
        return Err(error_message(response.status(), &body));
    }
    Ok(body)
}

pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Message for a failed request: the server's `message` when it sent one
pub fn error_message(status: u16, body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed: {}", status))
}

/// Client for the current session, built from context
pub fn use_api() -> ApiClient {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let session = use_session();
    ApiClient::new(config, session.get_untracked().as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  "), Value::Null);
        assert_eq!(parse_body(r#"{"ok":true}"#), json!({"ok": true}));
        assert_eq!(parse_body("Deleted"), json!("Deleted"));
    }

    #[test]
    fn test_error_message_prefers_server_message() {
        assert_eq!(
            error_message(400, &json!({"message": "Room already booked"})),
            "Room already booked"
        );
        assert_eq!(error_message(500, &json!({"message": ""})), "Request failed: 500");
        assert_eq!(error_message(404, &Value::Null), "Request failed: 404");
    }

    #[test]
    fn test_client_carries_session_token() {
        let config = AppConfig::new("http://localhost:3000");
        let session = Session::new("abc", 0);

        let client = ApiClient::new(config.clone(), Some(&session));
        assert_eq!(client.token.as_deref(), Some("abc"));
        assert_eq!(ApiClient::new(config, None).token, None);
    }
}
