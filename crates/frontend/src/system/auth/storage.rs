use super::session::Session;
use web_sys::window;

const TOKEN_KEY: &str = "authToken";
const EXPIRY_KEY: &str = "tokenExpiry";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(EXPIRY_KEY, &session.expires_at_ms.to_string());
    }
}

/// Session left by a previous visit. A token without a readable expiry
/// is not trusted.
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let expires_at_ms = storage.get_item(EXPIRY_KEY).ok()??.parse::<i64>().ok()?;
    Some(Session::new(token, expires_at_ms))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(EXPIRY_KEY);
    }
}
