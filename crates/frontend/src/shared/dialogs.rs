//! Blocking browser dialogs used around mutating row actions.

use web_sys::window;

/// Ask the user to confirm; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
