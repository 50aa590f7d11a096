//! Blocking Dialogs
//!
//! Browser alert/confirm/prompt, plus the single place errors are reported.

use wishboard_core::DomainError;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `None` when the user cancels
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok()?
}

/// Validation failures are shown to the user; anything else is logged and
/// the operation is abandoned.
pub fn report(op: &str, err: &DomainError) {
    match err.as_validation() {
        Some(validation) => alert(&validation.to_string()),
        None => log::error!("[{}] {}", op, err),
    }
}
