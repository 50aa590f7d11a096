//! Identity Store
//!
//! Author id and display name persisted in the browser's local storage.
//! Missing storage (private mode, no window) reads as unset and drops writes.

use web_sys::Storage;
use wishboard_core::{AuthorId, StorageKeys, ValidationError};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("[identity] local storage unavailable, {} not saved", key);
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::error!("[identity] saving {} failed: {:?}", key, e);
    }
}

/// Stored author id; empty identity when unset or invalid
pub fn author_id() -> Option<AuthorId> {
    AuthorId::from_stored(read(StorageKeys::AUTHOR_ID))
}

/// Validate and persist an author id.
///
/// The caller dispatches the change so the board re-renders.
pub fn set_author_id(raw: &str) -> Result<AuthorId, ValidationError> {
    let id = AuthorId::parse(raw)?;
    write(StorageKeys::AUTHOR_ID, id.as_str());
    log::info!("[identity] author id set to {}", id);
    Ok(id)
}

pub fn display_name() -> String {
    read(StorageKeys::DISPLAY_NAME).unwrap_or_default()
}

pub fn set_display_name(name: &str) {
    write(StorageKeys::DISPLAY_NAME, name.trim());
}
