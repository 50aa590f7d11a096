//! Board Resolver
//!
//! Reads the board id from the page URL, generating one (and rewriting the
//! URL in place) when the page has none.

use wasm_bindgen::JsValue;
use wishboard_core::{resolve_board_id, BoardId};

/// Current board id; a second call on the same page reads it back unchanged
pub fn resolve_board(id_len: usize) -> BoardId {
    let window = web_sys::window();
    let search = window
        .as_ref()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    let resolution = resolve_board_id(&search, || generate_board_id(id_len));
    if resolution.rewrite {
        let history = window.as_ref().and_then(|w| w.history().ok());
        match history {
            Some(history) => {
                let url = resolution.id.to_query();
                if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                    log::warn!("[board] could not rewrite URL: {:?}", e);
                }
            }
            None => log::warn!("[board] no history API, board link not bookmarkable"),
        }
        log::info!("[board] generated board {}", resolution.id);
    }
    resolution.id
}

/// UUID-based id in secure contexts, `Math.random` hex otherwise
fn generate_board_id(len: usize) -> BoardId {
    let crypto = web_sys::window()
        .filter(|w| w.is_secure_context())
        .and_then(|w| w.crypto().ok());
    match crypto {
        Some(crypto) => BoardId::from_uuid(&crypto.random_uuid(), len),
        None => BoardId::from_random(js_sys::Math::random, len),
    }
}

/// Navigate to another board (full page load)
pub fn open_board(board: &BoardId) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_search(&board.to_query()) {
            log::error!("[board] navigation failed: {:?}", e);
        }
    }
}

/// Shareable link of the current page
pub fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}
