//! Identity Panel Component
//!
//! Author id entry and the "open the board named after me" shortcut.

use leptos::prelude::*;
use wishboard_core::{board_slug, ValidationError};

use crate::components::ShareLink;
use crate::dialog;
use crate::location;
use crate::storage;
use crate::store::{dispatch, use_app_store, Action, BoardStateStoreFields};

#[component]
pub fn IdentityPanel() -> impl IntoView {
    let store = use_app_store();
    let (draft, set_draft) = signal(
        store
            .author_id()
            .get_untracked()
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match storage::set_author_id(&draft.get_untracked()) {
            Ok(id) => dispatch(store, Action::AuthorIdChanged(id)),
            Err(e) => dialog::alert(&e.to_string()),
        }
    };

    let on_open_named = move |_: web_sys::MouseEvent| {
        let name = store.display_name().get_untracked();
        if name.trim().is_empty() {
            dialog::alert(&ValidationError::EmptyName.to_string());
            return;
        }
        let slug = board_slug(&name);
        if dialog::confirm(&format!("ボード「{}」を開きますか？", slug)) {
            storage::set_display_name(&name);
            location::open_board(&slug);
        }
    };

    view! {
        <div class="identity-panel">
            <form class="identity-form" on:submit=on_save>
                <span class="identity-status">
                    {move || match store.author_id().get() {
                        Some(id) => format!("ID: {}", id),
                        None => "ID未設定".to_string(),
                    }}
                </span>
                <input
                    type="text"
                    placeholder="英数字・-・_"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="pill">"IDを保存"</button>
            </form>
            <div class="identity-actions">
                <button class="pill" on:click=on_open_named>"名前でボードを開く"</button>
                <ShareLink />
            </div>
        </div>
    }
}
