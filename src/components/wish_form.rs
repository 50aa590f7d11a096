//! Wish Form Component
//!
//! Title, optional note and the author's display name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::dialog;
use crate::storage;
use crate::store::{dispatch, use_app_store, Action, BoardStateStoreFields};

#[component]
pub fn WishForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let title_text = title.get_untracked();
        let note_text = note.get_untracked();
        let author = store.display_name().get_untracked();
        let svc = ctx.service();
        set_busy.set(true);

        spawn_local(async move {
            match svc.add_wish(&title_text, &note_text, &author).await {
                Ok(()) => {
                    set_title.set(String::new());
                    set_note.set(String::new());
                    storage::set_display_name(&author);
                    ctx.reload_wishes();
                }
                Err(e) => dialog::report("add", &e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="wish-form" on:submit=on_submit>
            <input
                type="text"
                class="title-input"
                placeholder="やりたいこと"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                class="note-input"
                placeholder="メモ（任意）"
                prop:value=move || note.get()
                on:input=move |ev| set_note.set(event_target_value(&ev))
            ></textarea>
            <div class="form-row">
                <input
                    type="text"
                    class="author-input"
                    placeholder="名前"
                    prop:value=move || store.display_name().get()
                    on:input=move |ev| dispatch(store, Action::DisplayNameChanged(event_target_value(&ev)))
                />
                <button type="submit" class="pill primary" disabled=move || busy.get()>"追加"</button>
            </div>
        </form>
    }
}
