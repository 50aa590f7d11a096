//! Visited List Component
//!
//! My visited regions in code order, each with an un-mark button.

use leptos::prelude::*;
use wishboard_core::by_code;

use crate::components::japan_map::toggle_region;
use crate::context::use_app_context;
use crate::dialog;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn VisitedList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_clear = move |_: web_sys::MouseEvent| {
        if !dialog::confirm("訪問済みの地域をすべて解除しますか？") {
            return;
        }
        let current = store.visits().get_untracked();
        let me = store.author_id().get_untracked();
        let svc = ctx.service();
        ctx.mutate_visits("clear visits", async move { svc.clear_my_visits(&current, me.as_ref()).await });
    };

    view! {
        <section class="visited-list">
            <h3>"訪問済み " <span>{move || store.visits().get().mine.len()}</span> " / 47"</h3>
            <ul>
                {move || {
                    let mine = store.visits().get().mine;
                    if mine.is_empty() {
                        return view! { <li class="empty">"なし"</li> }.into_any();
                    }
                    mine.into_iter()
                        .map(|code| {
                            let name = by_code(&code).map(|p| p.name_ja).unwrap_or("?");
                            view! {
                                <li>
                                    <span>{name}</span>
                                    <button
                                        class="pill"
                                        aria-label="解除"
                                        on:click=move |_| toggle_region(ctx, store, code.clone())
                                    >
                                        "解除"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
            <button
                class="pill danger"
                disabled=move || store.visits().get().mine.is_empty()
                on:click=on_clear
            >
                "すべて解除"
            </button>
        </section>
    }
}
