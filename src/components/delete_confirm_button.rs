//! Delete Confirm Button Component
//!
//! Inline confirmation in front of a permanent delete.

use leptos::prelude::*;

/// Shows 削除 first; clicking asks `question` with ✓/✗ before `on_confirm` runs
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] question: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button class="pill danger" on:click=move |_| set_asking.set(true)>"削除"</button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{question.clone()}</span>
                <button
                    class="pill danger"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="pill" on:click=move |_| set_asking.set(false)>"✗"</button>
            </span>
        </Show>
    }
}
