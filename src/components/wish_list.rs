//! Wish Lists Component
//!
//! Todo and done lists, rebuilt from the view model on every change.

use leptos::prelude::*;
use wishboard_core::BoardView;

use crate::components::WishCard;

#[component]
pub fn WishLists(board: Memo<BoardView>) -> impl IntoView {
    view! {
        <section class="list todo-list">
            <h2>
                "やりたいこと "
                <span class="todo-count">{move || board.get().count_label()}</span>
            </h2>
            <Show when=move || board.get().todo.is_empty()>
                <p class="empty">"まだありません"</p>
            </Show>
            <div class="items">
                {move || board.get().todo.into_iter().map(|wish| view! { <WishCard wish=wish /> }).collect_view()}
            </div>
        </section>

        <section class="list done-list">
            <h2>"達成済み " <span class="done-count">{move || board.get().done.len()}</span></h2>
            <Show when=move || board.get().done.is_empty()>
                <p class="empty">"まだありません"</p>
            </Show>
            <div class="items">
                {move || board.get().done.into_iter().map(|wish| view! { <WishCard wish=wish /> }).collect_view()}
            </div>
        </section>
    }
}
