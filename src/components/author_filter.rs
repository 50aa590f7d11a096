//! Author Filter Component
//!
//! Dropdown of everyone who has added a wish.

use leptos::prelude::*;
use wishboard_core::view::ALL_AUTHORS;
use wishboard_core::{AuthorFilter, BoardView};

use crate::store::{dispatch, use_app_store, Action, BoardStateStoreFields};

#[component]
pub fn AuthorFilterBar(board: Memo<BoardView>) -> impl IntoView {
    let store = use_app_store();
    let is_selected = move |value: &str| store.filter().get().value() == value;

    view! {
        <div class="filter-bar">
            <label>
                "表示: "
                <select on:change=move |ev| {
                    dispatch(store, Action::FilterChanged(AuthorFilter::from_value(&event_target_value(&ev))))
                }>
                    <option value=ALL_AUTHORS selected=move || is_selected(ALL_AUTHORS)>"全員"</option>
                    {move || {
                        board
                            .get()
                            .authors
                            .into_iter()
                            .map(|author| {
                                let value = author.clone();
                                view! {
                                    <option value=author.clone() selected=move || is_selected(&value)>
                                        {author.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </label>
        </div>
    }
}
