//! Wish Card Component
//!
//! One wish with its engagement fields. Todo cards can be completed, liked,
//! joined and commented on; done cards show the feedback and can be undone.

use chrono::Utc;
use leptos::prelude::*;
use wishboard_core::Wish;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::dialog;
use crate::store::{use_app_store, BoardStateStoreFields};

const COMPLETE_PROMPT: &str = "達成おめでとう！ 感想を入れますか？（任意）";

#[component]
pub fn WishCard(wish: Wish) -> impl IntoView {
    let ctx = use_app_context();
    let done = wish.done;
    let title = wish.title.clone();
    let note = wish.note.clone().filter(|n| !n.is_empty());
    let author = wish.author_name().to_string();
    let feedback = wish.feedback.clone().filter(|f| !f.is_empty());
    let wish = StoredValue::new(wish);

    let on_complete = move |_: web_sys::MouseEvent| {
        // Cancelling the prompt still completes, without feedback.
        let feedback = dialog::prompt(COMPLETE_PROMPT).unwrap_or_default();
        let id = wish.with_value(|w| w.id.clone());
        let svc = ctx.service();
        ctx.mutate_wishes("complete", async move { svc.complete_wish(&id, &feedback).await });
    };

    let on_undo = move |_: web_sys::MouseEvent| {
        let id = wish.with_value(|w| w.id.clone());
        let svc = ctx.service();
        ctx.mutate_wishes("undo", async move { svc.undo_wish(&id).await });
    };

    let on_delete = move |_: ()| {
        let id = wish.with_value(|w| w.id.clone());
        let svc = ctx.service();
        ctx.mutate_wishes("delete", async move { svc.delete_wish(&id).await });
    };

    let question = if done { "達成済みからも削除しますか？" } else { "削除してよいですか？" };

    view! {
        <div class=if done { "item done" } else { "item" }>
            <div class="item-body">
                <div class="title">{title}</div>
                {note.map(|n| view! { <div class="muted">{n}</div> })}
                {(!author.is_empty()).then(|| view! { <div class="author">"by " {author}</div> })}
                {feedback.map(|f| view! { <div class="muted feedback">"感想: " {f}</div> })}
                <Engagement wish=wish />
            </div>
            <div class="actions">
                {if done {
                    view! { <button class="pill" on:click=on_undo>"戻す"</button> }.into_any()
                } else {
                    view! { <button class="pill complete" on:click=on_complete>"達成"</button> }.into_any()
                }}
                <DeleteConfirmButton question=question on_confirm=on_delete />
            </div>
        </div>
    }
}

/// Likes, participants and comments of one wish
#[component]
fn Engagement(wish: StoredValue<Wish>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let likes = wish.with_value(|w| w.likes);
    let participants = wish.with_value(|w| w.participant_names());
    let comments = wish.with_value(|w| w.comment_list());
    let limit = ctx.service().config().comment_limit;

    let liked = move || {
        store
            .author_id()
            .get()
            .is_some_and(|me| wish.with_value(|w| w.is_liked_by(&me)))
    };

    let on_like = move |_: web_sys::MouseEvent| {
        let me = store.author_id().get_untracked();
        let cached = wish.get_value();
        let svc = ctx.service();
        ctx.mutate_wishes("like", async move { svc.toggle_like(&cached, me.as_ref()).await });
    };

    let on_join = move |_: web_sys::MouseEvent| {
        let name = store.display_name().get_untracked();
        let cached = wish.get_value();
        let svc = ctx.service();
        ctx.mutate_wishes("join", async move { svc.add_participant(&cached, &name).await });
    };

    let (draft, set_draft) = signal(String::new());
    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let name = store.display_name().get_untracked();
        let author = if name.trim().is_empty() {
            store
                .author_id()
                .get_untracked()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "名無し".to_string())
        } else {
            name
        };
        let cached = wish.get_value();
        let svc = ctx.service();
        ctx.mutate_wishes("comment", async move { svc.add_comment(&cached, &text, &author, Utc::now()).await });
    };

    view! {
        <div class="engagement">
            <div class="engagement-row">
                <button
                    class=move || if liked() { "pill like liked" } else { "pill like" }
                    on:click=on_like
                >
                    {move || if liked() { "♥ " } else { "♡ " }}
                    {likes}
                </button>
                <button class="pill" on:click=on_join>"参加する"</button>
                {(!participants.is_empty()).then(|| view! {
                    <span class="participants">"参加: " {participants.join("・")}</span>
                })}
            </div>
            <ul class="comments">
                {comments
                    .into_iter()
                    .map(|c| {
                        let time = c.display_time();
                        view! {
                            <li>
                                <span class="comment-author">{c.author}</span>
                                <span class="comment-time">{time}</span>
                                <span class="comment-text">{c.text}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <form class="comment-form" on:submit=on_comment>
                <input
                    type="text"
                    placeholder="コメント"
                    maxlength=limit.to_string()
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <span class="counter">{move || format!("{}/{}", draft.get().chars().count(), limit)}</span>
                <button type="submit" class="pill">"送信"</button>
            </form>
        </div>
    }
}
