//! Share Link Component
//!
//! Copies the board URL to the clipboard.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::dialog;
use crate::location;

const COPY_FAILED: &str = "リンクのコピーに失敗しました";

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

#[component]
pub fn ShareLink() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let on_copy = move |_: web_sys::MouseEvent| {
        let Some(url) = location::current_url() else {
            dialog::alert(COPY_FAILED);
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&url).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(2_000).await;
                    set_copied.set(false);
                }
                Err(e) => {
                    log::warn!("[share] clipboard write failed: {:?}", e);
                    dialog::alert(COPY_FAILED);
                }
            }
        });
    };

    view! {
        <button class="pill share" on:click=on_copy>
            {move || if copied.get() { "コピーしました" } else { "共有リンクをコピー" }}
        </button>
    }
}
