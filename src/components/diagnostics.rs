//! Diagnostics Panel Component
//!
//! Recent log records for troubleshooting failed remote calls.

use leptos::prelude::*;

use crate::logger;

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let (records, set_records) = signal(Vec::<String>::new());

    view! {
        <details class="diagnostics">
            <summary>"診断ログ"</summary>
            <button class="pill" on:click=move |_| set_records.set(logger::recent_records())>"更新"</button>
            <ul>
                {move || records.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
            </ul>
        </details>
    }
}
