//! Japan Map Component
//!
//! Inlines the region SVG and shades each path from the Map Store. Events are
//! delegated from the container to the `path[id]` under the pointer.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::Element;
use wishboard_core::{by_svg_id, MapMode, RegionShade};

use crate::context::{use_app_context, AppContext};
use crate::gateway;
use crate::store::{dispatch, use_app_store, Action, AppStore, BoardStateStoreFields};

const REGION_SELECTOR: &str = "path[id]";

/// Flip "visited by me" for one region code
pub(crate) fn toggle_region(ctx: AppContext, store: AppStore, code: String) {
    let current = store.visits().get_untracked();
    let me = store.author_id().get_untracked();
    let svc = ctx.service();
    ctx.mutate_visits("toggle visit", async move { svc.toggle_visited(&current, me.as_ref(), &code).await });
}

/// Region path under an event, if any
fn region_target(ev: &web_sys::Event) -> Option<Element> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    target.closest(REGION_SELECTOR).ok()?
}

/// Make the inlined SVG responsive and its paths keyboard reachable
fn prepare_svg(container: &Element) -> Result<(), String> {
    let svg = container
        .query_selector("svg")
        .map_err(|e| format!("{:?}", e))?
        .ok_or_else(|| "SVG not found in response".to_string())?;
    let _ = svg.set_attribute("preserveAspectRatio", "xMidYMid meet");

    let paths = svg.query_selector_all(REGION_SELECTOR).map_err(|e| format!("{:?}", e))?;
    for i in 0..paths.length() {
        let Some(path) = paths.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let label = by_svg_id(&path.id()).map(|p| p.name_ja).unwrap_or("");
        let _ = path.set_attribute("tabindex", "0");
        let _ = path.set_attribute("role", "button");
        let _ = path.set_attribute("aria-label", label);
    }
    Ok(())
}

/// Apply the shade classes to every known region path
fn paint(container: &Element, shade: impl Fn(&str) -> RegionShade) {
    let Ok(paths) = container.query_selector_all(REGION_SELECTOR) else {
        return;
    };
    for i in 0..paths.length() {
        let Some(path) = paths.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(region) = by_svg_id(&path.id()) else {
            continue;
        };
        let classes = path.class_list();
        let _ = classes.remove_2(RegionShade::VisitedByMe.class(), RegionShade::VisitedBySomeone.class());
        let class = shade(region.code).class();
        if !class.is_empty() {
            let _ = classes.add_1(class);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Tooltip {
    text: String,
    x: f64,
    y: f64,
}

#[component]
pub fn JapanMap() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let container = NodeRef::<Div>::new();
    let (loaded, set_loaded) = signal(false);
    let (load_error, set_load_error) = signal(None::<String>);
    let (tooltip, set_tooltip) = signal(None::<Tooltip>);

    // Fetch once the container is mounted
    Effect::new(move |_| {
        let Some(el) = container.get() else {
            return;
        };
        let url = ctx.service().config().map_svg_url.clone();
        spawn_local(async move {
            match gateway::fetch_text(&url).await {
                Ok(svg) => {
                    el.set_inner_html(&svg);
                    match prepare_svg(&el) {
                        Ok(()) => set_loaded.set(true),
                        Err(e) => set_load_error.set(Some(e)),
                    }
                }
                Err(e) => {
                    log::error!("[map] {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    Effect::new(move |_| {
        let visits = store.visits().get();
        let mode = store.map_mode().get();
        if !loaded.get() {
            return;
        }
        if let Some(el) = container.get_untracked() {
            paint(&el, |code| visits.shade(code, mode));
        }
    });

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(code) = region_target(&ev).and_then(|p| by_svg_id(&p.id())).map(|r| r.code) {
            toggle_region(ctx, store, code.to_string());
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" && ev.key() != " " {
            return;
        }
        if let Some(code) = region_target(&ev).and_then(|p| by_svg_id(&p.id())).map(|r| r.code) {
            ev.prevent_default();
            toggle_region(ctx, store, code.to_string());
        }
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let region = region_target(&ev).and_then(|p| by_svg_id(&p.id()));
        let (Some(region), Some(el)) = (region, container.get_untracked()) else {
            set_tooltip.set(None);
            return;
        };
        let rect = el.get_bounding_client_rect();
        set_tooltip.set(Some(Tooltip {
            text: region.name_ja.to_string(),
            x: f64::from(ev.client_x()) - rect.left(),
            y: f64::from(ev.client_y()) - rect.top(),
        }));
    };

    let mode_button = move |mode: MapMode, label: &'static str| {
        view! {
            <button
                class=move || if store.map_mode().get() == mode { "pill active" } else { "pill" }
                on:click=move |_| dispatch(store, Action::MapModeChanged(mode))
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="map-panel">
            <div class="map-toolbar">
                {mode_button(MapMode::Mine, "自分")}
                {mode_button(MapMode::All, "みんな")}
            </div>
            <Show when=move || store.author_id().get().is_none()>
                <p class="notice">"IDを設定すると訪問した地域を記録できます"</p>
            </Show>
            <Show when=move || load_error.get().is_some()>
                <div class="map-error">
                    "地図の読み込みに失敗しました: " {move || load_error.get().unwrap_or_default()}
                </div>
            </Show>
            <div class="map-wrap">
                <div
                    class="map-container"
                    node_ref=container
                    on:click=on_click
                    on:keydown=on_keydown
                    on:mousemove=on_mousemove
                    on:mouseleave=move |_| set_tooltip.set(None)
                ></div>
                {move || tooltip.get().map(|t| view! {
                    <div class="tooltip show" style=format!("left:{}px;top:{}px", t.x, t.y)>{t.text}</div>
                })}
            </div>
        </section>
    }
}
