//! Wishboard App
//!
//! Resolves the board, wires the service into context and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wishboard_core::{BackendConfig, BoardConfig, BoardService, BoardView};

use crate::components::{AuthorFilterBar, DiagnosticsPanel, IdentityPanel, JapanMap, VisitedList, WishForm, WishLists};
use crate::context::AppContext;
use crate::gateway::{self, SupabaseGateway};
use crate::location;
use crate::storage;
use crate::store::{dispatch, Action, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();
    let backend = BackendConfig::from_build_env();
    let board = location::resolve_board(config.board_id_len);
    let max_items = config.max_items;

    // Realtime notices only re-fetch; they carry no row data we trust.
    let realtime_table = config.wishes_table.clone();
    let heartbeat_secs = config.heartbeat_secs;
    let realtime_backend = backend.clone();

    let service = BoardService::new(SupabaseGateway::new(backend, config.clone()), board.clone(), config);
    let ctx = AppContext::new(service);
    let store = Store::new(BoardState::new(storage::author_id(), storage::display_name()));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load wishes on mount and on every reload trigger
    Effect::new(move |_| {
        let version = ctx.wishes_version.get();
        let svc = ctx.service();
        spawn_local(async move {
            match svc.load_wishes().await {
                Ok(wishes) => dispatch(store, Action::WishesLoaded(wishes)),
                // Keep the last rendered state
                Err(e) => log::error!("[wishes] reload #{} failed: {}", version, e),
            }
        });
    });

    // Visits depend on who "me" is
    Effect::new(move |_| {
        let _ = ctx.visits_version.get();
        let me = store.author_id().get();
        let svc = ctx.service();
        spawn_local(async move {
            match svc.load_visits(me.as_ref()).await {
                Ok(visits) => dispatch(store, Action::VisitsLoaded(visits)),
                Err(e) => log::error!("[visits] reload failed: {}", e),
            }
        });
    });

    if let Err(e) = gateway::subscribe_to_board(&realtime_backend, &board, &realtime_table, heartbeat_secs, move || {
        ctx.reload_wishes()
    }) {
        log::error!("[realtime] subscribe failed: {:?}", e);
    }
    on_cleanup(gateway::unsubscribe);

    let view_model = Memo::new(move |_| BoardView::build(&store.wishes().get(), &store.filter().get(), max_items));
    let board_label = board.to_string();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"やりたいことリスト"</h1>
                <span class="board-id muted">"board: " {board_label}</span>
                <IdentityPanel />
            </header>

            <main class="main-content">
                <WishForm />
                <AuthorFilterBar board=view_model />
                <WishLists board=view_model />
            </main>

            <aside class="map-column">
                <JapanMap />
                <VisitedList />
            </aside>

            <footer>
                <DiagnosticsPanel />
            </footer>
        </div>
    }
}
