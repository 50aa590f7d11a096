//! Board State Store
//!
//! The whole client state in one reactive store. Components read fields;
//! every change goes through `dispatch`.

use leptos::prelude::*;
use reactive_stores::Store;
use wishboard_core::view::distinct_authors;
use wishboard_core::{AuthorFilter, AuthorId, MapMode, VisitedSets, WishStore};

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Todo/done partitions from the last reload
    pub wishes: WishStore,
    /// Author dropdown selection
    pub filter: AuthorFilter,
    /// Visited regions from the last reload
    pub visits: VisitedSets,
    pub map_mode: MapMode,
    /// Empty identity until the user sets one
    pub author_id: Option<AuthorId>,
    pub display_name: String,
}

impl BoardState {
    pub fn new(author_id: Option<AuthorId>, display_name: String) -> Self {
        Self {
            author_id,
            display_name,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<BoardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// State transitions
#[derive(Debug, Clone)]
pub enum Action {
    WishesLoaded(WishStore),
    FilterChanged(AuthorFilter),
    VisitsLoaded(VisitedSets),
    MapModeChanged(MapMode),
    AuthorIdChanged(AuthorId),
    DisplayNameChanged(String),
}

/// Single update entry point
pub fn dispatch(store: AppStore, action: Action) {
    match action {
        Action::WishesLoaded(wishes) => {
            // Keep the dropdown on a real option once the author's last wish is gone
            let filter = store.filter().get_untracked();
            let reconciled = filter.clone().reconcile(&distinct_authors(&wishes));
            if reconciled != filter {
                *store.filter().write() = reconciled;
            }
            *store.wishes().write() = wishes;
        }
        Action::FilterChanged(filter) => *store.filter().write() = filter,
        Action::VisitsLoaded(visits) => *store.visits().write() = visits,
        Action::MapModeChanged(mode) => *store.map_mode().write() = mode,
        Action::AuthorIdChanged(id) => *store.author_id().write() = Some(id),
        Action::DisplayNameChanged(name) => *store.display_name().write() = name,
    }
}
