//! UI Components
//!
//! Reusable Leptos components.

mod author_filter;
mod delete_confirm_button;
mod diagnostics;
mod identity_panel;
mod japan_map;
mod share_link;
mod visited_list;
mod wish_card;
mod wish_form;
mod wish_list;

pub use author_filter::AuthorFilterBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use diagnostics::DiagnosticsPanel;
pub use identity_panel::IdentityPanel;
pub use japan_map::JapanMap;
pub use share_link::ShareLink;
pub use visited_list::VisitedList;
pub use wish_card::WishCard;
pub use wish_form::WishForm;
pub use wish_list::WishLists;
