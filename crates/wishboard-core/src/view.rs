//! Board View Model
//!
//! Everything the renderer shows, computed from the stores and the filter.

use std::collections::BTreeSet;

use crate::domain::Wish;
use crate::store::WishStore;

/// Value of the "everyone" entry in the author dropdown.
///
/// Author names are non-empty after trimming, so no author can collide with it.
pub const ALL_AUTHORS: &str = "";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthorFilter {
    #[default]
    All,
    Author(String),
}

impl AuthorFilter {
    /// Parse a dropdown value
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value == ALL_AUTHORS {
            AuthorFilter::All
        } else {
            AuthorFilter::Author(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            AuthorFilter::All => ALL_AUTHORS,
            AuthorFilter::Author(name) => name,
        }
    }

    pub fn matches(&self, wish: &Wish) -> bool {
        match self {
            AuthorFilter::All => true,
            AuthorFilter::Author(name) => wish.author_name().trim() == name.trim(),
        }
    }

    /// Fall back to everyone when the selected author has no wishes left
    pub fn reconcile(self, authors: &[String]) -> Self {
        let vanished = matches!(&self, AuthorFilter::Author(name) if !authors.iter().any(|a| a == name.trim()));
        if vanished {
            AuthorFilter::All
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub todo: Vec<Wish>,
    pub done: Vec<Wish>,
    /// Distinct non-empty authors across both partitions, sorted
    pub authors: Vec<String>,
    /// Cap figure shown next to the todo count
    pub cap: usize,
}

impl BoardView {
    pub fn build(store: &WishStore, filter: &AuthorFilter, max_items: usize) -> Self {
        let authors = distinct_authors(store);
        let filter = filter.clone().reconcile(&authors);
        let cap = match &filter {
            AuthorFilter::Author(_) => max_items,
            // Approximation: one full quota per author seen on the board.
            AuthorFilter::All => max_items * authors.len().max(1),
        };
        Self {
            todo: store.todo.iter().filter(|w| filter.matches(w)).cloned().collect(),
            done: store.done.iter().filter(|w| filter.matches(w)).cloned().collect(),
            authors,
            cap,
        }
    }

    /// `todo / cap` label
    pub fn count_label(&self) -> String {
        format!("{} / {}", self.todo.len(), self.cap)
    }
}

pub fn distinct_authors(store: &WishStore) -> Vec<String> {
    store
        .iter()
        .map(|w| w.author_name().trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, author: &str, done: bool) -> Wish {
        serde_json::from_value(serde_json::json!({
            "id": id, "board_id": "b", "title": id, "author": author, "done": done
        }))
        .unwrap()
    }

    fn store() -> WishStore {
        WishStore::from_rows(vec![
            row("1", "Ami", false),
            row("2", "Kai", false),
            row("3", "Ami", true),
            row("4", "", false),
            row("5", "Kai", true),
        ])
    }

    #[test]
    fn test_single_author_filter() {
        let view = BoardView::build(&store(), &AuthorFilter::from_value("Ami"), 100);
        assert!(view.todo.iter().chain(view.done.iter()).all(|w| w.author_name() == "Ami"));
        assert_eq!(view.todo.len(), 1);
        assert_eq!(view.done.len(), 1);
        assert_eq!(view.cap, 100);
    }

    #[test]
    fn test_all_filter_multiplies_cap() {
        let view = BoardView::build(&store(), &AuthorFilter::All, 100);
        assert_eq!(view.authors, vec!["Ami".to_string(), "Kai".to_string()]);
        assert_eq!(view.cap, 200);
        assert_eq!(view.todo.len(), 3);
        assert_eq!(view.count_label(), "3 / 200");
    }

    #[test]
    fn test_empty_board_shows_single_cap() {
        let view = BoardView::build(&WishStore::default(), &AuthorFilter::All, 100);
        assert_eq!(view.cap, 100);
        assert!(view.authors.is_empty());
    }

    #[test]
    fn test_filter_value_round_trip() {
        assert_eq!(AuthorFilter::from_value(ALL_AUTHORS), AuthorFilter::All);
        assert_eq!(AuthorFilter::from_value(AuthorFilter::All.value()), AuthorFilter::All);
        assert_eq!(AuthorFilter::from_value("Kai").value(), "Kai");
    }

    #[test]
    fn test_author_named_all_is_a_single_author() {
        let store = WishStore::from_rows(vec![row("1", "all", false), row("2", "Kai", false)]);
        let picked = AuthorFilter::from_value("all");
        assert_eq!(picked, AuthorFilter::Author("all".to_string()));

        let view = BoardView::build(&store, &picked, 100);
        assert_eq!(view.todo.len(), 1);
        assert_eq!(view.todo[0].author_name(), "all");
        assert_eq!(view.cap, 100);
    }

    #[test]
    fn test_vanished_author_falls_back_to_everyone() {
        let store = WishStore::from_rows(vec![row("1", "Ami", false)]);
        let stale = AuthorFilter::Author("Kai".to_string());
        assert_eq!(stale.clone().reconcile(&distinct_authors(&store)), AuthorFilter::All);

        let view = BoardView::build(&store, &stale, 100);
        assert_eq!(view.authors, vec!["Ami".to_string()]);
        assert_eq!(view.todo.len(), 1);
        assert_eq!(view.cap, 100);
        assert_eq!(view.count_label(), "1 / 100");
    }

    #[test]
    fn test_padded_author_names_match_their_option() {
        let store = WishStore::from_rows(vec![row("1", " Ami", false), row("2", "Ami ", true)]);
        let view = BoardView::build(&store, &AuthorFilter::from_value("Ami"), 100);
        assert_eq!(view.authors, vec!["Ami".to_string()]);
        assert_eq!(view.todo.len(), 1);
        assert_eq!(view.done.len(), 1);
    }
}
