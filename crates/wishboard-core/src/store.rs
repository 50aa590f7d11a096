//! Wish Store
//!
//! Cached split of a board's rows into todo and done. Rebuilt wholesale on
//! every reload; never merged incrementally.

use crate::domain::{Wish, WishId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishStore {
    pub todo: Vec<Wish>,
    pub done: Vec<Wish>,
}

impl WishStore {
    /// Partition rows by their done flag, preserving fetch order
    pub fn from_rows(rows: Vec<Wish>) -> Self {
        let (done, todo) = rows.into_iter().partition(|w| w.done);
        Self { todo, done }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wish> {
        self.todo.iter().chain(self.done.iter())
    }

    /// Cached copy of a wish, from either partition
    pub fn find(&self, id: &WishId) -> Option<&Wish> {
        self.iter().find(|w| &w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, done: bool) -> Wish {
        serde_json::from_value(serde_json::json!({
            "id": id, "board_id": "b", "title": id, "done": done
        }))
        .unwrap()
    }

    #[test]
    fn test_partition_is_lossless() {
        let rows = vec![row("a", false), row("b", true), row("c", false), row("d", true)];
        let store = WishStore::from_rows(rows.clone());

        assert!(store.todo.iter().all(|w| !w.done));
        assert!(store.done.iter().all(|w| w.done));
        assert_eq!(store.len(), rows.len());
        for r in &rows {
            assert!(store.find(&r.id).is_some());
        }
        let todo_ids: Vec<_> = store.todo.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(todo_ids, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_board() {
        let store = WishStore::from_rows(Vec::new());
        assert!(store.is_empty());
        assert!(store.find(&WishId::new("x")).is_none());
    }
}
