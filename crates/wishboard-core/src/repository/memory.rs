//! In-Memory Backend
//!
//! Behaves like the hosted store for the calls the client makes: server
//! assigned ids and timestamps, newest-first ordering, composite-key upsert.
//! Every call is counted so tests can assert what was (not) written.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::traits::{VisitRepository, WishRepository};
use crate::domain::{BoardId, DomainError, DomainResult, NewWish, VisitRecord, Wish, WishId, WishPatch};

#[derive(Debug, Default)]
struct Tables {
    wishes: Vec<Wish>,
    visits: Vec<VisitRecord>,
}

/// Shared handle; clones see the same tables
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    tables: Rc<RefCell<Tables>>,
    next_id: Rc<Cell<u64>>,
    inserts: Rc<Cell<usize>>,
    updates: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail as a remote error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.get()
    }

    pub fn update_count(&self) -> usize {
        self.updates.get()
    }

    pub fn wishes(&self) -> Vec<Wish> {
        self.tables.borrow().wishes.clone()
    }

    pub fn visits(&self) -> Vec<VisitRecord> {
        self.tables.borrow().visits.clone()
    }

    /// Overwrite a stored row directly, as another client would
    pub fn overwrite(&self, id: &WishId, patch: &WishPatch) {
        if let Some(w) = self.tables.borrow_mut().wishes.iter_mut().find(|w| &w.id == id) {
            w.apply(patch);
        }
    }

    fn check_writable(&self, op: &'static str) -> DomainResult<()> {
        if self.fail_writes.get() {
            return Err(DomainError::remote(op, "backend unavailable"));
        }
        Ok(())
    }

    fn stamp(&self, id: u64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_767_225_600 + id as i64, 0).unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl WishRepository for MemoryBackend {
    async fn list_wishes(&self, board: &BoardId) -> DomainResult<Vec<Wish>> {
        let mut rows: Vec<Wish> = self
            .tables
            .borrow()
            .wishes
            .iter()
            .filter(|w| w.board_id == board.as_str())
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn count_by_author(&self, board: &BoardId, author: &str) -> DomainResult<usize> {
        Ok(self
            .tables
            .borrow()
            .wishes
            .iter()
            .filter(|w| w.board_id == board.as_str() && w.author_name() == author)
            .count())
    }

    async fn insert_wish(&self, wish: &NewWish) -> DomainResult<()> {
        self.check_writable("insert")?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.inserts.set(self.inserts.get() + 1);
        self.tables.borrow_mut().wishes.push(Wish {
            id: WishId::new(id.to_string()),
            board_id: wish.board_id.clone(),
            title: wish.title.clone(),
            note: wish.note.clone(),
            author: Some(wish.author.clone()),
            done: wish.done,
            feedback: None,
            participants: Some(wish.participants.clone()),
            likes: wish.likes,
            likes_users: Some(wish.likes_users.clone()),
            comments: Some(wish.comments.clone()),
            created_at: Some(self.stamp(id)),
        });
        Ok(())
    }

    async fn update_wish(&self, id: &WishId, patch: &WishPatch) -> DomainResult<()> {
        self.check_writable("update")?;
        self.updates.set(self.updates.get() + 1);
        // Like the REST filter, an unknown id updates nothing.
        self.overwrite(id, patch);
        Ok(())
    }

    async fn delete_wish(&self, id: &WishId) -> DomainResult<()> {
        self.check_writable("delete")?;
        self.tables.borrow_mut().wishes.retain(|w| &w.id != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl VisitRepository for MemoryBackend {
    async fn list_visits(&self, board: &BoardId) -> DomainResult<Vec<VisitRecord>> {
        Ok(self
            .tables
            .borrow()
            .visits
            .iter()
            .filter(|v| v.board_id == board.as_str())
            .cloned()
            .collect())
    }

    async fn upsert_visit(&self, record: &VisitRecord) -> DomainResult<()> {
        self.check_writable("upsert")?;
        let mut tables = self.tables.borrow_mut();
        let existing = tables.visits.iter_mut().find(|v| {
            v.board_id == record.board_id && v.user_id == record.user_id && v.pref_code == record.pref_code
        });
        match existing {
            Some(v) => v.visited = record.visited,
            None => tables.visits.push(record.clone()),
        }
        Ok(())
    }
}
