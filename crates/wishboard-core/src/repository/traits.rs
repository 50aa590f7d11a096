//! Repository Layer - Gateway Traits
//!
//! The remote backend as the client consumes it. Implementations can be the
//! hosted REST gateway or the in-memory backend used by tests.
//!
//! Futures are not `Send`: the browser runs everything on one event loop.

use async_trait::async_trait;

use crate::domain::{BoardId, DomainResult, NewWish, VisitRecord, Wish, WishId, WishPatch};

#[async_trait(?Send)]
pub trait WishRepository {
    /// All rows of a board, newest first
    async fn list_wishes(&self, board: &BoardId) -> DomainResult<Vec<Wish>>;

    /// Count-only query for one (board, author) pair
    async fn count_by_author(&self, board: &BoardId, author: &str) -> DomainResult<usize>;

    async fn insert_wish(&self, wish: &NewWish) -> DomainResult<()>;

    async fn update_wish(&self, id: &WishId, patch: &WishPatch) -> DomainResult<()>;

    async fn delete_wish(&self, id: &WishId) -> DomainResult<()>;
}

#[async_trait(?Send)]
pub trait VisitRepository {
    async fn list_visits(&self, board: &BoardId) -> DomainResult<Vec<VisitRecord>>;

    /// Insert or update keyed by (board, user, region)
    async fn upsert_visit(&self, record: &VisitRecord) -> DomainResult<()>;
}
