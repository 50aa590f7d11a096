//! Wish Table
//!
//! `WishRepository` over the REST endpoint of the wishes table.

use async_trait::async_trait;
use wishboard_core::postgrest::{content_range_total, Query};
use wishboard_core::repository::WishRepository;
use wishboard_core::{BoardId, DomainError, DomainResult, NewWish, Wish, WishId, WishPatch};

use super::{js_error, read_text, SupabaseGateway};

#[async_trait(?Send)]
impl WishRepository for SupabaseGateway {
    async fn list_wishes(&self, board: &BoardId) -> DomainResult<Vec<Wish>> {
        let query = Query::new()
            .select("*")
            .eq("board_id", board.as_str())
            .order("created_at", true);
        let response = self
            .send("load", "GET", &self.wishes_url(&query.to_query_string()), None, None)
            .await?;
        let body = read_text("load", &response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn count_by_author(&self, board: &BoardId, author: &str) -> DomainResult<usize> {
        let op = "count";
        let query = Query::new()
            .select("id")
            .eq("board_id", board.as_str())
            .eq("author", author);
        let response = self
            .send(op, "HEAD", &self.wishes_url(&query.to_query_string()), None, Some("count=exact"))
            .await?;
        let range = response
            .headers()
            .get("content-range")
            .map_err(js_error(op))?
            .ok_or_else(|| DomainError::remote(op, "missing Content-Range"))?;
        content_range_total(&range).ok_or_else(|| DomainError::remote(op, format!("bad Content-Range {range:?}")))
    }

    async fn insert_wish(&self, wish: &NewWish) -> DomainResult<()> {
        let body = serde_json::to_string(wish)?;
        self.send("insert", "POST", &self.wishes_url(""), Some(body), Some("return=minimal"))
            .await?;
        Ok(())
    }

    async fn update_wish(&self, id: &WishId, patch: &WishPatch) -> DomainResult<()> {
        let query = Query::new().eq("id", id.as_str());
        let body = serde_json::to_string(patch)?;
        self.send(
            "update",
            "PATCH",
            &self.wishes_url(&query.to_query_string()),
            Some(body),
            Some("return=minimal"),
        )
        .await?;
        Ok(())
    }

    async fn delete_wish(&self, id: &WishId) -> DomainResult<()> {
        let query = Query::new().eq("id", id.as_str());
        self.send("delete", "DELETE", &self.wishes_url(&query.to_query_string()), None, None)
            .await?;
        Ok(())
    }
}
