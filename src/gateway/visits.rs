//! Visited-Region Table
//!
//! `VisitRepository` over REST; upserts resolve on the natural composite key.

use async_trait::async_trait;
use wishboard_core::postgrest::Query;
use wishboard_core::repository::VisitRepository;
use wishboard_core::{BoardId, DomainResult, VisitRecord};

use super::{read_text, SupabaseGateway};

const CONFLICT_KEY: [&str; 3] = ["board_id", "user_id", "pref_code"];

#[async_trait(?Send)]
impl VisitRepository for SupabaseGateway {
    async fn list_visits(&self, board: &BoardId) -> DomainResult<Vec<VisitRecord>> {
        let query = Query::new().select("*").eq("board_id", board.as_str());
        let response = self
            .send("load visits", "GET", &self.visits_url(&query.to_query_string()), None, None)
            .await?;
        let body = read_text("load visits", &response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn upsert_visit(&self, record: &VisitRecord) -> DomainResult<()> {
        let query = Query::new().on_conflict(&CONFLICT_KEY);
        let body = serde_json::to_string(record)?;
        self.send(
            "upsert visit",
            "POST",
            &self.visits_url(&query.to_query_string()),
            Some(body),
            Some("resolution=merge-duplicates,return=minimal"),
        )
        .await?;
        Ok(())
    }
}
