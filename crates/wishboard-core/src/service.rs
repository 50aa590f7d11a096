//! Board Service
//!
//! Every board operation: validate, issue one gateway call, and leave the
//! reload to the caller. Loads replace the cached stores wholesale.
//!
//! Two races are kept on purpose. The quota check is a count query followed
//! by an insert, so concurrent submissions can both pass. Engagement updates
//! are computed from the caller's cached wish, so concurrent updates to the
//! same row can overwrite each other.

use chrono::{DateTime, Utc};

use crate::config::BoardConfig;
use crate::domain::{
    self, by_code, AuthorId, BoardId, DomainError, DomainResult, NewWish, ValidationError, VisitRecord,
    VisitedSets, Wish, WishId, WishPatch,
};
use crate::repository::{VisitRepository, WishRepository};
use crate::store::WishStore;

#[derive(Debug, Clone)]
pub struct BoardService<R> {
    repo: R,
    board: BoardId,
    config: BoardConfig,
}

impl<R> BoardService<R> {
    pub fn new(repo: R, board: BoardId, config: BoardConfig) -> Self {
        Self { repo, board, config }
    }

    pub fn board(&self) -> &BoardId {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}

// ========================
// Wishes
// ========================

impl<R: WishRepository> BoardService<R> {
    pub async fn load_wishes(&self) -> DomainResult<WishStore> {
        let rows = self.repo.list_wishes(&self.board).await?;
        let store = WishStore::from_rows(rows);
        log::debug!(
            "[wishes] loaded {} rows (todo={} done={})",
            store.len(),
            store.todo.len(),
            store.done.len()
        );
        Ok(store)
    }

    /// Insert a new todo wish unless the author is at the cap
    pub async fn add_wish(&self, title: &str, note: &str, author: &str) -> DomainResult<()> {
        let draft = NewWish::draft(&self.board, title, note, author)?;
        let existing = self.repo.count_by_author(&self.board, &draft.author).await?;
        if existing >= self.config.max_items {
            log::info!("[wishes] {} is at the cap ({})", draft.author, existing);
            return Err(ValidationError::CapReached { cap: self.config.max_items }.into());
        }
        self.repo.insert_wish(&draft).await?;
        log::info!("[wishes] added {:?} by {}", draft.title, draft.author);
        Ok(())
    }

    pub async fn complete_wish(&self, id: &WishId, feedback: &str) -> DomainResult<()> {
        self.repo.update_wish(id, &WishPatch::complete(feedback)).await
    }

    pub async fn undo_wish(&self, id: &WishId) -> DomainResult<()> {
        self.repo.update_wish(id, &WishPatch::undo()).await
    }

    pub async fn delete_wish(&self, id: &WishId) -> DomainResult<()> {
        self.repo.delete_wish(id).await?;
        log::info!("[wishes] deleted {}", id);
        Ok(())
    }

    /// Add `name` to the participants of the cached `wish`.
    ///
    /// Returns false when the name was already present and nothing was written.
    pub async fn add_participant(&self, wish: &Wish, name: &str) -> DomainResult<bool> {
        match domain::join(wish, name)? {
            Some(patch) => {
                self.repo.update_wish(&wish.id, &patch).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Like or unlike the cached `wish`; returns the new liked state
    pub async fn toggle_like(&self, wish: &Wish, actor: Option<&AuthorId>) -> DomainResult<bool> {
        let actor = actor.ok_or(ValidationError::MissingIdentity)?;
        let liked = !wish.is_liked_by(actor);
        let patch = domain::toggle_like(wish, actor);
        self.repo.update_wish(&wish.id, &patch).await?;
        Ok(liked)
    }

    pub async fn add_comment(&self, wish: &Wish, text: &str, author: &str, at: DateTime<Utc>) -> DomainResult<()> {
        let patch = domain::comment(wish, text, author, at, self.config.comment_limit)?;
        self.repo.update_wish(&wish.id, &patch).await
    }
}

// ========================
// Visited regions
// ========================

impl<R: VisitRepository> BoardService<R> {
    pub async fn load_visits(&self, me: Option<&AuthorId>) -> DomainResult<VisitedSets> {
        let records = self.repo.list_visits(&self.board).await?;
        let sets = VisitedSets::from_records(&records, me);
        log::debug!("[visits] mine={} anyone={}", sets.mine.len(), sets.anyone.len());
        Ok(sets)
    }

    /// Flip "visited by me" for `code`; returns the value written
    pub async fn toggle_visited(&self, current: &VisitedSets, me: Option<&AuthorId>, code: &str) -> DomainResult<bool> {
        let me = me.ok_or(ValidationError::MissingIdentity)?;
        if by_code(code).is_none() {
            return Err(DomainError::NotFound(format!("region {code}")));
        }
        let visited = !current.is_mine(code);
        self.repo.upsert_visit(&self.visit_record(me, code, visited)).await?;
        Ok(visited)
    }

    /// Un-mark every region visited by me; returns how many were written
    pub async fn clear_my_visits(&self, current: &VisitedSets, me: Option<&AuthorId>) -> DomainResult<usize> {
        let me = me.ok_or(ValidationError::MissingIdentity)?;
        for code in &current.mine {
            self.repo.upsert_visit(&self.visit_record(me, code, false)).await?;
        }
        Ok(current.mine.len())
    }

    fn visit_record(&self, me: &AuthorId, code: &str, visited: bool) -> VisitRecord {
        VisitRecord {
            board_id: self.board.as_str().to_string(),
            user_id: me.as_str().to_string(),
            pref_code: code.to_string(),
            visited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MapMode;
    use crate::domain::RegionShade;
    use crate::repository::MemoryBackend;
    use crate::view::{AuthorFilter, BoardView};

    fn service(backend: &MemoryBackend) -> BoardService<MemoryBackend> {
        BoardService::new(backend.clone(), BoardId::new("board-1"), BoardConfig::default())
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_767_225_600, 0).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_complete_scenario() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);

        svc.add_wish("Learn piano", "", "Ami").await.unwrap();
        let store = svc.load_wishes().await.unwrap();
        assert_eq!(store.todo.len(), 1);
        assert_eq!(store.todo[0].author_name(), "Ami");
        let view = BoardView::build(&store, &AuthorFilter::All, 100);
        assert_eq!(view.todo.len(), 1);

        let id = store.todo[0].id.clone();
        svc.complete_wish(&id, "great").await.unwrap();
        let store = svc.load_wishes().await.unwrap();
        assert!(store.todo.is_empty());
        assert_eq!(store.done.len(), 1);
        assert_eq!(store.done[0].feedback.as_deref(), Some("great"));

        svc.undo_wish(&id).await.unwrap();
        let store = svc.load_wishes().await.unwrap();
        assert_eq!(store.todo.len(), 1);
        assert!(store.todo[0].feedback.is_none());

        svc.delete_wish(&id).await.unwrap();
        assert!(svc.load_wishes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cap_is_enforced_per_author() {
        let backend = MemoryBackend::new();
        let svc = BoardService::new(
            backend.clone(),
            BoardId::new("b"),
            BoardConfig { max_items: 2, ..BoardConfig::default() },
        );

        svc.add_wish("one", "", "Ami").await.unwrap();
        svc.add_wish("two", "", "Ami").await.unwrap();
        assert_eq!(backend.insert_count(), 2);

        let err = svc.add_wish("three", "", "Ami").await.unwrap_err();
        assert_eq!(err, DomainError::Validation(ValidationError::CapReached { cap: 2 }));
        assert_eq!(backend.insert_count(), 2);

        // Another author still has room.
        svc.add_wish("three", "", "Kai").await.unwrap();
        assert_eq!(backend.insert_count(), 3);
    }

    #[tokio::test]
    async fn test_validation_skips_remote_call() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let err = svc.add_wish("   ", "note", "Ami").await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::EmptyTitle));
        assert_eq!(backend.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_newest_first() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        svc.add_wish("old", "", "Ami").await.unwrap();
        svc.add_wish("new", "", "Ami").await.unwrap();
        let store = svc.load_wishes().await.unwrap();
        assert_eq!(store.todo[0].title, "new");
    }

    #[tokio::test]
    async fn test_like_twice_restores_original() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let me = AuthorId::parse("ami").unwrap();
        svc.add_wish("Learn piano", "", "Ami").await.unwrap();

        let original = svc.load_wishes().await.unwrap().todo[0].clone();
        assert!(svc.toggle_like(&original, Some(&me)).await.unwrap());

        let liked = svc.load_wishes().await.unwrap().todo[0].clone();
        assert_eq!(liked.likes, 1);
        assert!(liked.is_liked_by(&me));
        assert_eq!(liked.likes as usize, liked.liked_by().len());

        assert!(!svc.toggle_like(&liked, Some(&me)).await.unwrap());
        let back = svc.load_wishes().await.unwrap().todo[0].clone();
        assert_eq!(back.likes, original.likes);
        assert_eq!(back.liked_by(), original.liked_by());
        assert!(!back.is_liked_by(&me));
    }

    #[tokio::test]
    async fn test_like_requires_identity() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        svc.add_wish("x", "", "Ami").await.unwrap();
        let wish = svc.load_wishes().await.unwrap().todo[0].clone();
        let err = svc.toggle_like(&wish, None).await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingIdentity));
        assert_eq!(backend.update_count(), 0);
    }

    #[tokio::test]
    async fn test_stale_cache_loses_concurrent_like() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        svc.add_wish("x", "", "Ami").await.unwrap();
        let stale = svc.load_wishes().await.unwrap().todo[0].clone();

        let a = AuthorId::parse("a").unwrap();
        let b = AuthorId::parse("b").unwrap();
        svc.toggle_like(&stale, Some(&a)).await.unwrap();
        svc.toggle_like(&stale, Some(&b)).await.unwrap();

        let after = svc.load_wishes().await.unwrap().todo[0].clone();
        assert_eq!(after.likes, 1);
        assert_eq!(after.liked_by(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_participants_and_comments() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        svc.add_wish("Camp", "", "Ami").await.unwrap();

        let wish = svc.load_wishes().await.unwrap().todo[0].clone();
        assert!(svc.add_participant(&wish, "Kai").await.unwrap());
        let wish = svc.load_wishes().await.unwrap().todo[0].clone();
        assert!(!svc.add_participant(&wish, "Kai").await.unwrap());
        assert_eq!(backend.update_count(), 1);

        svc.add_comment(&wish, "楽しみ", "Kai", now()).await.unwrap();
        let wish = svc.load_wishes().await.unwrap().todo[0].clone();
        let comments = wish.comment_list();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author, "Kai");
        assert_eq!(wish.participant_names(), vec!["Kai".to_string()]);

        let err = svc.add_comment(&wish, &"x".repeat(101), "Kai", now()).await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::CommentTooLong { limit: 100 }));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_remote_untouched() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        svc.add_wish("x", "", "Ami").await.unwrap();
        let wish = svc.load_wishes().await.unwrap().todo[0].clone();

        backend.fail_writes(true);
        let err = svc.complete_wish(&wish.id, "done").await.unwrap_err();
        assert!(matches!(err, DomainError::Remote { op: "update", .. }));
        assert!(!svc.load_wishes().await.unwrap().todo.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_visited_is_an_involution() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let me = AuthorId::parse("me").unwrap();

        let before = svc.load_visits(Some(&me)).await.unwrap();
        assert!(svc.toggle_visited(&before, Some(&me), "13").await.unwrap());
        let mid = svc.load_visits(Some(&me)).await.unwrap();
        assert!(mid.is_mine("13"));
        assert!(!svc.toggle_visited(&mid, Some(&me), "13").await.unwrap());
        let after = svc.load_visits(Some(&me)).await.unwrap();
        assert_eq!(after.is_mine("13"), before.is_mine("13"));
        // Upserts update the same record instead of adding rows.
        assert_eq!(backend.visits().len(), 1);
    }

    #[tokio::test]
    async fn test_map_scenario_with_other_visitor() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let me = AuthorId::parse("me").unwrap();
        let other = AuthorId::parse("other").unwrap();

        let sets = svc.load_visits(Some(&me)).await.unwrap();
        svc.toggle_visited(&sets, Some(&me), "27").await.unwrap();
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        assert_eq!(sets.shade("27", MapMode::All), RegionShade::VisitedBySomeone);
        svc.toggle_visited(&sets, Some(&me), "27").await.unwrap();
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        assert_eq!(sets.shade("27", MapMode::All), RegionShade::Unvisited);

        let others = svc.load_visits(Some(&other)).await.unwrap();
        svc.toggle_visited(&others, Some(&other), "27").await.unwrap();
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        svc.toggle_visited(&sets, Some(&me), "27").await.unwrap();
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        svc.toggle_visited(&sets, Some(&me), "27").await.unwrap();
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        assert_eq!(sets.shade("27", MapMode::All), RegionShade::VisitedBySomeone);
        assert_eq!(sets.shade("27", MapMode::Mine), RegionShade::VisitedBySomeone);
    }

    #[tokio::test]
    async fn test_visits_require_identity_and_known_region() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let sets = VisitedSets::default();
        assert!(svc.toggle_visited(&sets, None, "13").await.is_err());
        let me = AuthorId::parse("me").unwrap();
        assert!(matches!(
            svc.toggle_visited(&sets, Some(&me), "99").await,
            Err(DomainError::NotFound(_))
        ));
        assert!(backend.visits().is_empty());
    }

    #[tokio::test]
    async fn test_clear_my_visits() {
        let backend = MemoryBackend::new();
        let svc = service(&backend);
        let me = AuthorId::parse("me").unwrap();
        for code in ["01", "13", "47"] {
            let sets = svc.load_visits(Some(&me)).await.unwrap();
            svc.toggle_visited(&sets, Some(&me), code).await.unwrap();
        }
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        assert_eq!(svc.clear_my_visits(&sets, Some(&me)).await.unwrap(), 3);
        let sets = svc.load_visits(Some(&me)).await.unwrap();
        assert!(sets.mine.is_empty() && sets.anyone.is_empty());
        assert_eq!(backend.visits().len(), 3);
    }
}
