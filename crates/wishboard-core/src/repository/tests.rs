//! Repository Integration Tests
//!
//! Tests for the in-memory backend standing in for the hosted store.

#[cfg(test)]
mod tests {
    use crate::domain::{BoardId, NewWish, VisitRecord, WishId, WishPatch};
    use crate::repository::{MemoryBackend, VisitRepository, WishRepository};

    fn draft(board: &str, title: &str, author: &str) -> NewWish {
        NewWish::draft(&BoardId::new(board), title, "", author).expect("valid draft")
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_board() {
        let repo = MemoryBackend::new();
        repo.insert_wish(&draft("a", "one", "Ami")).await.unwrap();
        repo.insert_wish(&draft("b", "two", "Ami")).await.unwrap();

        let rows = repo.list_wishes(&BoardId::new("a")).await.expect("List failed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "one");
        assert!(rows[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_count_by_author() {
        let repo = MemoryBackend::new();
        let board = BoardId::new("a");
        repo.insert_wish(&draft("a", "1", "Ami")).await.unwrap();
        repo.insert_wish(&draft("a", "2", "Ami")).await.unwrap();
        repo.insert_wish(&draft("a", "3", "Kai")).await.unwrap();
        repo.insert_wish(&draft("b", "4", "Ami")).await.unwrap();

        assert_eq!(repo.count_by_author(&board, "Ami").await.unwrap(), 2);
        assert_eq!(repo.count_by_author(&board, "Kai").await.unwrap(), 1);
        assert_eq!(repo.count_by_author(&board, "Nobody").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_a_no_op() {
        let repo = MemoryBackend::new();
        repo.insert_wish(&draft("a", "1", "Ami")).await.unwrap();
        repo.update_wish(&WishId::new("999"), &WishPatch::complete("x")).await.unwrap();
        assert!(repo.wishes().iter().all(|w| !w.done));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryBackend::new();
        repo.insert_wish(&draft("a", "1", "Ami")).await.unwrap();
        let id = repo.wishes()[0].id.clone();
        repo.delete_wish(&id).await.expect("Delete failed");
        assert!(repo.wishes().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_uses_composite_key() {
        let repo = MemoryBackend::new();
        let record = |user: &str, visited| VisitRecord {
            board_id: "a".into(),
            user_id: user.into(),
            pref_code: "13".into(),
            visited,
        };
        repo.upsert_visit(&record("me", true)).await.unwrap();
        repo.upsert_visit(&record("me", false)).await.unwrap();
        repo.upsert_visit(&record("you", true)).await.unwrap();

        let visits = repo.list_visits(&BoardId::new("a")).await.unwrap();
        assert_eq!(visits.len(), 2);
        assert!(!visits.iter().find(|v| v.user_id == "me").unwrap().visited);
    }
}
