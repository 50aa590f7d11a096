//! Wish Entity
//!
//! One remote row per wish. Engagement sub-fields (participants, likes_users,
//! comments) stay in their serialized column form here; `engagement` decodes
//! them on demand.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::board::BoardId;
use super::error::ValidationError;

/// Server-assigned wish identifier (numeric or uuid columns both map here)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WishId(String);

impl WishId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WishId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(WishId(s)),
            serde_json::Value::Number(n) => Ok(WishId(n.to_string())),
            other => Err(de::Error::custom(format!("unsupported wish id: {other}"))),
        }
    }
}

/// A wish row as stored remotely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    pub id: WishId,
    pub board_id: String,
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Display name of whoever added the wish; free text, filter facet
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default, deserialize_with = "encoded_text")]
    pub participants: Option<String>,
    #[serde(default, deserialize_with = "non_negative")]
    pub likes: u32,
    #[serde(default, deserialize_with = "encoded_text")]
    pub likes_users: Option<String>,
    #[serde(default, deserialize_with = "encoded_text")]
    pub comments: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Wish {
    /// Author name, empty when the row has none
    pub fn author_name(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    /// Apply a field update the way the remote store would
    pub fn apply(&mut self, patch: &WishPatch) {
        if let Some(done) = patch.done {
            self.done = done;
        }
        if let Some(feedback) = &patch.feedback {
            self.feedback = feedback.clone();
        }
        if let Some(participants) = &patch.participants {
            self.participants = Some(participants.clone());
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        if let Some(likes_users) = &patch.likes_users {
            self.likes_users = Some(likes_users.clone());
        }
        if let Some(comments) = &patch.comments {
            self.comments = Some(comments.clone());
        }
    }
}

/// Insert payload for a new wish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWish {
    pub board_id: String,
    pub title: String,
    pub note: Option<String>,
    pub author: String,
    pub done: bool,
    pub participants: String,
    pub likes: u32,
    pub likes_users: String,
    pub comments: String,
}

impl NewWish {
    /// Validate form input into an insert payload.
    ///
    /// Title and author are trimmed and required; an empty note is dropped.
    pub fn draft(board: &BoardId, title: &str, note: &str, author: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let author = author.trim();
        if author.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let note = note.trim();
        Ok(Self {
            board_id: board.as_str().to_string(),
            title: title.to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
            author: author.to_string(),
            done: false,
            participants: "[]".to_string(),
            likes: 0,
            likes_users: "[]".to_string(),
            comments: "[]".to_string(),
        })
    }
}

/// Targeted field update; unset fields are left out of the request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WishPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// `Some(None)` clears the column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes_users: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl WishPatch {
    /// Mark done; blank feedback is stored as null
    pub fn complete(feedback: &str) -> Self {
        let feedback = feedback.trim();
        Self {
            done: Some(true),
            feedback: Some((!feedback.is_empty()).then(|| feedback.to_string())),
            ..Default::default()
        }
    }

    pub fn undo() -> Self {
        Self {
            done: Some(false),
            feedback: Some(None),
            ..Default::default()
        }
    }
}

// ========================
// Lenient column decoding
// ========================

/// Accept text, null, or a native JSON column for an encoded sub-field
fn encoded_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.unwrap_or(0).clamp(0, u32::MAX as i64) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_decoding_is_lenient() {
        let row = r#"{
            "id": 42,
            "board_id": "abc",
            "title": "Learn piano",
            "note": null,
            "author": "Ami",
            "done": false,
            "feedback": null,
            "participants": ["Kai"],
            "likes": null,
            "likes_users": "[\"u1\"]",
            "comments": null,
            "created_at": "2026-01-02T03:04:05.123456+00:00"
        }"#;
        let wish: Wish = serde_json::from_str(row).unwrap();
        assert_eq!(wish.id.as_str(), "42");
        assert_eq!(wish.participants.as_deref(), Some(r#"["Kai"]"#));
        assert_eq!(wish.likes, 0);
        assert_eq!(wish.likes_users.as_deref(), Some(r#"["u1"]"#));
        assert!(wish.comments.is_none());
        assert!(wish.created_at.is_some());
    }

    #[test]
    fn test_missing_optional_columns() {
        let wish: Wish = serde_json::from_str(r#"{"id":"x","board_id":"b","title":"t"}"#).unwrap();
        assert!(!wish.done);
        assert_eq!(wish.author_name(), "");
        assert_eq!(wish.likes, 0);
    }

    #[test]
    fn test_draft_validation() {
        let board = BoardId::new("b1");
        assert_eq!(NewWish::draft(&board, "  ", "", "Ami"), Err(ValidationError::EmptyTitle));
        assert_eq!(NewWish::draft(&board, "Swim", "", " "), Err(ValidationError::EmptyName));

        let draft = NewWish::draft(&board, " Swim ", "  ", " Ami ").unwrap();
        assert_eq!(draft.title, "Swim");
        assert_eq!(draft.author, "Ami");
        assert!(draft.note.is_none());
        assert!(!draft.done);
        assert_eq!(draft.likes_users, "[]");
    }

    #[test]
    fn test_undo_patch_clears_feedback() {
        let body = serde_json::to_value(WishPatch::undo()).unwrap();
        assert_eq!(body, serde_json::json!({ "done": false, "feedback": null }));

        let body = serde_json::to_value(WishPatch::complete(" great ")).unwrap();
        assert_eq!(body, serde_json::json!({ "done": true, "feedback": "great" }));
    }
}
