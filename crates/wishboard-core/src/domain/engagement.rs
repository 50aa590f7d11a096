//! Engagement Fields
//!
//! Participants, likes and comments live as serialized JSON text inside the
//! wish row. Every operation here is read-modify-write against the cached
//! copy of the wish it is given and yields the targeted `WishPatch`.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::identity::AuthorId;
use super::wish::{Wish, WishPatch};

/// A single comment entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Comment {
    /// Timestamp rendered as local `MM/DD HH:MM`, raw text if unparseable
    pub fn display_time(&self) -> String {
        format_timestamp(&self.timestamp, &Local)
    }
}

/// Decode an encoded list column; malformed or missing text is an empty list
pub fn decode_list<T: DeserializeOwned>(raw: Option<&str>) -> Vec<T> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(text) => serde_json::from_str(text).unwrap_or_else(|e| {
            log::warn!("[engagement] dropping malformed sub-field: {}", e);
            Vec::new()
        }),
    }
}

pub fn encode_list<T: Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a membership list, keeping first occurrences only
fn decode_set(raw: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in decode_list::<String>(raw) {
        if !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

impl Wish {
    pub fn participant_names(&self) -> Vec<String> {
        decode_set(self.participants.as_deref())
    }

    pub fn liked_by(&self) -> Vec<String> {
        decode_set(self.likes_users.as_deref())
    }

    pub fn comment_list(&self) -> Vec<Comment> {
        decode_list(self.comments.as_deref())
    }

    pub fn is_liked_by(&self, actor: &AuthorId) -> bool {
        self.liked_by().iter().any(|u| u == actor.as_str())
    }
}

/// Append `name` to the participants unless already present.
///
/// Returns `None` when there is nothing to write.
pub fn join(wish: &Wish, name: &str) -> Result<Option<WishPatch>, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let mut names = wish.participant_names();
    if names.iter().any(|n| n == name) {
        return Ok(None);
    }
    names.push(name.to_string());
    Ok(Some(WishPatch {
        participants: Some(encode_list(&names)),
        ..Default::default()
    }))
}

/// Like or unlike for `actor`, keeping the counter in step with the set.
///
/// Unliking floors the counter at zero.
pub fn toggle_like(wish: &Wish, actor: &AuthorId) -> WishPatch {
    let mut users = wish.liked_by();
    let likes = if users.iter().any(|u| u == actor.as_str()) {
        users.retain(|u| u != actor.as_str());
        wish.likes.saturating_sub(1)
    } else {
        users.push(actor.as_str().to_string());
        wish.likes.saturating_add(1)
    };
    WishPatch {
        likes: Some(likes),
        likes_users: Some(encode_list(&users)),
        ..Default::default()
    }
}

/// Append a comment; text is trimmed and capped at `limit` characters
pub fn comment(
    wish: &Wish,
    text: &str,
    author: &str,
    at: DateTime<Utc>,
    limit: usize,
) -> Result<WishPatch, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    if text.chars().count() > limit {
        return Err(ValidationError::CommentTooLong { limit });
    }
    let mut comments = wish.comment_list();
    comments.push(Comment {
        text: text.to_string(),
        author: author.trim().to_string(),
        timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    Ok(WishPatch {
        comments: Some(encode_list(&comments)),
        ..Default::default()
    })
}

pub fn format_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.with_timezone(tz).format("%m/%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
