//! Domain Errors
//!
//! Validation failures carry the message shown to the user; everything else
//! is logged and the operation is abandoned.

use thiserror::Error;

/// Common result type for board operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Input rejected before any remote call is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("タイトルを入力してください")]
    EmptyTitle,
    #[error("名前を入力してください")]
    EmptyName,
    #[error("コメントを入力してください")]
    EmptyComment,
    #[error("コメントは{limit}文字までです")]
    CommentTooLong { limit: usize },
    #[error("IDは英数字・ハイフン・アンダースコアのみ使えます")]
    MalformedIdentifier,
    #[error("{cap}個までです")]
    CapReached { cap: usize },
    #[error("先にIDを設定してください")]
    MissingIdentity,
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{op} failed: {message}")]
    Remote { op: &'static str, message: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn remote(op: &'static str, message: impl Into<String>) -> Self {
        DomainError::Remote { op, message: message.into() }
    }

    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DomainError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}
