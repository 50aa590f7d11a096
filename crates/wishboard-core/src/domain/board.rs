//! Board Identifier
//!
//! Any string is a valid board id. When the page has none, one is generated
//! and the caller rewrites the URL so the board can be shared.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Name of the query parameter carrying the board id
pub const BOARD_PARAM: &str = "board";

const SLUG_MAX_LEN: usize = 32;
const SLUG_PLACEHOLDER: &str = "board";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` characters of a UUID with its dashes removed
    pub fn from_uuid(uuid: &str, len: usize) -> Self {
        Self(uuid.chars().filter(|c| *c != '-').take(len).collect())
    }

    /// Hex id drawn from a non-cryptographic source yielding values in `[0, 1)`
    pub fn from_random(mut next: impl FnMut() -> f64, len: usize) -> Self {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let id = (0..len)
            .map(|_| {
                let n = (next().clamp(0.0, 0.999_999) * 16.0) as usize;
                HEX[n.min(15)] as char
            })
            .collect();
        Self(id)
    }

    /// Query string that points at this board, e.g. `?board=abc`
    pub fn to_query(&self) -> String {
        format!("?{}={}", BOARD_PARAM, utf8_percent_encode(&self.0, NON_ALPHANUMERIC))
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of reading the board id from the page query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResolution {
    pub id: BoardId,
    /// Set when the id was generated and the URL must be rewritten
    pub rewrite: bool,
}

/// Read `board` from a query string (leading `?` optional).
///
/// A missing or empty parameter falls back to `generate`.
pub fn resolve_board_id(query: &str, generate: impl FnOnce() -> BoardId) -> BoardResolution {
    match query_param(query, BOARD_PARAM) {
        Some(id) if !id.is_empty() => BoardResolution { id: BoardId(id), rewrite: false },
        _ => BoardResolution { id: generate(), rewrite: true },
    }
}

/// First value of `key` in a URL query, percent-decoded
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k) == key).then(|| decode_component(v))
        })
        .next()
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " ")).decode_utf8_lossy().into_owned()
}

/// Board slug derived from a display name.
///
/// Everyone entering the same name lands on the same board.
pub fn board_slug(display_name: &str) -> BoardId {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in display_name.trim().chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    let slug: String = slug.chars().take(SLUG_MAX_LEN).collect();
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        BoardId::new(SLUG_PLACEHOLDER)
    } else {
        BoardId::new(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_param_is_used_verbatim() {
        let r = resolve_board_id("?board=family%20trip&x=1", || panic!("must not generate"));
        assert_eq!(r.id.as_str(), "family trip");
        assert!(!r.rewrite);
    }

    #[test]
    fn test_resolution_is_idempotent_after_rewrite() {
        let first = resolve_board_id("", || BoardId::from_uuid("0f8e2c1a-77aa-4b1c-9d2e-aa00bb11cc22", 10));
        assert!(first.rewrite);
        assert_eq!(first.id.as_str(), "0f8e2c1a77");

        let rewritten = first.id.to_query();
        let second = resolve_board_id(&rewritten, || panic!("must not generate"));
        let third = resolve_board_id(&rewritten, || panic!("must not generate"));
        assert_eq!(second.id, first.id);
        assert_eq!(third.id, first.id);
        assert!(!second.rewrite && !third.rewrite);
    }

    #[test]
    fn test_empty_param_generates() {
        let r = resolve_board_id("?board=", || BoardId::new("gen"));
        assert_eq!(r, BoardResolution { id: BoardId::new("gen"), rewrite: true });
    }

    #[test]
    fn test_random_fallback_is_hex_of_requested_length() {
        let mut seq = [0.0, 0.5, 0.999, 0.0625].into_iter().cycle();
        let id = BoardId::from_random(|| seq.next().unwrap_or(0.0), 10);
        assert_eq!(id.as_str().len(), 10);
        assert!(id.as_str().starts_with("08f1"));
    }

    #[test]
    fn test_board_slug() {
        assert_eq!(board_slug("  Ami & Kai!! 2026 ").as_str(), "ami-kai-2026");
        assert_eq!(board_slug("---").as_str(), "board");
        assert_eq!(board_slug("").as_str(), "board");
        assert_eq!(board_slug(&"x".repeat(40)).as_str().len(), 32);
        assert_eq!(board_slug("AMI").as_str(), board_slug("ami").as_str());
        assert_eq!(board_slug("あみ").as_str(), "board");
        assert_eq!(board_slug("あみ Ami 2").as_str(), "ami-2");
    }
}
