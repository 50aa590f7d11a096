//! Client Configuration
//!
//! Backend endpoint, board limits and local storage keys. The endpoint and
//! publishable key are checked in; `WISHBOARD_SUPABASE_URL` and
//! `WISHBOARD_SUPABASE_KEY` override them at compile time.

const DEFAULT_URL: &str = "https://owoevjklzwaqqqjcgfhj.supabase.co";
const DEFAULT_ANON_KEY: &str = "sb_publishable_nwQq6MkYG54IMh9wZbortg_SVYtxxHl";

/// Gateway endpoint and publishable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("WISHBOARD_SUPABASE_URL").unwrap_or(DEFAULT_URL),
            option_env!("WISHBOARD_SUPABASE_KEY").unwrap_or(DEFAULT_ANON_KEY),
        )
    }

    /// REST endpoint for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Realtime websocket endpoint
    pub fn realtime_url(&self) -> String {
        let base = if let Some(host) = self.url.strip_prefix("https://") {
            format!("wss://{host}")
        } else if let Some(host) = self.url.strip_prefix("http://") {
            format!("ws://{host}")
        } else {
            self.url.clone()
        };
        format!("{base}/realtime/v1/websocket?apikey={}&vsn=1.0.0", self.anon_key)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Board limits and names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Soft cap on wishes per (board, author)
    pub max_items: usize,
    /// Comment length limit in characters
    pub comment_limit: usize,
    pub board_id_len: usize,
    pub heartbeat_secs: u32,
    pub map_svg_url: String,
    pub wishes_table: String,
    pub visits_table: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_items: 100,
            comment_limit: 100,
            board_id_len: 10,
            heartbeat_secs: 30,
            map_svg_url: "japan.svg".to_string(),
            wishes_table: "wishes".to_string(),
            visits_table: "visited_prefectures".to_string(),
        }
    }
}

/// Local storage slots
pub struct StorageKeys;

impl StorageKeys {
    pub const AUTHOR_ID: &'static str = "author-2026";
    pub const DISPLAY_NAME: &'static str = "display-name-2026";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let cfg = BackendConfig::new("https://demo.supabase.co/", "key");
        assert_eq!(cfg.rest_url("wishes"), "https://demo.supabase.co/rest/v1/wishes");
        assert_eq!(
            cfg.realtime_url(),
            "wss://demo.supabase.co/realtime/v1/websocket?apikey=key&vsn=1.0.0"
        );
    }

    #[test]
    fn test_board_defaults() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.max_items, 100);
        assert_eq!(cfg.comment_limit, 100);
    }
}
