//! Realtime Channel Messages
//!
//! Phoenix-channel frames for subscribing to row changes of one board.
//! Every change notice means "reload"; payloads are not merged.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::BoardId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoenixMessage {
    pub topic: String,
    pub event: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// What an inbound frame means for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// A row of the subscribed table changed
    Change,
    /// Reply to a join or heartbeat
    Reply { ok: bool },
    /// Server closed or errored the channel
    Closed,
    Other,
}

impl Inbound {
    /// The channel is gone or was refused and has to be joined again
    pub fn needs_rejoin(&self) -> bool {
        matches!(self, Inbound::Closed | Inbound::Reply { ok: false })
    }
}

/// Delays before successive rejoin attempts; the last one repeats
pub const REJOIN_DELAYS_MS: [u32; 4] = [1_000, 2_000, 5_000, 10_000];

/// Backoff for the `attempt`-th rejoin (0-based)
pub fn rejoin_delay_ms(attempt: u32) -> u32 {
    let last = REJOIN_DELAYS_MS.len() - 1;
    REJOIN_DELAYS_MS[(attempt as usize).min(last)]
}

pub fn channel_topic(board: &BoardId) -> String {
    format!("realtime:board:{}", board.as_str())
}

/// Join frame subscribing to every change of `table` rows on this board
pub fn join_message(board: &BoardId, table: &str, access_token: &str, reference: u64) -> PhoenixMessage {
    PhoenixMessage {
        topic: channel_topic(board),
        event: "phx_join".to_string(),
        payload: json!({
            "config": {
                "broadcast": { "self": false },
                "presence": { "key": "" },
                "postgres_changes": [{
                    "event": "*",
                    "schema": "public",
                    "table": table,
                    "filter": format!("board_id=eq.{}", board.as_str()),
                }],
            },
            "access_token": access_token,
        }),
        reference: Some(reference.to_string()),
    }
}

pub fn heartbeat_message(reference: u64) -> PhoenixMessage {
    PhoenixMessage {
        topic: "phoenix".to_string(),
        event: "heartbeat".to_string(),
        payload: json!({}),
        reference: Some(reference.to_string()),
    }
}

pub fn leave_message(board: &BoardId, reference: u64) -> PhoenixMessage {
    PhoenixMessage {
        topic: channel_topic(board),
        event: "phx_leave".to_string(),
        payload: json!({}),
        reference: Some(reference.to_string()),
    }
}

/// Classify a text frame; unparseable frames are `Other`
pub fn classify(frame: &str) -> Inbound {
    let Ok(msg) = serde_json::from_str::<PhoenixMessage>(frame) else {
        return Inbound::Other;
    };
    match msg.event.as_str() {
        "postgres_changes" => Inbound::Change,
        "phx_reply" => Inbound::Reply {
            ok: msg.payload.get("status").and_then(Value::as_str) == Some("ok"),
        },
        "phx_close" | "phx_error" => Inbound::Closed,
        _ => Inbound::Other,
    }
}
