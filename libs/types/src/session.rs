//! Session summaries derived from message traffic
//!
//! Sessions are never stored: they are reconstructed on demand by grouping
//! captured messages on their session identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate view of one FIX session.
///
/// The comp ids are taken from the first message observed for the session;
/// `last_message_time` is the maximum timestamp seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub sender_comp_id: Option<String>,
    pub target_comp_id: Option<String>,
    pub message_count: usize,
    pub last_message_time: Option<DateTime<Utc>>,
}
