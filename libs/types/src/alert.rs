//! Security alert records and severity levels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Wire-format name of the severity, matching its JSON encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A security alert raised against observed FIX traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityAlert {
    /// Store-assigned identifier (`alert_<n>`).
    pub id: String,
    pub severity: Severity,
    /// Alert type code, e.g. `RATE_LIMIT` or `LARGE_ORDER`.
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Human-readable description.
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Session the alert was raised for.
    pub session_id: String,
}
