//! Compliance check result records
//!
//! Results are pre-computed by an upstream rule engine; this crate only
//! carries them. The rule evaluation logic itself is out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single compliance rule check against a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Store-assigned identifier (`comp_<n>`).
    pub id: String,
    pub session_id: String,
    /// Regulatory rule name, e.g. `MiFID II - Best Execution`.
    pub rule: String,
    pub compliant: bool,
    pub checked_at: DateTime<Utc>,
    /// Free-text detail explaining the outcome.
    pub details: String,
}
