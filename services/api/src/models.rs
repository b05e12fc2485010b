//! Request and response bodies for the query API
//!
//! Numeric and timestamp query parameters are carried as raw strings and
//! parsed by the handlers, so a malformed value surfaces as an internal
//! error rather than an extractor rejection.

use crate::error::AppError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::alert::SecurityAlert;
use types::compliance::ComplianceResult;
use types::message::FixMessage;
use types::session::SessionSummary;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesQuery {
    pub session_id: Option<String>,
    pub msg_type: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertsQuery {
    pub severity: Option<String>,
    pub start_time: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplianceQuery {
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<FixMessage>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionSummary>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<SecurityAlert>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceResponse {
    /// Percentage of compliant checks; 100.0 when nothing matched.
    pub compliance_rate: f64,
    pub total_checks: usize,
    pub compliant_checks: usize,
    pub violations: usize,
    pub results: Vec<ComplianceResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_messages: usize,
    pub active_sessions: usize,
    pub total_alerts: usize,
    pub critical_alerts: usize,
    /// Occurrences per MsgType code; values sum to `total_messages`.
    pub message_type_distribution: BTreeMap<String, usize>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

/// Parse an optional numeric query parameter, falling back to `default`.
pub fn parse_numeric(raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid numeric parameter {:?}: {}", s, e).into()),
    }
}

/// Parse a timestamp query parameter.
///
/// Accepts RFC 3339, or a timezone-less `YYYY-MM-DDTHH:MM:SS[.f]` value
/// interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| anyhow::anyhow!("invalid timestamp {:?}: {}", raw, e).into())
}
