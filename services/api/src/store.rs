//! In-memory record store
//!
//! Owns the three record collections and implements every scan the API
//! exposes. There is no persistence: the store is built once at startup
//! (from fixtures) and mutated only by message creation.

use crate::models::{ComplianceResponse, StatsResponse};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap, HashSet};
use types::alert::{SecurityAlert, Severity};
use types::compliance::ComplianceResult;
use types::message::{FixMessage, NewFixMessage};
use types::session::SessionSummary;

/// Filter criteria for message queries.
///
/// String filters are exact matches; time bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub session_id: Option<String>,
    pub msg_type: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl MessageFilter {
    fn matches(&self, message: &FixMessage) -> bool {
        if let Some(session_id) = &self.session_id {
            if message.session_id.as_deref() != Some(session_id.as_str()) {
                return false;
            }
        }
        if let Some(msg_type) = &self.msg_type {
            if message.msg_type.as_deref() != Some(msg_type.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.start_time {
            if message.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end_time {
            if message.timestamp > end {
                return false;
            }
        }
        true
    }
}

/// The in-memory collections, in insertion order.
pub struct Store {
    messages: Vec<FixMessage>,
    alerts: Vec<SecurityAlert>,
    compliance: Vec<ComplianceResult>,
}

impl Store {
    pub fn new(
        messages: Vec<FixMessage>,
        alerts: Vec<SecurityAlert>,
        compliance: Vec<ComplianceResult>,
    ) -> Self {
        Self {
            messages,
            alerts,
            compliance,
        }
    }

    /// Filter messages, then slice `[offset, offset + limit)`.
    ///
    /// Returns the page and the filtered total before pagination.
    pub fn query_messages(
        &self,
        filter: &MessageFilter,
        limit: usize,
        offset: usize,
    ) -> (Vec<FixMessage>, usize) {
        let filtered: Vec<&FixMessage> =
            self.messages.iter().filter(|m| filter.matches(m)).collect();
        let total = filtered.len();
        let page = filtered
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        (page, total)
    }

    /// Exact-match lookup by record id.
    pub fn message_by_id(&self, id: &str) -> Option<&FixMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Append a submitted message, assigning the next sequential id and a
    /// fresh timestamp. Returns the stored record.
    pub fn append_message(&mut self, new: NewFixMessage) -> FixMessage {
        let id = format!("msg_{}", self.messages.len() + 1);
        let message = new.into_message(id, Utc::now());
        self.messages.push(message.clone());
        message
    }

    /// Derive session summaries by grouping messages on session id.
    ///
    /// Messages without a session id are skipped; summaries come back in
    /// first-seen order.
    pub fn sessions(&self) -> Vec<SessionSummary> {
        let mut order: Vec<String> = Vec::new();
        let mut by_id: HashMap<String, SessionSummary> = HashMap::new();

        for message in &self.messages {
            let Some(session_id) = &message.session_id else {
                continue;
            };
            let summary = by_id.entry(session_id.clone()).or_insert_with(|| {
                order.push(session_id.clone());
                SessionSummary {
                    session_id: session_id.clone(),
                    sender_comp_id: message.sender_comp_id.clone(),
                    target_comp_id: message.target_comp_id.clone(),
                    message_count: 0,
                    last_message_time: None,
                }
            });
            summary.message_count += 1;
            if summary
                .last_message_time
                .is_none_or(|seen| message.timestamp > seen)
            {
                summary.last_message_time = Some(message.timestamp);
            }
        }

        order
            .into_iter()
            .filter_map(|session_id| by_id.remove(&session_id))
            .collect()
    }

    /// Filter alerts by exact severity name and optional start time, then
    /// take the first `limit` records.
    pub fn query_alerts(
        &self,
        severity: Option<&str>,
        start_time: Option<DateTime<Utc>>,
        limit: usize,
    ) -> (Vec<SecurityAlert>, usize) {
        let filtered: Vec<&SecurityAlert> = self
            .alerts
            .iter()
            .filter(|a| severity.is_none_or(|s| a.severity.as_str() == s))
            .filter(|a| start_time.is_none_or(|t| a.timestamp >= t))
            .collect();
        let total = filtered.len();
        let page = filtered.into_iter().take(limit).cloned().collect();
        (page, total)
    }

    /// Compliance results for an optional session, with aggregate counters.
    ///
    /// The rate is defined as 100.0 when nothing matched.
    pub fn compliance_summary(&self, session_id: Option<&str>) -> ComplianceResponse {
        let results: Vec<ComplianceResult> = self
            .compliance
            .iter()
            .filter(|r| session_id.is_none_or(|s| r.session_id == s))
            .cloned()
            .collect();

        let total_checks = results.len();
        let compliant_checks = results.iter().filter(|r| r.compliant).count();
        let compliance_rate = if total_checks == 0 {
            100.0
        } else {
            compliant_checks as f64 / total_checks as f64 * 100.0
        };

        ComplianceResponse {
            compliance_rate,
            total_checks,
            compliant_checks,
            violations: total_checks - compliant_checks,
            results,
        }
    }

    /// Aggregate counters over all three collections.
    pub fn stats(&self) -> StatsResponse {
        let active_sessions = self
            .messages
            .iter()
            .filter_map(|m| m.session_id.as_deref())
            .collect::<HashSet<_>>()
            .len();

        let critical_alerts = self
            .alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical)
            .count();

        let mut message_type_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for message in &self.messages {
            let key = message
                .msg_type
                .clone()
                .unwrap_or_else(|| "UNKNOWN".to_string());
            *message_type_distribution.entry(key).or_insert(0) += 1;
        }

        StatsResponse {
            total_messages: self.messages.len(),
            active_sessions,
            total_alerts: self.alerts.len(),
            critical_alerts,
            message_type_distribution,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    fn message(id: &str, session_id: Option<&str>, msg_type: Option<&str>, ts: i64) -> FixMessage {
        let new = NewFixMessage {
            session_id: session_id.map(String::from),
            msg_type: msg_type.map(String::from),
            ..NewFixMessage::default()
        };
        new.into_message(
            id.to_string(),
            Utc.timestamp_opt(1_700_000_000 + ts, 0).unwrap(),
        )
    }

    #[test]
    fn session_filter_returns_only_exact_matches() {
        let store = fixtures::sample_store();
        let filter = MessageFilter {
            session_id: Some("SESSION-001".to_string()),
            ..MessageFilter::default()
        };
        let (page, total) = store.query_messages(&filter, 100, 0);
        assert_eq!(total, 4);
        assert!(
            page.iter()
                .all(|m| m.session_id.as_deref() == Some("SESSION-001"))
        );
    }

    #[test]
    fn combined_filters_intersect() {
        let store = fixtures::sample_store();
        let filter = MessageFilter {
            session_id: Some("SESSION-001".to_string()),
            msg_type: Some("D".to_string()),
            ..MessageFilter::default()
        };
        let (page, total) = store.query_messages(&filter, 100, 0);
        assert_eq!(total, 3);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn unmatched_filter_is_empty_not_an_error() {
        let store = fixtures::sample_store();
        let filter = MessageFilter {
            session_id: Some("SESSION-999".to_string()),
            ..MessageFilter::default()
        };
        let (page, total) = store.query_messages(&filter, 100, 0);
        assert_eq!(total, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn pagination_slices_after_filtering() {
        let store = fixtures::sample_store();
        let (page, total) = store.query_messages(&MessageFilter::default(), 3, 0);
        assert_eq!(total, 8);
        assert_eq!(
            page.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["msg_1", "msg_2", "msg_3"]
        );

        let (tail, _) = store.query_messages(&MessageFilter::default(), 100, 6);
        assert_eq!(
            tail.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["msg_7", "msg_8"]
        );

        let (past_end, total) = store.query_messages(&MessageFilter::default(), 10, 50);
        assert_eq!(total, 8);
        assert!(past_end.is_empty());
    }

    #[test]
    fn time_bounds_are_inclusive() {
        let store = Store::new(
            vec![
                message("msg_1", Some("S"), Some("D"), 0),
                message("msg_2", Some("S"), Some("D"), 60),
                message("msg_3", Some("S"), Some("D"), 120),
            ],
            Vec::new(),
            Vec::new(),
        );
        let filter = MessageFilter {
            start_time: Some(Utc.timestamp_opt(1_700_000_060, 0).unwrap()),
            end_time: Some(Utc.timestamp_opt(1_700_000_120, 0).unwrap()),
            ..MessageFilter::default()
        };
        let (page, total) = store.query_messages(&filter, 100, 0);
        assert_eq!(total, 2);
        assert_eq!(page[0].id, "msg_2");
        assert_eq!(page[1].id, "msg_3");
    }

    #[test]
    fn append_assigns_sequential_id_and_is_queryable() {
        let mut store = fixtures::sample_store();
        let new: NewFixMessage = serde_json::from_value(json!({
            "session_id": "SESSION-004",
            "msg_type": "D",
            "custom_field": "kept",
        }))
        .unwrap();

        let stored = store.append_message(new);
        assert_eq!(stored.id, "msg_9");
        assert_eq!(stored.extra["custom_field"], json!("kept"));

        let found = store.message_by_id("msg_9").unwrap();
        assert_eq!(*found, stored);
    }

    #[test]
    fn sessions_group_in_first_seen_order() {
        let store = fixtures::sample_store();
        let sessions = store.sessions();

        assert_eq!(sessions.len(), 3);
        assert_eq!(
            sessions
                .iter()
                .map(|s| s.session_id.as_str())
                .collect::<Vec<_>>(),
            vec!["SESSION-001", "SESSION-002", "SESSION-003"]
        );

        let first = &sessions[0];
        assert_eq!(first.message_count, 4);
        assert_eq!(first.sender_comp_id.as_deref(), Some("CLIENT_A"));
        assert_eq!(first.target_comp_id.as_deref(), Some("BROKER_X"));
        // msg_6 is the latest SESSION-001 message
        let expected = store.message_by_id("msg_6").unwrap().timestamp;
        assert_eq!(first.last_message_time, Some(expected));
    }

    #[test]
    fn sessions_skip_messages_without_session_id() {
        let store = Store::new(
            vec![
                message("msg_1", None, Some("D"), 0),
                message("msg_2", Some("S"), Some("D"), 60),
            ],
            Vec::new(),
            Vec::new(),
        );
        let sessions = store.sessions();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].message_count, 1);
    }

    #[test]
    fn alert_severity_filter_matches_wire_names() {
        let store = fixtures::sample_store();

        let (critical, total) = store.query_alerts(Some("CRITICAL"), None, 100);
        assert_eq!(total, 1);
        assert_eq!(critical[0].severity, Severity::Critical);

        // Unknown severity filters to nothing rather than erroring
        let (none, total) = store.query_alerts(Some("SEVERE"), None, 100);
        assert_eq!(total, 0);
        assert!(none.is_empty());
    }

    #[test]
    fn alert_limit_truncates_after_counting() {
        let store = fixtures::sample_store();
        let (page, total) = store.query_alerts(None, None, 2);
        assert_eq!(total, 4);
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn compliance_rate_over_fixture_sessions() {
        let store = fixtures::sample_store();

        let all = store.compliance_summary(None);
        assert_eq!(all.total_checks, 6);
        assert_eq!(all.compliant_checks, 5);
        assert_eq!(all.violations, 1);
        assert!((all.compliance_rate - 5.0 / 6.0 * 100.0).abs() < f64::EPSILON);

        let session_2 = store.compliance_summary(Some("SESSION-002"));
        assert_eq!(session_2.total_checks, 2);
        assert_eq!(session_2.compliant_checks, 1);
        assert_eq!(session_2.violations, 1);
        assert_eq!(session_2.compliance_rate, 50.0);
    }

    #[test]
    fn compliance_rate_is_100_for_zero_results() {
        let store = fixtures::sample_store();
        let summary = store.compliance_summary(Some("SESSION-999"));
        assert_eq!(summary.total_checks, 0);
        assert_eq!(summary.compliance_rate, 100.0);
        assert!(summary.results.is_empty());
    }

    #[test]
    fn stats_match_the_fixture_set() {
        let store = fixtures::sample_store();
        let stats = store.stats();

        assert_eq!(stats.total_messages, 8);
        assert_eq!(stats.active_sessions, 3);
        assert_eq!(stats.total_alerts, 4);
        assert_eq!(stats.critical_alerts, 1);
        assert_eq!(stats.message_type_distribution.get("D"), Some(&5));
        assert_eq!(stats.message_type_distribution.get("8"), Some(&3));
    }

    #[test]
    fn distribution_counts_untyped_messages_as_unknown() {
        let mut store = fixtures::sample_store();
        store.append_message(NewFixMessage::default());

        let stats = store.stats();
        assert_eq!(stats.message_type_distribution.get("UNKNOWN"), Some(&1));
        let sum: usize = stats.message_type_distribution.values().sum();
        assert_eq!(sum, stats.total_messages);
    }

    proptest! {
        /// The page always equals `filtered[offset..offset + limit]` and
        /// never exceeds the limit.
        #[test]
        fn pagination_matches_slice(limit in 0usize..20, offset in 0usize..20) {
            let store = fixtures::sample_store();
            let (all, _) = store.query_messages(&MessageFilter::default(), usize::MAX, 0);

            let (page, total) = store.query_messages(&MessageFilter::default(), limit, offset);
            prop_assert_eq!(total, all.len());
            prop_assert!(page.len() <= limit);

            let expected: Vec<_> = all.into_iter().skip(offset).take(limit).collect();
            prop_assert_eq!(page, expected);
        }
    }
}
