//! Demo fixture data
//!
//! Seeds the store with a day of canned traffic: eight FIX messages across
//! three sessions, four security alerts (one per severity), and six
//! compliance check results. All timestamps are offsets from process start
//! minus 24 hours so the data always looks recent.

use crate::store::Store;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde_json::Map;
use types::alert::{SecurityAlert, Severity};
use types::compliance::ComplianceResult;
use types::message::FixMessage;

#[allow(clippy::too_many_arguments)]
fn new_order(
    id: &str,
    session_id: &str,
    sender: &str,
    target: &str,
    timestamp: DateTime<Utc>,
    symbol: &str,
    side: &str,
    order_qty: Decimal,
    price: Decimal,
    cl_ord_id: &str,
    ord_type: &str,
) -> FixMessage {
    FixMessage {
        id: id.to_string(),
        session_id: Some(session_id.to_string()),
        msg_type: Some("D".to_string()),
        sender_comp_id: Some(sender.to_string()),
        target_comp_id: Some(target.to_string()),
        timestamp,
        symbol: Some(symbol.to_string()),
        side: Some(side.to_string()),
        order_qty: Some(order_qty),
        price: Some(price),
        cl_ord_id: Some(cl_ord_id.to_string()),
        ord_type: Some(ord_type.to_string()),
        order_id: None,
        exec_type: None,
        ord_status: None,
        last_qty: None,
        last_px: None,
        extra: Map::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn execution(
    id: &str,
    session_id: &str,
    sender: &str,
    target: &str,
    timestamp: DateTime<Utc>,
    symbol: &str,
    order_id: &str,
    exec_type: &str,
    ord_status: &str,
    last_qty: Decimal,
    last_px: Decimal,
) -> FixMessage {
    FixMessage {
        id: id.to_string(),
        session_id: Some(session_id.to_string()),
        msg_type: Some("8".to_string()),
        sender_comp_id: Some(sender.to_string()),
        target_comp_id: Some(target.to_string()),
        timestamp,
        symbol: Some(symbol.to_string()),
        side: None,
        order_qty: None,
        price: None,
        cl_ord_id: None,
        ord_type: None,
        order_id: Some(order_id.to_string()),
        exec_type: Some(exec_type.to_string()),
        ord_status: Some(ord_status.to_string()),
        last_qty: Some(last_qty),
        last_px: Some(last_px),
        extra: Map::new(),
    }
}

fn alert(
    id: &str,
    severity: Severity,
    alert_type: &str,
    message: &str,
    timestamp: DateTime<Utc>,
    session_id: &str,
) -> SecurityAlert {
    SecurityAlert {
        id: id.to_string(),
        severity,
        alert_type: alert_type.to_string(),
        message: message.to_string(),
        timestamp,
        session_id: session_id.to_string(),
    }
}

fn check(
    id: &str,
    session_id: &str,
    rule: &str,
    compliant: bool,
    checked_at: DateTime<Utc>,
    details: &str,
) -> ComplianceResult {
    ComplianceResult {
        id: id.to_string(),
        session_id: session_id.to_string(),
        rule: rule.to_string(),
        compliant,
        checked_at,
        details: details.to_string(),
    }
}

/// Build the fixture-seeded store.
pub fn sample_store() -> Store {
    let base = Utc::now() - Duration::hours(24);

    let messages = vec![
        new_order(
            "msg_1",
            "SESSION-001",
            "CLIENT_A",
            "BROKER_X",
            base + Duration::minutes(10),
            "AAPL",
            "1",
            Decimal::new(100, 0),
            Decimal::new(17550, 2),
            "ORD-001",
            "2",
        ),
        execution(
            "msg_2",
            "SESSION-001",
            "BROKER_X",
            "CLIENT_A",
            base + Duration::minutes(11),
            "AAPL",
            "EX-001",
            "0",
            "0",
            Decimal::new(100, 0),
            Decimal::new(17550, 2),
        ),
        new_order(
            "msg_3",
            "SESSION-001",
            "CLIENT_A",
            "BROKER_X",
            base + Duration::minutes(30),
            "MSFT",
            "2",
            Decimal::new(250, 0),
            Decimal::new(38025, 2),
            "ORD-002",
            "2",
        ),
        new_order(
            "msg_4",
            "SESSION-002",
            "CLIENT_B",
            "BROKER_X",
            base + Duration::hours(1),
            "GOOGL",
            "1",
            Decimal::new(50, 0),
            Decimal::new(14000, 2),
            "ORD-003",
            "1",
        ),
        execution(
            "msg_5",
            "SESSION-002",
            "BROKER_X",
            "CLIENT_B",
            base + Duration::hours(1) + Duration::minutes(2),
            "GOOGL",
            "EX-002",
            "4",
            "4",
            Decimal::new(50, 0),
            Decimal::new(13995, 2),
        ),
        new_order(
            "msg_6",
            "SESSION-001",
            "CLIENT_A",
            "BROKER_X",
            base + Duration::hours(2),
            "AAPL",
            "1",
            Decimal::new(500, 0),
            Decimal::new(17400, 2),
            "ORD-004",
            "2",
        ),
        new_order(
            "msg_7",
            "SESSION-003",
            "CLIENT_C",
            "BROKER_X",
            base + Duration::hours(3),
            "AMZN",
            "2",
            Decimal::new(75, 0),
            Decimal::new(18520, 2),
            "ORD-005",
            "2",
        ),
        execution(
            "msg_8",
            "SESSION-003",
            "BROKER_X",
            "CLIENT_C",
            base + Duration::hours(3) + Duration::minutes(1),
            "AMZN",
            "EX-003",
            "0",
            "2",
            Decimal::new(75, 0),
            Decimal::new(18520, 2),
        ),
    ];

    let alerts = vec![
        alert(
            "alert_1",
            Severity::High,
            "RATE_LIMIT",
            "Unusual message rate from CLIENT_A (session SESSION-001)",
            base + Duration::minutes(35),
            "SESSION-001",
        ),
        alert(
            "alert_2",
            Severity::Medium,
            "LARGE_ORDER",
            "Order size 500 exceeds typical threshold for symbol AAPL",
            base + Duration::hours(2) + Duration::minutes(1),
            "SESSION-001",
        ),
        alert(
            "alert_3",
            Severity::Critical,
            "INVALID_MSG",
            "Malformed FIX message rejected - checksum mismatch",
            base + Duration::hours(4),
            "SESSION-002",
        ),
        alert(
            "alert_4",
            Severity::Low,
            "SESSION",
            "New session established: SESSION-003",
            base + Duration::hours(2) + Duration::minutes(55),
            "SESSION-003",
        ),
    ];

    let compliance = vec![
        check(
            "comp_1",
            "SESSION-001",
            "MiFID II - Best Execution",
            true,
            base + Duration::minutes(15),
            "Order executed within price tolerance",
        ),
        check(
            "comp_2",
            "SESSION-001",
            "FINRA - Order Marking",
            true,
            base + Duration::minutes(15),
            "Order correctly marked as agency",
        ),
        check(
            "comp_3",
            "SESSION-002",
            "MiFID II - Best Execution",
            true,
            base + Duration::hours(1) + Duration::minutes(5),
            "Execution within spread",
        ),
        check(
            "comp_4",
            "SESSION-002",
            "SEC - Timestamp Accuracy",
            false,
            base + Duration::hours(4) + Duration::minutes(1),
            "Message timestamp outside acceptable drift",
        ),
        check(
            "comp_5",
            "SESSION-003",
            "MiFID II - Best Execution",
            true,
            base + Duration::hours(3) + Duration::minutes(5),
            "Fill at or better than limit",
        ),
        check(
            "comp_6",
            "SESSION-003",
            "FINRA - Order Marking",
            true,
            base + Duration::hours(3) + Duration::minutes(5),
            "Correct side and capacity",
        ),
    ];

    Store::new(messages, alerts, compliance)
}
