//! FIX message records
//!
//! Messages are stored exactly as captured: the fields common to every
//! message are typed, the type-dependent fields (order entry vs. execution
//! report) are optional and omitted from JSON when absent, and anything
//! else a producer sends rides along in an untyped passthrough map.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A captured FIX message as exposed by the query API.
///
/// No cross-field schema is enforced: a `D` (NewOrderSingle) record carries
/// the order fields, an `8` (ExecutionReport) record carries the execution
/// fields, and unknown producers may supply neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixMessage {
    /// Store-assigned identifier (`msg_<n>`).
    pub id: String,
    /// FIX session the message belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// FIX MsgType code (tag 35), e.g. `D` or `8`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<String>,
    /// SenderCompID (tag 49).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_comp_id: Option<String>,
    /// TargetCompID (tag 56).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_comp_id: Option<String>,
    /// Capture timestamp, assigned by the store.
    pub timestamp: DateTime<Utc>,

    // Order entry fields (NewOrderSingle)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Side code (tag 54): `1` = buy, `2` = sell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cl_ord_id: Option<String>,
    /// OrdType code (tag 40): `1` = market, `2` = limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ord_type: Option<String>,

    // Execution report fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ord_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_px: Option<Decimal>,

    /// Unvalidated passthrough fields, merged verbatim into the JSON object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A message as submitted to the create endpoint.
///
/// Identical to [`FixMessage`] minus the server-assigned `id` and
/// `timestamp`. Every field is optional and nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewFixMessage {
    pub session_id: Option<String>,
    pub msg_type: Option<String>,
    pub sender_comp_id: Option<String>,
    pub target_comp_id: Option<String>,
    pub symbol: Option<String>,
    pub side: Option<String>,
    pub order_qty: Option<Decimal>,
    pub price: Option<Decimal>,
    pub cl_ord_id: Option<String>,
    pub ord_type: Option<String>,
    pub order_id: Option<String>,
    pub exec_type: Option<String>,
    pub ord_status: Option<String>,
    pub last_qty: Option<Decimal>,
    pub last_px: Option<Decimal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewFixMessage {
    /// Promote a submitted message to a stored record.
    ///
    /// `id` and `timestamp` always win over client-supplied values; matching
    /// keys in the passthrough map are dropped so the serialized object
    /// never carries duplicates.
    pub fn into_message(mut self, id: String, timestamp: DateTime<Utc>) -> FixMessage {
        self.extra.remove("id");
        self.extra.remove("timestamp");

        FixMessage {
            id,
            session_id: self.session_id,
            msg_type: self.msg_type,
            sender_comp_id: self.sender_comp_id,
            target_comp_id: self.target_comp_id,
            timestamp,
            symbol: self.symbol,
            side: self.side,
            order_qty: self.order_qty,
            price: self.price,
            cl_ord_id: self.cl_ord_id,
            ord_type: self.ord_type,
            order_id: self.order_id,
            exec_type: self.exec_type,
            ord_status: self.ord_status,
            last_qty: self.last_qty,
            last_px: self.last_px,
            extra: self.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_optional_fields_are_omitted_from_json() {
        let new: NewFixMessage = serde_json::from_value(json!({
            "session_id": "SESSION-001",
            "msg_type": "D",
        }))
        .unwrap();
        let msg = new.into_message("msg_1".to_string(), Utc::now());

        let value = serde_json::to_value(&msg).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("session_id"));
        assert!(!obj.contains_key("symbol"));
        assert!(!obj.contains_key("order_id"));
    }

    #[test]
    fn unknown_fields_pass_through_unchanged() {
        let new: NewFixMessage = serde_json::from_value(json!({
            "msg_type": "D",
            "account": "ACC-7",
            "tags": [35, 49],
        }))
        .unwrap();
        assert_eq!(new.extra["account"], json!("ACC-7"));

        let msg = new.into_message("msg_1".to_string(), Utc::now());
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["account"], json!("ACC-7"));
        assert_eq!(value["tags"], json!([35, 49]));
    }

    #[test]
    fn client_supplied_id_and_timestamp_are_discarded() {
        let new: NewFixMessage = serde_json::from_value(json!({
            "id": "spoofed",
            "timestamp": "1999-01-01T00:00:00Z",
            "msg_type": "D",
        }))
        .unwrap();
        let now = Utc::now();
        let msg = new.into_message("msg_9".to_string(), now);

        assert_eq!(msg.id, "msg_9");
        assert_eq!(msg.timestamp, now);
        assert!(msg.extra.is_empty());
    }

    #[test]
    fn decimal_fields_serialize_as_numbers() {
        let new: NewFixMessage = serde_json::from_value(json!({
            "msg_type": "D",
            "order_qty": 100.0,
            "price": 175.50,
        }))
        .unwrap();
        let msg = new.into_message("msg_1".to_string(), Utc::now());

        let value = serde_json::to_value(&msg).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["price"].as_f64().unwrap(), 175.50);
    }
}
