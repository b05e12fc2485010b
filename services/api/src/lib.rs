//! HTTP Query Service for the FIX security platform
//!
//! Serves read-only JSON endpoints (plus one write endpoint) over three
//! in-memory collections: captured FIX messages, security alerts, and
//! compliance check results. All data is seeded from fixtures at startup;
//! nothing is persisted and everything is lost on restart.

pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod store;

/// Version reported by the root and health endpoints.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
