pub mod alerts;
pub mod compliance;
pub mod messages;
pub mod meta;
pub mod sessions;
pub mod stats;
