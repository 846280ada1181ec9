//! Event bridge: HTTP polling and snapshot diffing.
//!
//! This module provides:
//! - `ApiClient`: HTTP snapshot fetching on a private Tokio runtime
//! - `Provider`: diffing of full snapshots into added/changed/deleted events
//! - `PollSchedule`: the static and database poll intervals
//! - `EventBridge`: the loop body tying the above to the console

pub mod bridge;
pub mod manager;
pub mod provider;
pub mod schedule;

pub use bridge::EventBridge;
pub use manager::{ApiClient, join_url};
pub use provider::{Provider, ProviderEvent, decode_snapshot};
pub use schedule::{PollSchedule, PollTarget};
