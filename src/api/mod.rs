//! Direwolf HTTP API client and wire types

mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{find_cloud, Cloud, RunRequest, RunStatus, RunSummary};
