//! Wire types for the direwolf API
//!
//! These mirror the JSON shapes served by /api/clouds and /api/runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cloud object returned by GET /api/clouds
#[derive(Debug, Clone, Deserialize)]
pub struct Cloud {
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub label: String,
    pub region: String,
    #[serde(default)]
    pub state: String,
}

/// Body for POST /api/runs: `{"cloud":{"id":..},"suite":{"label":..}}`
#[derive(Debug, Serialize)]
pub struct RunRequest {
    pub cloud: CloudRef,
    pub suite: SuiteRef,
}

#[derive(Debug, Serialize)]
pub struct CloudRef {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SuiteRef {
    pub label: String,
}

impl RunRequest {
    pub fn new(cloud_id: &str, suite: &str) -> Self {
        Self {
            cloud: CloudRef {
                id: cloud_id.to_string(),
            },
            suite: SuiteRef {
                label: suite.to_string(),
            },
        }
    }
}

/// Per-state test counts inside a run status
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RunSummary {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub running: u64,
    pub pending: u64,
}

/// Reply from POST /api/runs or GET /api/runs/{id}
///
/// A run is terminal once `ended_at` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct RunStatus {
    pub id: String,
    pub state: String,
    #[serde(default)]
    pub summary: RunSummary,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl RunStatus {
    /// Whether the run has reached a terminal state
    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Wall-clock duration in seconds, when both timestamps are present
    pub fn duration_secs(&self) -> Option<f64> {
        let (start, end) = (self.started_at?, self.ended_at?);
        Some((end - start).num_milliseconds() as f64 / 1000.0)
    }
}

/// Find the cloud matching domain and region exactly
///
/// Linear scan, first match wins; the clouds list is small and fetched fresh
/// per invocation.
pub fn find_cloud<'a>(clouds: &'a [Cloud], domain: &str, region: &str) -> Option<&'a Cloud> {
    clouds
        .iter()
        .find(|cloud| cloud.domain == domain && cloud.region == region)
}
