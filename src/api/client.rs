//! Authenticated HTTP client for the direwolf API
//!
//! Wraps reqwest with basic auth (api key as username, empty password) and
//! the three endpoints the CLI consumes. No retries: callers treat any
//! failure as fatal.

use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

use super::types::{Cloud, RunRequest, RunStatus};
use crate::common::{Error, Result};

/// Client holding the base URL and credentials for one invocation
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(host: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/api", host.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    fn auth(&self, req: RequestBuilder) -> RequestBuilder {
        req.basic_auth(&self.api_key, Some(""))
    }

    /// GET /api/clouds
    pub async fn clouds(&self) -> Result<Vec<Cloud>> {
        let url = format!("{}/clouds", self.base_url);
        debug!(%url, "fetching clouds");

        let response = self.auth(self.http.get(&url)).send().await?;
        if response.status() != StatusCode::OK {
            return Err(Error::unexpected_status(
                "GET",
                "/api/clouds",
                response.status().as_u16(),
            ));
        }

        response.json().await.map_err(|e| Error::Decode {
            what: "clouds",
            source: e,
        })
    }

    /// POST /api/runs with `{"cloud":{"id":..},"suite":{"label":..}}`
    pub async fn dispatch_run(&self, cloud_id: &str, suite: &str) -> Result<RunStatus> {
        let url = format!("{}/runs", self.base_url);
        debug!(%url, cloud_id, suite, "dispatching run");

        let response = self
            .auth(self.http.post(&url))
            .json(&RunRequest::new(cloud_id, suite))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {}
            status => {
                return Err(Error::unexpected_status(
                    "POST",
                    "/api/runs",
                    status.as_u16(),
                ))
            }
        }

        response.json().await.map_err(|e| Error::Decode {
            what: "runs",
            source: e,
        })
    }

    /// GET /api/runs/{id}
    pub async fn run_status(&self, id: &str) -> Result<RunStatus> {
        let url = format!("{}/runs/{}", self.base_url, id);
        debug!(%url, "polling run status");

        let response = self.auth(self.http.get(&url)).send().await?;
        if response.status() != StatusCode::OK {
            return Err(Error::unexpected_status(
                "GET",
                &format!("/api/runs/{id}"),
                response.status().as_u16(),
            ));
        }

        response.json().await.map_err(|e| Error::Decode {
            what: "runs",
            source: e,
        })
    }
}
