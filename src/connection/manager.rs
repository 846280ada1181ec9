//! HTTP client for the console API.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

use super::provider::decode_snapshot;

/// Fetches entity snapshots over HTTP
pub struct ApiClient {
    /// Tokio runtime for reqwest
    runtime: Runtime,
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let runtime = Runtime::new()?;
        let client = reqwest::Client::builder()
            .user_agent(format!("sqlite-console/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { runtime, client, base_url: base_url.into(), timeout })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Run a future on the client's runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// GET `path` and decode the body as a snapshot (runs in Tokio runtime)
    pub fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        self.runtime.block_on(self.fetch_async(path))
    }

    pub async fn fetch_async<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = match tokio::time::timeout(self.timeout, self.client.get(&url).send()).await
        {
            Ok(response) => response?,
            Err(_) => return Err(Error::Timeout(format!("GET {url}"))),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16(), url));
        }

        let body = response.bytes().await?;
        decode_snapshot(&body)
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() { format!("{base}/") } else { format!("{base}/{path}") }
}
