use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;

/// Reachability check against the document store's health endpoint.
#[derive(Clone)]
pub struct HttpConnectivityProbe {
    http: reqwest::Client,
    url: String,
}

impl HttpConnectivityProbe {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl ConnectivityProbe for HttpConnectivityProbe {
    async fn check(&self) -> bool {
        let result = self
            .http
            .get(&self.url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Connectivity probe failed: {}", e);
                false
            }
        }
    }
}
