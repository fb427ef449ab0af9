use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{error::TransportError, model::RawResponse};

/// One blocking-style GET: wait for the whole response, hand back status and body.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<RawResponse, TransportError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<RawResponse, TransportError> {
        // reqwest errors carry the URL, and the URL carries the API key.
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.without_url()))?;

        let status = res.status().as_u16();
        tracing::debug!(status, "weather service responded");

        let body = res.text().await.map_err(|e| TransportError::Body(e.without_url()))?;

        Ok(RawResponse { status, body: join_lines(&body) })
    }
}

/// Concatenate the body's lines, dropping the line breaks.
fn join_lines(body: &str) -> String {
    body.lines().collect()
}
