use super::{FetchError, IconSource};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct HttpIconSource {
    http_client: reqwest::Client,
}

impl HttpIconSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            http_client: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl IconSource for HttpIconSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::info!(%url, "downloading icon");

        let resp = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        let bytes = resp.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(%url, bytes = bytes.len(), "icon response received");
        Ok(bytes.to_vec())
    }
}
