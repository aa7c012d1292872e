use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{0}")]
    Unavailable(String),
}

/// Where the application icon comes from. Implementations make exactly one
/// attempt per call.
#[async_trait]
pub trait IconSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

pub mod http;
pub mod mock;
