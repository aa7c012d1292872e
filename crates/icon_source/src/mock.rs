use super::{FetchError, IconSource};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory source that serves fixed bytes, or fails every call.
#[derive(Default)]
pub struct MockIconSource {
    bytes: Option<Vec<u8>>,
    calls: AtomicUsize,
}

impl MockIconSource {
    pub fn serving(bytes: impl Into<Vec<u8>>) -> Arc<Self> {
        Arc::new(Self {
            bytes: Some(bytes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IconSource for MockIconSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bytes
            .clone()
            .ok_or_else(|| FetchError::Unavailable(format!("mock source refused {url}")))
    }
}
