use crate::error::Result;
use crate::types::Source;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectPolicy {
    None,
    Follow,
}

/// A single outbound GET, fully determined by the profile identifier
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub redirects: RedirectPolicy,
}

impl FetchRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_encoding: Option<String>,
}

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportEvent {
    Fetched { source: Source, status: u16, bytes: usize },
    RowSkipped { source: Source, row_index: usize },
}

/// Observability collaborator handed to extractors
pub trait EventRecorderPort: Send + Sync {
    fn record(&self, event: ImportEvent);
}
