//! Read-only access to the message collection.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use super::message::AffectionMessage;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Content store returned status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse collection: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected collection body: {0}")]
    Shape(String),
    #[error("Content store unavailable: {0}")]
    Unavailable(String),
}

/// Parse a collection payload: either `{"items": [...]}` or a bare array.
///
/// The shape is checked first so a bad record reports its own serde error
/// rather than a generic mismatch.
pub fn parse_collection(body: &str) -> Result<Vec<AffectionMessage>, ContentError> {
    let items = match serde_json::from_str::<Value>(body)? {
        Value::Object(mut map) => map
            .remove("items")
            .ok_or_else(|| ContentError::Shape("object without \"items\"".to_string()))?,
        items @ Value::Array(_) => items,
        other => {
            return Err(ContentError::Shape(format!(
                "expected object or array, got {}",
                json_kind(&other)
            )))
        }
    };
    Ok(serde_json::from_value(items)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A source of affection messages. Implementations return records in the
/// order the store hands them out; ordering is applied by the fetcher.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch every record of `collection` in one call
    async fn fetch_all(&self, collection: &str) -> Result<Vec<AffectionMessage>, ContentError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Content store reachable over HTTP.
///
/// Issues `GET {base_url}/collections/{collection}/items`.
pub struct HttpContentStore {
    client: Client,
    base_url: String,
}

impl HttpContentStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ContentError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn items_url(&self, collection: &str) -> String {
        format!("{}/collections/{}/items", self.base_url, collection)
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<AffectionMessage>, ContentError> {
        let url = self.items_url(collection);
        tracing::debug!(url = %url, "Fetching collection");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        parse_collection(&body)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

/// Content store backed by a local JSON file in the same shape the HTTP
/// store returns.
pub struct FileContentStore {
    path: PathBuf,
}

impl FileContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentStore for FileContentStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<AffectionMessage>, ContentError> {
        tracing::debug!(path = %self.path.display(), collection, "Reading collection file");
        let body = tokio::fs::read_to_string(&self.path).await?;
        parse_collection(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store with canned records or a canned failure.
#[derive(Debug, Clone)]
pub struct StaticContentStore {
    result: Result<Vec<AffectionMessage>, String>,
    latency: Option<Duration>,
}

impl StaticContentStore {
    pub fn with_messages(messages: Vec<AffectionMessage>) -> Self {
        Self {
            result: Ok(messages),
            latency: None,
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            latency: None,
        }
    }

    /// Delay every fetch, to keep the feed in its loading state for a while
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn fetch_all(&self, _collection: &str) -> Result<Vec<AffectionMessage>, ContentError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.result.clone().map_err(ContentError::Unavailable)
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
