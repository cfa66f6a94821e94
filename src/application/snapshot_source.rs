// Source trait for dashboard snapshots consumed by the sync client
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The backend could not be reached at all.
    #[error("cannot reach dashboard backend: {0}")]
    Connectivity(String),
    /// The backend answered but reported a failure.
    #[error("{0}")]
    Upstream(String),
}

/// The `data` object of a dashboard response, kept untyped so that missing
/// or mistyped fields degrade per facet instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotPayload {
    pub data: Map<String, Value>,
    pub last_updated: Option<String>,
}

impl SnapshotPayload {
    pub fn new(data: Map<String, Value>, last_updated: Option<String>) -> Self {
        Self { data, last_updated }
    }

    /// Field by key, treating an explicit `null` as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }
}

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<SnapshotPayload, SyncError>;
}
