pub mod huggingface;

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of mirroring a full hub repository onto local disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotInfo {
    pub repo_id: String,
    pub path: PathBuf,
    pub files: Vec<String>,
    pub size_bytes: u64,
    pub downloaded_at: chrono::DateTime<chrono::Utc>,
}

#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    /// Fetch the complete file tree of `repo_id` into `local_dir`.
    async fn snapshot(&self, repo_id: &str, local_dir: &Path) -> Result<SnapshotInfo>;
}

pub use huggingface::HuggingFaceHub;
