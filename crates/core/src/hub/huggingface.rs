use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::{SnapshotFetcher, SnapshotInfo};
use crate::config::HubConfig;

const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

pub struct HuggingFaceHub {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct RepoInfo {
    pub id: String,
    #[serde(default)]
    pub siblings: Vec<RepoFile>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct RepoFile {
    pub rfilename: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl HuggingFaceHub {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, None)
    }

    pub fn with_endpoint(endpoint: &str, token: Option<&str>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("weightfetch/0.1.0")
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    pub fn from_config(hub: &HubConfig) -> Self {
        Self::with_endpoint(&hub.endpoint, hub.token.as_deref())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn repo_info_url(&self, repo_id: &str) -> String {
        format!("{}/api/models/{}", self.endpoint, repo_id)
    }

    fn file_url(&self, repo_id: &str, filename: &str) -> String {
        format!("{}/{}/resolve/main/{}", self.endpoint, repo_id, filename)
    }

    pub async fn get_repo_info(&self, repo_id: &str) -> Result<RepoInfo> {
        let url = self.repo_info_url(repo_id);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to fetch repository info")?;

        if !response.status().is_success() {
            anyhow::bail!("Repository '{}' not found on HuggingFace", repo_id);
        }

        let info: RepoInfo = response.json().await?;
        Ok(info)
    }

    async fn download_file(&self, repo_id: &str, filename: &str, dest_dir: &Path) -> Result<u64> {
        let url = self.file_url(repo_id, filename);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .context("Failed to start download")?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to download {}: {}", filename, response.status());
        }

        let total_size = response.content_length().unwrap_or(0);

        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                .progress_chars("#>-"),
        );
        pb.set_message(filename.to_string());

        // Repository trees nest; mirror the layout locally
        let dest_path = dest_dir.join(filename);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&dest_path)?;
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("Error downloading chunk")?;
            file.write_all(&chunk)?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        pb.finish_with_message(format!("Downloaded {}", filename));
        Ok(downloaded)
    }
}

impl Default for HuggingFaceHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotFetcher for HuggingFaceHub {
    async fn snapshot(&self, repo_id: &str, local_dir: &Path) -> Result<SnapshotInfo> {
        let repo_info = self.get_repo_info(repo_id).await?;

        if repo_info.siblings.is_empty() {
            anyhow::bail!("Repository '{}' lists no files", repo_id);
        }

        fs::create_dir_all(local_dir)
            .with_context(|| format!("Failed to create {}", local_dir.display()))?;

        tracing::info!(
            "Downloading {} file(s) from {} into {}",
            repo_info.siblings.len(),
            repo_id,
            local_dir.display()
        );

        let mut files = Vec::with_capacity(repo_info.siblings.len());
        let mut total_size = 0u64;
        for sibling in &repo_info.siblings {
            total_size += self
                .download_file(repo_id, &sibling.rfilename, local_dir)
                .await?;
            files.push(sibling.rfilename.clone());
        }

        Ok(SnapshotInfo {
            repo_id: repo_id.to_string(),
            path: local_dir.to_path_buf(),
            files,
            size_bytes: total_size,
            downloaded_at: chrono::Utc::now(),
        })
    }
}
