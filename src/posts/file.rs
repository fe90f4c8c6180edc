//! Posts supplied from a JSON file on disk.

use std::path::PathBuf;

use async_trait::async_trait;

use super::{PostRecord, PostSource};
use crate::error::SourceError;
use crate::profile::ProfileSummary;

/// Reads a JSON array of [`PostRecord`] on every fetch, so edits to the
/// file show up without a restart.
#[derive(Debug, Clone)]
pub struct FilePostSource {
    path: PathBuf,
}

impl FilePostSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PostSource for FilePostSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_posts(&self, profile: &ProfileSummary) -> Result<Vec<PostRecord>, SourceError> {
        let path = self.path.display().to_string();
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let posts: Vec<PostRecord> =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::Parse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            username = %profile.username,
            path = %path,
            count = posts.len(),
            "Loaded posts from file"
        );
        Ok(posts)
    }
}
