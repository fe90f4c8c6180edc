//! The review pipeline: normalize, fetch, render.
//!
//! [`ReviewService::review`] is the one entry point the transports call.
//! It owns the error policy: a missing identifier is the caller's fault,
//! anything else is reported as an unexpected failure with no payload.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, SourceError};
use crate::posts::{PostRecord, PostSource};
use crate::profile::ProfileSummary;
use crate::review::generate_story;

/// Everything a successful review returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewBundle {
    pub profile: ProfileSummary,
    pub posts: Vec<PostRecord>,
    pub story: String,
}

pub struct ReviewService {
    source: Arc<dyn PostSource>,
    timeout: Option<Duration>,
}

impl ReviewService {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self {
            source,
            timeout: None,
        }
    }

    /// Bound each post source call. `None` waits as long as it takes.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Produce a review for the raw identifier the caller supplied.
    pub async fn review(&self, raw: Option<&str>) -> Result<ReviewBundle, ReviewError> {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(ReviewError::MissingInput),
        };

        let start = Instant::now();
        let profile = ProfileSummary::from_input(raw);
        tracing::debug!(username = %profile.username, name = %profile.name, "Normalized profile input");

        let posts = self.fetch(&profile).await?;
        let story = generate_story(&profile.name, &posts);

        tracing::info!(
            username = %profile.username,
            source = self.source.name(),
            posts = posts.len(),
            story_len = story.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Review generated"
        );

        Ok(ReviewBundle {
            profile,
            posts,
            story,
        })
    }

    async fn fetch(&self, profile: &ProfileSummary) -> Result<Vec<PostRecord>, SourceError> {
        let fut = self.source.fetch_posts(profile);
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .map_err(|_| SourceError::Timeout {
                    name: self.source.name().to_string(),
                    timeout,
                })?,
            None => fut.await,
        }
    }
}
