//! Post records and the sources that supply them.
//!
//! The report never cares where posts come from. A [`PostSource`] is handed
//! a [`ProfileSummary`] and returns an ordered list of [`PostRecord`]s:
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`SamplePostSource`] | Fixed year of sample posts (default) |
//! | [`FilePostSource`]   | JSON array of posts read from disk |

mod file;
mod sample;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::profile::ProfileSummary;

pub use self::file::FilePostSource;
pub use self::sample::{SamplePostSource, sample_posts};

/// Likes and comments on a single post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
}

impl Engagement {
    pub fn total(&self) -> u64 {
        self.likes.saturating_add(self.comments)
    }
}

/// One published post. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub date: NaiveDate,
    pub content: String,
    pub engagement: Engagement,
}

impl PostRecord {
    pub fn new(date: NaiveDate, content: impl Into<String>, likes: u64, comments: u64) -> Self {
        Self {
            date,
            content: content.into(),
            engagement: Engagement { likes, comments },
        }
    }
}

/// Capability: given a profile, produce its posts.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Fetch posts for a profile, in display order.
    async fn fetch_posts(&self, profile: &ProfileSummary) -> Result<Vec<PostRecord>, SourceError>;
}

/// Build the post source selected by configuration.
pub fn create_post_source(config: &SourceConfig) -> Arc<dyn PostSource> {
    match &config.posts_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using file post source");
            Arc::new(FilePostSource::new(path.clone()))
        }
        None => {
            tracing::info!("Using built-in sample post source");
            Arc::new(SamplePostSource)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn post_record_json_shape() {
        let post = PostRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            "Hello",
            10,
            2,
        );
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-03-14",
                "content": "Hello",
                "engagement": {"likes": 10, "comments": 2}
            })
        );
    }

    #[test]
    fn post_record_requires_engagement_fields() {
        let err = serde_json::from_str::<PostRecord>(
            r#"{"date":"2024-03-14","content":"x","engagement":{"likes":1}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn post_record_rejects_negative_counts() {
        let err = serde_json::from_str::<PostRecord>(
            r#"{"date":"2024-03-14","content":"x","engagement":{"likes":-1,"comments":0}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn engagement_total_saturates() {
        let e = Engagement {
            likes: u64::MAX,
            comments: 1,
        };
        assert_eq!(e.total(), u64::MAX);
    }

    #[test]
    fn factory_picks_sample_by_default() {
        let source = create_post_source(&SourceConfig::default());
        assert_eq!(source.name(), "sample");
    }

    #[test]
    fn factory_picks_file_when_configured() {
        let config = SourceConfig {
            posts_file: Some(PathBuf::from("/tmp/does-not-matter.json")),
            timeout: None,
        };
        assert_eq!(create_post_source(&config).name(), "file");
    }
}
