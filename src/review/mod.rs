//! Year-in-review report generation.
//!
//! Two steps, both pure: [`ReviewStats::from_posts`] reduces the posts to a
//! handful of numbers, and [`render_story`] pours those numbers into the
//! fixed narrative template.

mod render;

use chrono::Datelike;
use serde::Serialize;

use crate::posts::PostRecord;

pub use self::render::{group_thousands, render_story};

/// Year used when there are no posts to take it from.
pub const DEFAULT_REVIEW_YEAR: i32 = 2024;

/// Aggregate engagement figures the template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewStats {
    pub post_count: usize,
    /// Sum of likes and comments across all posts.
    pub total_engagement: u64,
    /// Mean likes per post, rounded half up. Zero with no posts.
    pub average_likes: u64,
    /// Highest single-post like count.
    pub top_likes: Option<u64>,
    /// Second-highest single-post like count.
    pub runner_up_likes: Option<u64>,
    /// Year of the most recent post.
    pub review_year: i32,
}

impl ReviewStats {
    pub fn from_posts(posts: &[PostRecord]) -> Self {
        let total_engagement = posts
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.engagement.total()));
        let total_likes: u128 = posts.iter().map(|p| u128::from(p.engagement.likes)).sum();

        let mut likes: Vec<u64> = posts.iter().map(|p| p.engagement.likes).collect();
        likes.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            post_count: posts.len(),
            total_engagement,
            average_likes: round_half_up(total_likes, posts.len() as u128),
            top_likes: likes.first().copied(),
            runner_up_likes: likes.get(1).copied(),
            review_year: posts
                .iter()
                .map(|p| p.date)
                .max()
                .map_or(DEFAULT_REVIEW_YEAR, |d| d.year()),
        }
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties upward.
/// Returns 0 for a zero denominator.
fn round_half_up(numerator: u128, denominator: u128) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

/// Compute the statistics and render the story in one go.
pub fn generate_story(name: &str, posts: &[PostRecord]) -> String {
    render_story(name, &ReviewStats::from_posts(posts))
}
