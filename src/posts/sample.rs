//! Built-in sample posts: one calendar year, newest first.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{PostRecord, PostSource};
use crate::error::SourceError;
use crate::profile::ProfileSummary;

/// (date, content, likes, comments)
const SAMPLE: [((i32, u32, u32), &str, u64, u64); 12] = [
    (
        (2024, 12, 15),
        "Excited to announce that our team has launched a groundbreaking new product! This year has been incredible for innovation and growth. #Innovation #ProductLaunch",
        342,
        28,
    ),
    (
        (2024, 11, 20),
        "Grateful to speak at the Tech Summit 2024! Sharing insights on AI and the future of work with amazing industry leaders. #TechSummit #AI",
        521,
        45,
    ),
    (
        (2024, 10, 8),
        "Our Q3 results are in and they're phenomenal! Thank you to the entire team for their dedication and hard work. We're just getting started! #TeamWork #Growth",
        287,
        19,
    ),
    (
        (2024, 9, 12),
        "Honored to receive the Industry Excellence Award! This recognition belongs to our entire organization. Proud of what we've accomplished together. #Awards #Excellence",
        698,
        82,
    ),
    (
        (2024, 8, 5),
        "Celebrating 5 years with the company! From startup to industry leader - what an incredible journey. Excited for what's next! #Anniversary #CareerMilestone",
        412,
        56,
    ),
    (
        (2024, 7, 18),
        "Just wrapped up an amazing workshop on leadership and innovation. The future is bright when we invest in our people! #Leadership #ProfessionalDevelopment",
        234,
        15,
    ),
    (
        (2024, 6, 22),
        "Thrilled to announce our expansion into new markets! This opens up incredible opportunities for growth and impact. #Expansion #BusinessGrowth",
        445,
        33,
    ),
    (
        (2024, 5, 10),
        "Mentoring the next generation of leaders has been one of the most rewarding experiences. Invest in others - it pays dividends! #Mentorship #GiveBack",
        289,
        21,
    ),
    (
        (2024, 4, 3),
        "Q1 exceeded all expectations! Thank you to our customers, partners, and team members who made this possible. #Results #Success",
        356,
        27,
    ),
    (
        (2024, 3, 14),
        "Excited to partner with industry leaders on our latest initiative! Collaboration is key to driving meaningful change. #Partnership #Innovation",
        423,
        38,
    ),
    (
        (2024, 2, 28),
        "Reflecting on lessons learned and growth achieved. Every challenge is an opportunity to become better. #Growth #Reflection",
        267,
        18,
    ),
    (
        (2024, 1, 15),
        "New year, new goals! Setting ambitious targets for 2024. Let's make it our best year yet! #NewYear #Goals2024",
        512,
        44,
    ),
];

/// The fixed twelve sample posts. Identical on every call.
pub fn sample_posts() -> Vec<PostRecord> {
    SAMPLE
        .iter()
        .filter_map(|&((y, m, d), content, likes, comments)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| PostRecord::new(date, content, likes, comments))
        })
        .collect()
}

/// Post source that ignores the profile and returns [`sample_posts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePostSource;

#[async_trait]
impl PostSource for SamplePostSource {
    fn name(&self) -> &str {
        "sample"
    }

    async fn fetch_posts(&self, profile: &ProfileSummary) -> Result<Vec<PostRecord>, SourceError> {
        tracing::debug!(username = %profile.username, "Serving sample posts");
        Ok(sample_posts())
    }
}
