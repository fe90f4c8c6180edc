use super::ReviewStats;

/// Render the year-in-review narrative for `name` from precomputed stats.
///
/// Everything except the name, the years and the figures in KEY HIGHLIGHTS
/// and IMPACT & ENGAGEMENT is canned prose.
pub fn render_story(name: &str, stats: &ReviewStats) -> String {
    let story = format!(
        r#"
📊 {name}'s {year} LinkedIn Journey

This year has been nothing short of extraordinary! Here's a look back at an incredible 12 months:

🎯 KEY HIGHLIGHTS

• Published {post_count} impactful posts
• Generated {total_engagement} total engagements
• Averaged {average_likes} likes per post
• Connected with thousands of professionals

🏆 MAJOR MILESTONES

Q1: Started the year strong with ambitious goals and strategic partnerships. Set the foundation for an incredible year of growth.

Q2: Expanded into new markets and invested heavily in mentorship and leadership development. The team's dedication was truly inspiring.

Q3: Celebrated personal and professional milestones, including a prestigious Industry Excellence Award. The recognition reflects our collective efforts.

Q4: Launched groundbreaking products and shared insights at major industry conferences. Ended the year with phenomenal results.

💡 TOP THEMES

Innovation & Product Development - Led several product launches that transformed our market position
Leadership & Growth - Spoke at conferences and mentored emerging leaders
Team Excellence - Celebrated team achievements and fostered a culture of collaboration
Strategic Expansion - Opened new markets and forged powerful partnerships

📈 IMPACT & ENGAGEMENT

The LinkedIn community responded enthusiastically to content about:
• Innovation and AI{runner_up_peak}
• Awards and recognition{top_peak}
• Team achievements and culture
• Industry insights and thought leadership

🎊 LOOKING AHEAD TO {next_year}

Building on this momentum, the focus shifts to:
• Scaling successful initiatives
• Deepening industry partnerships
• Continuing to mentor and develop talent
• Pushing boundaries in innovation

Thank you to everyone who engaged, commented, and supported this journey. Here's to making {next_year} even more impactful!

#YearInReview #{year}Recap #LinkedIn #ProfessionalGrowth
"#,
        year = stats.review_year,
        next_year = stats.review_year + 1,
        post_count = stats.post_count,
        total_engagement = group_thousands(stats.total_engagement),
        average_likes = stats.average_likes,
        runner_up_peak = peak_note(stats.runner_up_likes),
        top_peak = peak_note(stats.top_likes),
    );

    story.trim().to_string()
}

fn peak_note(likes: Option<u64>) -> String {
    likes
        .map(|n| format!(" (peak engagement: {n} likes)"))
        .unwrap_or_default()
}

/// Format with `,` between every group of three digits: `5212` -> `5,212`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
