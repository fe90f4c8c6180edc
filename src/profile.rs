//! Profile identifier normalization.
//!
//! Turns whatever the user typed into the form (a profile URL or a bare
//! handle) into a [`ProfileSummary`]. There is no lookup behind this: the
//! display name is derived from the handle itself and the headline is a
//! fixed placeholder.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Headline attached to every profile, since nothing real backs it.
pub const PLACEHOLDER_HEADLINE: &str = "Professional | Industry Leader | Innovator";

/// Host marker that switches on URL handle extraction.
const HOST_MARKER: &str = "linkedin.com";

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"linkedin\.com/in/([^/?]+)").expect("handle pattern is valid")
});

/// Identity derived once from the raw request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub name: String,
    pub headline: String,
    pub username: String,
}

impl ProfileSummary {
    /// Normalize raw input into a profile. Never fails; empty input yields
    /// an empty name and username.
    pub fn from_input(raw: &str) -> Self {
        let username = extract_username(raw);
        Self {
            name: display_name(username),
            headline: PLACEHOLDER_HEADLINE.to_string(),
            username: username.to_string(),
        }
    }
}

/// Pull the handle out of a `.../in/<handle>` URL, or return the input as-is.
pub fn extract_username(raw: &str) -> &str {
    if !raw.contains(HOST_MARKER) {
        return raw;
    }
    HANDLE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
}

/// `jane-doe` -> `Jane Doe`. Only the first character of each hyphen
/// segment is touched.
pub fn display_name(username: &str) -> String {
    username
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_name_capitalizes_each_segment() {
        assert_eq!(display_name("jane-doe"), "Jane Doe");
        assert_eq!(display_name("john-smith-jr"), "John Smith Jr");
    }

    #[test]
    fn display_name_leaves_the_rest_untouched() {
        assert_eq!(display_name("mcDonald-o"), "McDonald O");
        assert_eq!(display_name("42-things"), "42 Things");
    }

    #[test]
    fn display_name_keeps_empty_segments() {
        assert_eq!(display_name("a--b"), "A  B");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn extracts_handle_from_profile_url() {
        assert_eq!(extract_username("https://linkedin.com/in/jane-doe/"), "jane-doe");
        assert_eq!(
            extract_username("https://www.linkedin.com/in/jane-doe?trk=public"),
            "jane-doe"
        );
    }

    #[test]
    fn bare_handle_and_url_agree() {
        let from_url = ProfileSummary::from_input("https://linkedin.com/in/jane-doe/");
        let bare = ProfileSummary::from_input("jane-doe");
        assert_eq!(from_url, bare);
        assert_eq!(bare.name, "Jane Doe");
        assert_eq!(bare.headline, PLACEHOLDER_HEADLINE);
    }

    #[test]
    fn url_without_handle_path_is_kept_whole() {
        let raw = "https://linkedin.com/company/acme";
        assert_eq!(extract_username(raw), raw);
    }

    #[test]
    fn other_hosts_are_not_parsed() {
        let raw = "https://example.com/in/jane-doe";
        assert_eq!(extract_username(raw), raw);
    }

    #[test]
    fn empty_input_yields_empty_profile_name() {
        let profile = ProfileSummary::from_input("");
        assert_eq!(profile.name, "");
        assert_eq!(profile.username, "");
    }
}
