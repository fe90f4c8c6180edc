//! Request and response bodies for the gateway API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/review`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(rename = "profileUrl", default)]
    pub profile_url: Option<String>,
}

/// Failure body: `{ "error": "..." }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_request_reads_camel_case_field() {
        let req: ReviewRequest =
            serde_json::from_str(r#"{"profileUrl":"jane-doe"}"#).unwrap();
        assert_eq!(req.profile_url.as_deref(), Some("jane-doe"));
    }

    #[test]
    fn review_request_tolerates_missing_and_null_field() {
        let req: ReviewRequest = serde_json::from_str("{}").unwrap();
        assert!(req.profile_url.is_none());
        let req: ReviewRequest = serde_json::from_str(r#"{"profileUrl":null}"#).unwrap();
        assert!(req.profile_url.is_none());
    }

    #[test]
    fn review_request_rejects_non_string_field() {
        assert!(serde_json::from_str::<ReviewRequest>(r#"{"profileUrl":5}"#).is_err());
    }
}
