//! End-to-end checks against a gateway bound to a real socket.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use recap::posts::{FilePostSource, PostSource, SamplePostSource};
use recap::service::{ReviewBundle, ReviewService};
use recap::web::{GatewayState, start_server};

async fn start_test_server(source: Arc<dyn PostSource>) -> (SocketAddr, Arc<GatewayState>) {
    let state = Arc::new(GatewayState::new(
        ReviewService::new(source).with_timeout(Some(Duration::from_secs(5))),
    ));
    let addr: SocketAddr = "127.0.0.1:0".parse().expect("valid addr");
    let bound_addr = start_server(addr, state.clone())
        .await
        .expect("start server");
    (bound_addr, state)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("client")
}

#[tokio::test]
async fn review_round_trip_over_http() {
    let (addr, state) = start_test_server(Arc::new(SamplePostSource)).await;

    let resp = client()
        .post(format!("http://{}/api/review", addr))
        .json(&serde_json::json!({"profileUrl": "https://linkedin.com/in/john-smith-jr/"}))
        .send()
        .await
        .expect("request");

    assert_eq!(resp.status(), 200);
    let bundle: ReviewBundle = resp.json().await.expect("bundle json");
    assert_eq!(bundle.profile.name, "John Smith Jr");
    assert_eq!(bundle.profile.username, "john-smith-jr");
    assert_eq!(bundle.posts.len(), 12);
    assert!(bundle.story.contains("Generated 5,212 total engagements"));
    assert!(bundle.story.contains("Averaged 399 likes per post"));

    assert!(state.shutdown().await);
}

#[tokio::test]
async fn missing_profile_url_is_client_error() {
    let (addr, state) = start_test_server(Arc::new(SamplePostSource)).await;

    let resp = client()
        .post(format!("http://{}/api/review", addr))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("request");

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.expect("error json");
    assert_eq!(body, serde_json::json!({"error": "Profile URL is required"}));

    state.shutdown().await;
}

#[tokio::test]
async fn identical_requests_get_identical_stories() {
    let (addr, state) = start_test_server(Arc::new(SamplePostSource)).await;
    let url = format!("http://{}/api/review", addr);

    let mut stories = Vec::new();
    for _ in 0..2 {
        let bundle: ReviewBundle = client()
            .post(&url)
            .json(&serde_json::json!({"profileUrl": "jane-doe"}))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("bundle json");
        stories.push(bundle.story);
    }
    assert_eq!(stories[0], stories[1]);

    state.shutdown().await;
}

#[tokio::test]
async fn file_source_feeds_the_report() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"date":"2025-03-01","content":"a","engagement":{{"likes":1000,"comments":500}}}},
            {{"date":"2025-01-10","content":"b","engagement":{{"likes":3,"comments":0}}}}
        ]"#
    )
    .expect("write posts");

    let (addr, state) = start_test_server(Arc::new(FilePostSource::new(file.path()))).await;

    let bundle: ReviewBundle = client()
        .post(format!("http://{}/api/review", addr))
        .json(&serde_json::json!({"profileUrl": "jane-doe"}))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("bundle json");

    assert_eq!(bundle.posts.len(), 2);
    assert!(bundle.story.starts_with("📊 Jane Doe's 2025 LinkedIn Journey"));
    assert!(bundle.story.contains("Generated 1,503 total engagements"));
    // 1003 / 2 = 501.5 rounds half up
    assert!(bundle.story.contains("Averaged 502 likes per post"));
    assert!(bundle.story.contains("Innovation and AI (peak engagement: 3 likes)"));
    assert!(bundle.story.contains("Awards and recognition (peak engagement: 1000 likes)"));
    assert!(bundle.story.contains("LOOKING AHEAD TO 2026"));

    state.shutdown().await;
}

#[tokio::test]
async fn broken_file_source_is_server_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = FilePostSource::new(dir.path().join("missing.json"));
    let (addr, state) = start_test_server(Arc::new(source)).await;

    let resp = client()
        .post(format!("http://{}/api/review", addr))
        .json(&serde_json::json!({"profileUrl": "jane-doe"}))
        .send()
        .await
        .expect("request");

    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = resp.json().await.expect("error json");
    assert!(body["error"].as_str().expect("message").contains("missing.json"));
    assert!(body.get("story").is_none());

    state.shutdown().await;
}
