use crate::fixtures::seed::sample_alignment;
use crate::fixtures::test_app::TestApp;
use serde_json::Value;

async fn app_with_alignment() -> TestApp {
    let app = TestApp::spawn().await;
    app.seed_talk("2025-10-58-oaks", "A Talk", &["eng"]);
    app.seed_alignment(
        "2025-10-58-oaks",
        "eng",
        &sample_alignment("2025-10-58-oaks", "eng"),
    );
    app
}

#[tokio::test]
async fn segment_lookup_returns_match_and_position() {
    let app = app_with_alignment().await;

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/segment?time=3.0")
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["segment_index"], 1);
    assert_eq!(json["segment"]["segment_id"], "seg-001");
}

#[tokio::test]
async fn shared_boundary_belongs_to_the_earlier_segment() {
    let app = app_with_alignment().await;

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/segment?time=2.5")
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["segment"]["segment_id"], "seg-000");
    assert_eq!(json["segment_index"], 0);
}

#[tokio::test]
async fn out_of_range_times_are_404_not_errors() {
    let app = app_with_alignment().await;

    for time in ["6.0", "-1.0", "1e9"] {
        let resp = app
            .get(&format!(
                "/api/v1/playback/alignment/2025-10-58-oaks/eng/segment?time={time}"
            ))
            .await;
        assert_eq!(resp.status().as_u16(), 404, "time={time}");
        let json: Value = resp.json().await.unwrap();
        assert_eq!(json["error"], "not_found");
    }
}

#[tokio::test]
async fn word_lookup_returns_the_word_payload() {
    let app = app_with_alignment().await;

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/word?time=0.0")
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["word"], "Hello");
    assert_eq!(json["start_time"], 0.0);
    assert_eq!(json["end_time"], 0.5);
    assert_eq!(json["confidence"], 0.99);
}

#[tokio::test]
async fn inter_word_silence_is_a_word_miss_despite_a_segment_hit() {
    let app = app_with_alignment().await;

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/segment?time=0.55")
        .await;
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/word?time=0.55")
        .await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn missing_or_non_numeric_time_is_400() {
    let app = app_with_alignment().await;

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/segment")
        .await;
    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert!(json["message"].as_str().unwrap().contains("time"));

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/word?time=abc")
        .await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn lookup_without_alignment_is_404() {
    let app = TestApp::spawn().await;
    app.seed_talk("2025-10-58-oaks", "A Talk", &["eng"]);

    let resp = app
        .get("/api/v1/playback/alignment/2025-10-58-oaks/eng/segment?time=1.0")
        .await;
    assert_eq!(resp.status().as_u16(), 404);
}
