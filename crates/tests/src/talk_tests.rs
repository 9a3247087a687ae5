use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn empty_catalog_lists_no_talks() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/v1/talks").await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["talks"], serde_json::json!([]));
}

#[tokio::test]
async fn list_returns_talks_newest_first_with_metadata() {
    let app = TestApp::spawn().await;
    app.seed_talk("2024-04-holland", "An Older Talk", &["eng"]);
    app.seed_talk("2025-10-58-oaks", "The Power of Covenants", &["eng", "ces"]);

    let resp = app.get("/api/v1/talks").await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    let talks = json["talks"].as_array().unwrap();
    assert_eq!(talks.len(), 2);

    assert_eq!(talks[0]["id"], "2025-10-58-oaks");
    assert_eq!(talks[0]["title"], "The Power of Covenants");
    assert_eq!(talks[0]["speaker"], "Oaks");
    assert_eq!(talks[0]["conference"], "October 2025 General Conference");
    assert_eq!(talks[0]["date"], "2025-10-01");
    let languages = talks[0]["available_languages"].as_array().unwrap();
    assert!(languages.contains(&Value::from("eng")));
    assert!(languages.contains(&Value::from("ces")));

    assert_eq!(talks[1]["id"], "2024-04-holland");
    assert_eq!(talks[1]["conference"], "April 2024 General Conference");
}

#[tokio::test]
async fn incomplete_language_versions_are_not_listed() {
    let app = TestApp::spawn().await;
    app.seed_talk("2025-10-58-oaks", "A Talk", &["eng"]);
    app.seed_text_only("2025-10-58-oaks", "ces");

    let resp = app.get("/api/v1/talks/2025-10-58-oaks").await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(
        json["available_languages"],
        serde_json::json!(["eng"])
    );
}

#[tokio::test]
async fn unknown_talk_is_404() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/v1/talks/2099-10-nobody").await;

    assert_eq!(resp.status().as_u16(), 404);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "not_found");
}
