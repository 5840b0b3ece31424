use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::codec::CodecRegistry;
use crate::shared::infrastructure::dataset_store::in_memory::InMemoryDatasetStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::compression::{gzip, zstd};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    let store = Arc::new(InMemoryDatasetStore::<Event>::new());
    router(AppState::new(store, Arc::new(CodecRegistry::default())))
}

async fn post_batch(
    app: &Router,
    dataset: &str,
    content_encoding: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut request = Request::post(format!("/1/batch/{dataset}"));
    if let Some(encoding) = content_encoding {
        request = request.header("content-encoding", encoding);
    }
    let response = app
        .clone()
        .oneshot(request.body(body.into()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn inspect_raw(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn inspect(app: &Router) -> Value {
    serde_json::from_str(&inspect_raw(app).await).unwrap()
}

#[rstest]
#[tokio::test]
async fn records_a_batch_and_reports_it_back(app: Router) {
    let (status, acks) = post_batch(&app, "ds1", None, r#"[{"a":1},{"b":2}]"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(acks, json!([{"status": 202}, {"status": 202}]));
    assert_eq!(inspect(&app).await, json!({"ds1": [{"a": 1}, {"b": 2}]}));
}

#[rstest]
#[tokio::test]
async fn concatenates_batches_posted_to_the_same_dataset(app: Router) {
    post_batch(&app, "ds", None, r#"[1,2]"#).await;
    post_batch(&app, "ds", None, r#"[3]"#).await;

    assert_eq!(inspect(&app).await, json!({"ds": [1, 2, 3]}));
}

#[rstest]
#[tokio::test]
async fn keeps_each_dataset_to_its_own_posts(app: Router) {
    post_batch(&app, "left", None, r#"["l1"]"#).await;
    post_batch(&app, "right", None, r#"["r1"]"#).await;
    post_batch(&app, "left", None, r#"["l2"]"#).await;

    assert_eq!(
        inspect(&app).await,
        json!({"left": ["l1", "l2"], "right": ["r1"]})
    );
}

#[rstest]
#[case::gzip("gzip", gzip)]
#[case::zstd("zstd", zstd)]
#[tokio::test]
async fn round_trips_a_compressed_batch(
    app: Router,
    #[case] encoding: &str,
    #[case] compress: fn(&[u8]) -> Vec<u8>,
) {
    let events = json!([{"name": "span", "duration_ms": 12.5, "tags": ["a", "b"]}, null, 7]);
    let body = compress(&serde_json::to_vec(&events).unwrap());

    let (status, acks) = post_batch(&app, "compressed", Some(encoding), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(acks.as_array().map(Vec::len), Some(3));
    assert_eq!(inspect(&app).await, json!({ "compressed": events }));
}

#[rstest]
#[tokio::test]
async fn keeps_numbers_exactly_as_they_were_sent(app: Router) {
    let body = r#"[{"id":123456789012345678901234567890},{"x":-0},{"y":1.10}]"#;

    let (status, _) = post_batch(&app, "big", None, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        inspect_raw(&app).await,
        r#"{"big":[{"id":123456789012345678901234567890},{"x":-0},{"y":1.10}]}"#
    );
}

#[rstest]
#[tokio::test]
async fn accepts_batches_larger_than_the_default_body_limit(app: Router) {
    const EVENTS: usize = 5_000;
    let padding = "p".repeat(1_000);
    let events: Vec<Value> = (0..EVENTS)
        .map(|seq| json!({"seq": seq, "padding": padding}))
        .collect();
    let body = serde_json::to_vec(&events).unwrap();
    assert!(body.len() > 2 * 1024 * 1024);

    let (status, acks) = post_batch(&app, "large", None, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(acks.as_array().map(Vec::len), Some(EVENTS));
    let stored = inspect(&app).await;
    assert_eq!(stored["large"].as_array().map(Vec::len), Some(EVENTS));
    assert_eq!(stored["large"][EVENTS - 1]["seq"], json!(EVENTS - 1));
}

#[rstest]
#[tokio::test]
async fn creates_a_dataset_on_first_write(app: Router) {
    assert_eq!(inspect(&app).await, json!({}));

    post_batch(&app, "new-ds", None, r#"[{"first":true}]"#).await;

    assert_eq!(inspect(&app).await, json!({"new-ds": [{"first": true}]}));
}

#[rstest]
#[tokio::test]
async fn rejects_malformed_bodies_without_recording_anything(app: Router) {
    post_batch(&app, "ds1", None, r#"[{"a":1}]"#).await;

    let (invalid_json, _) = post_batch(&app, "ds1", None, "[{").await;
    let (bad_gzip, _) = post_batch(&app, "ds1", Some("gzip"), r#"[{"b":2}]"#).await;
    let (bad_zstd, _) = post_batch(&app, "other", Some("zstd"), r#"[{"c":3}]"#).await;

    for status in [invalid_json, bad_gzip, bad_zstd] {
        assert!(!status.is_success());
    }
    assert_eq!(inspect(&app).await, json!({"ds1": [{"a": 1}]}));
}

#[rstest]
#[tokio::test]
async fn leaves_unknown_routes_to_the_router(app: Router) {
    let not_found = app
        .clone()
        .oneshot(Request::get("/1/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let wrong_method = app
        .oneshot(Request::get("/1/batch/ds1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
    assert_eq!(wrong_method.status(), StatusCode::METHOD_NOT_ALLOWED);
}
