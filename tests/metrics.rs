// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use post_categorizer::api::{create_router, AppState};
use post_categorizer::config::ServiceConfig;

// Full in-process app with /metrics mounted.
fn build_app() -> Router {
    create_router(AppState::new(ServiceConfig {
        metrics: true,
        ..ServiceConfig::default()
    }))
}

async fn scrape(app: Router) -> String {
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn categorize_calls_show_up_in_exposition() {
    let app = build_app();

    for payload in [
        r#"{"text":"team scored a goal and won the match"}"#,
        r#"{"text":"asdfgh qwerty"}"#,
        r#"{"text":""}"#,
    ] {
        let r = app
            .clone()
            .oneshot(
                Request::post("/categorize")
                    .header("content-type", "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(r.status(), StatusCode::OK);
    }

    // Same process, so counters persist across router clones.
    let text = scrape(app).await;
    for needle in [
        "categorizer_requests_total",
        "categorizer_primary_total",
        "categorizer_fallback_total",
        "categorizer_duration_ms",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
    assert!(text.contains(r#"kind="no_match""#), "{text}");
    assert!(text.contains(r#"kind="empty""#), "{text}");
}
