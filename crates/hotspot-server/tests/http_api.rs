//! End-to-end HTTP behaviour against the in-process router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use hotspot_core::catalog::Catalog;
use hotspot_core::error::{HotspotError, Result};
use hotspot_core::measure::MemoryProbe;
use hotspot_server::{app_state::AppState, config, router};

/// Constant reading, or a failure while `fail` is set.
struct FakeProbe {
    fail: Arc<AtomicBool>,
}

impl MemoryProbe for FakeProbe {
    fn resident_mb(&self) -> Result<f64> {
        if self.fail.load(Ordering::Relaxed) {
            Err(HotspotError::Measurement("probe offline".into()))
        } else {
            Ok(64.0)
        }
    }
}

fn app_with(catalog: Catalog) -> (Router, Arc<AtomicBool>) {
    let fail = Arc::new(AtomicBool::new(false));
    let probe = FakeProbe { fail: Arc::clone(&fail) };
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let state = AppState::with_parts(cfg, catalog, Box::new(probe));
    (router::build_router(state), fail)
}

fn app() -> Router {
    app_with(Catalog::builtin().unwrap()).0
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    call(app, Method::GET, uri).await
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn recommendations_defaults() {
    let (status, body) = get(&app(), "/recommendations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["genre"], "Action");
    assert_eq!(body["limit"], 10);
    assert_eq!(body["mode"], "optimized");
    assert_eq!(body["count"], 7);
    assert_eq!(body["result"].as_array().unwrap().len(), 7);
    assert_eq!(body["result"][0]["title"], "The Dark Knight");
    assert_eq!(body["allocated_mb"].as_f64(), Some(0.0));
    assert!(body["response_time_ms"].as_f64().unwrap() >= 0.0);
    assert!(body["details"]["single_sort"].is_string());
}

#[tokio::test]
async fn inefficient_mode_matches_optimized_without_ties() {
    let app = app();
    let (_, slow) = get(&app, "/recommendations?genre=Action&limit=3&mode=inefficient").await;
    let (_, fast) = get(&app, "/recommendations?genre=Action&limit=3&mode=optimized").await;
    assert_eq!(slow["mode"], "inefficient");
    assert_eq!(slow["result"], fast["result"]);
    assert!(slow["details"]["array_duplication"].is_string());
}

#[tokio::test]
async fn unknown_mode_behaves_as_optimized() {
    let app = app();
    let (status, body) = get(&app, "/recommendations?mode=turbo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mode"], "turbo");

    let (_, report) = get(&app, "/profiling-report").await;
    assert_eq!(report["optimized"]["calls"], 1);
    assert_eq!(report["inefficient"]["calls"], 0);
}

#[tokio::test]
async fn unknown_genre_is_empty_not_error() {
    let (status, body) = get(&app(), "/recommendations?genre=NonexistentGenre&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["result"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn non_positive_limits_return_empty() {
    let app = app();
    for q in ["limit=0", "limit=-4"] {
        let (status, body) = get(&app, &format!("/recommendations?{q}&mode=inefficient")).await;
        assert_eq!(status, StatusCode::OK, "{q}");
        assert_eq!(body["count"], 0, "{q}");
    }
}

#[tokio::test]
async fn malformed_limit_is_rejected_and_not_recorded() {
    let app = app();
    for q in ["limit=ten", "limit=2.5", "limit="] {
        let (status, body) = get(&app, &format!("/recommendations?{q}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{q}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST", "{q}");
    }

    let (_, report) = get(&app, "/profiling-report").await;
    assert_eq!(report["optimized"]["calls"], 0);
}

#[tokio::test]
async fn measurement_failure_leaves_recorder_untouched() {
    let (app, fail) = app_with(Catalog::builtin().unwrap());
    let _ = get(&app, "/recommendations?mode=inefficient").await;

    fail.store(true, Ordering::Relaxed);
    let (status, body) = get(&app, "/recommendations?mode=inefficient").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "MEASUREMENT_FAILED");

    fail.store(false, Ordering::Relaxed);
    let (_, report) = get(&app, "/profiling-report").await;
    assert_eq!(report["inefficient"]["calls"], 1);
}

#[tokio::test]
async fn report_counts_calls_per_variant() {
    let app = app();
    for _ in 0..3 {
        get(&app, "/recommendations?mode=inefficient").await;
    }
    for _ in 0..2 {
        get(&app, "/recommendations?mode=optimized").await;
    }

    let (status, report) = get(&app, "/profiling-report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["summary"]["profiling_enabled"], true);
    assert!(report["summary"]["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(report["inefficient"]["calls"], 3);
    assert_eq!(report["optimized"]["calls"], 2);

    let ineff = &report["inefficient"];
    let min = ineff["min_time_ms"].as_f64().unwrap();
    let max = ineff["max_time_ms"].as_f64().unwrap();
    let avg = ineff["avg_response_time_ms"].as_f64().unwrap();
    assert!(min <= avg && avg <= max);
    assert_eq!(ineff["total_allocations_mb"].as_f64(), Some(0.0));
    assert!(report["improvement"]["estimated_speedup"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn reset_zeroes_the_report() {
    let app = app();
    get(&app, "/recommendations?mode=inefficient").await;
    get(&app, "/recommendations").await;

    let (status, body) = call(&app, Method::POST, "/profiling-reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "profiling data reset");

    let (_, report) = get(&app, "/profiling-report").await;
    for v in ["inefficient", "optimized"] {
        assert_eq!(report[v]["calls"], 0, "{v}");
        assert_eq!(report[v]["avg_response_time_ms"].as_f64(), Some(0.0), "{v}");
        assert_eq!(report[v]["min_time_ms"].as_f64(), Some(0.0), "{v}");
        assert_eq!(report[v]["max_time_ms"].as_f64(), Some(0.0), "{v}");
    }
    assert_eq!(report["improvement"]["estimated_speedup"].as_f64(), Some(0.0));
    assert_eq!(report["improvement"]["response_time_improvement_percent"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn reset_requires_post() {
    let (status, _) = get(&app(), "/profiling-reset").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn single_record_genre_scenario() {
    let catalog = Catalog::from_json_str(
        r#"[
          {"id": 10, "title": "The Silence of the Lambs", "year": 1991, "genre": "Thriller", "rating": 8.6, "description": ""},
          {"id": 3, "title": "The Dark Knight", "year": 2008, "genre": "Action", "rating": 9.0, "description": ""}
        ]"#,
    )
    .unwrap();
    let (app, _) = app_with(catalog);

    for mode in ["inefficient", "optimized"] {
        let (_, body) = get(&app, &format!("/recommendations?genre=Action&limit=1&mode={mode}")).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["result"][0]["genre"], "Action");

        let (_, body) = get(&app, &format!("/recommendations?genre=Thriller&limit=1&mode={mode}")).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["result"][0]["rating"].as_f64(), Some(8.6));
    }
}

#[tokio::test]
async fn metrics_expose_requests_and_recorded_calls() {
    let app = app();
    get(&app, "/recommendations?mode=inefficient").await;
    get(&app, "/recommendations?limit=bad").await;

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();

    assert!(text.contains(r#"hotspot_http_requests_total{route="/recommendations",status="200"} 1"#));
    assert!(text.contains(r#"hotspot_http_requests_total{route="/recommendations",status="400"} 1"#));
    assert!(text.contains(r#"hotspot_bad_requests_total{reason="limit"} 1"#));
    assert!(text.contains(r#"hotspot_recorded_calls{variant="inefficient"} 1"#));
    assert!(text.contains(r#"hotspot_query_duration_micros_count{variant="inefficient"} 1"#));
    assert!(text.contains("hotspot_draining 0"));
}

#[tokio::test]
async fn readyz_reports_ready() {
    let req = Request::builder().uri("/readyz").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
