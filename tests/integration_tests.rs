//! Integration tests through the public API and the HTTP server
//!
//! Tests the full flow: request → paginator → page links → view → JSON

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use pagelinks::cli::router;
use pagelinks::config::{load_settings_from_str, Settings};
use pagelinks::request::SecureTransport;
use pagelinks::{build_page_url, build_view, BuildOptions, Paginator, RequestSnapshot, View};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

async fn get_json(app: Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).header("Host", "localhost:8080");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn page_numbers(view: &Value) -> Vec<i64> {
    view["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["num"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Library Flow Tests
// ============================================================================

#[test]
fn test_middle_page_metadata() {
    let p = Paginator::compute(100, 5, 10);
    assert_eq!(p.per_page(), 10);
    assert_eq!(p.total_pages(), 10);
    assert_eq!(p.offset(), 40);
    assert_eq!(p.item_count(), 10);
    assert!(p.has_previous());
    assert!(p.has_next());
    assert_eq!(p.prev_page(), 4);
    assert_eq!(p.next_page(), 6);
}

#[test]
fn test_empty_collection_metadata() {
    let p = Paginator::compute(0, 5, 10);
    assert_eq!(p.total_items(), 0);
    assert_eq!(p.total_pages(), 1);
    assert_eq!(p.current_page(), 1);
    assert_eq!(p.item_count(), 0);
    assert!(!p.has_previous());
    assert!(!p.has_next());
}

#[test]
fn test_relative_link_rewrites_page() {
    let req = RequestSnapshot::from_url("http://localhost/api/items?q=test&limit=20&page=5").unwrap();
    assert_eq!(
        build_page_url(&req, 3, None),
        "/api/items?limit=20&page=3&q=test"
    );
}

#[test]
fn test_absolute_link_behind_proxy() {
    let req = RequestSnapshot::from_url("http://local/api/items?q=test")
        .unwrap()
        .with_header("X-Forwarded-Proto", "https")
        .with_header("X-Forwarded-Host", "api.example.com");
    let opts = BuildOptions::new().absolute();

    assert_eq!(
        build_page_url(&req, 2, Some(&opts)),
        "https://api.example.com/api/items?page=2&q=test"
    );
}

#[test]
fn test_absolute_link_from_tls_request() {
    let mut req = Request::builder()
        .uri("/data?x=1")
        .header("Host", "secure.com")
        .body(())
        .unwrap();
    req.extensions_mut().insert(SecureTransport);
    let opts = BuildOptions::new().absolute();

    assert_eq!(
        build_page_url(&req, 1, Some(&opts)),
        "https://secure.com/data?page=1&x=1"
    );
}

#[test]
fn test_view_window_in_middle() {
    let req = RequestSnapshot::from_url("http://localhost:8080/list?limit=10&foo=bar").unwrap();
    let view = build_view(&req, 6, 10, None, 5);

    let nums: Vec<i64> = view.pages.iter().map(|p| p.num).collect();
    assert_eq!(nums, vec![4, 5, 6, 7, 8]);
    assert!(view.pages[2].active);
}

#[test]
fn test_view_normalizes_inputs() {
    let req = RequestSnapshot::from_url("http://localhost:8080/list?limit=10&foo=bar").unwrap();
    let view = build_view(&req, -3, 0, None, 5);

    assert_eq!(view.current, 1);
    assert_eq!(view.total, 1);
    assert_eq!(view.pages.len(), 1);
    assert_eq!(view.pages[0].num, 1);
    assert!(view.pages[0].active);
}

#[test]
fn test_paginator_to_view_slices_items() {
    let items: Vec<String> = (1..=23).map(|i| format!("item-{i}")).collect();
    let req = RequestSnapshot::from_url("http://localhost/items?page=99").unwrap();

    let p = Paginator::compute(items.len() as i64, 99, 5);
    let page = &items[p.item_range()];
    assert_eq!(page, &["item-21", "item-22", "item-23"]);

    let view = View::from_paginator(&req, &p, None, 3);
    assert_eq!(view.current, 5);
    assert_eq!(view.next_url, "");
    assert_eq!(view.prev_url, "/items?page=4");
}

// ============================================================================
// HTTP Server Tests
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(router(Settings::default()), "/health", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_paginate_relative_links() {
    let (status, body) = get_json(
        router(Settings::default()),
        "/paginate?total_items=100&page=5&per_page=10&window=5&q=test",
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let paginator = &body["data"]["paginator"];
    assert_eq!(paginator["offset"], 40);
    assert_eq!(paginator["total_pages"], 10);

    let view = &body["data"]["view"];
    assert_eq!(view["current"], 5);
    assert_eq!(
        view["prev_url"],
        "/paginate?page=4&per_page=10&q=test&total_items=100&window=5"
    );
    assert_eq!(page_numbers(view), vec![3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn test_paginate_absolute_links_from_settings() {
    let settings = load_settings_from_str("url:\n  mode: absolute\n").unwrap();
    let (_, body) = get_json(
        router(settings),
        "/paginate?total_items=30&page=1&per_page=10",
        &[
            ("X-Forwarded-Proto", "https"),
            ("X-Forwarded-Host", "api.example.com"),
        ],
    )
    .await;

    let view = &body["data"]["view"];
    assert_eq!(view["prev_url"], "");
    assert_eq!(
        view["next_url"],
        "https://api.example.com/paginate?page=2&per_page=10&total_items=30"
    );
}

#[tokio::test]
async fn test_paginate_custom_page_param() {
    let settings = load_settings_from_str("per_page: 5\nurl:\n  page_param: p\n").unwrap();
    let (_, body) = get_json(router(settings), "/paginate?total_items=12&p=3", &[]).await;

    let paginator = &body["data"]["paginator"];
    assert_eq!(paginator["per_page"], 5);
    assert_eq!(paginator["current_page"], 3);
    assert_eq!(paginator["item_count"], 2);
    assert_eq!(
        body["data"]["view"]["prev_url"],
        "/paginate?p=2&total_items=12"
    );
}

#[tokio::test]
async fn test_paginate_garbage_input_renders_single_page() {
    let (status, body) = get_json(
        router(Settings::default()),
        "/paginate?total_items=abc&page=xyz&per_page=-3",
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let paginator = &body["data"]["paginator"];
    assert_eq!(paginator["total_items"], 0);
    assert_eq!(paginator["total_pages"], 1);
    assert_eq!(paginator["per_page"], 10);
    assert_eq!(page_numbers(&body["data"]["view"]), vec![1]);
}

#[tokio::test]
async fn test_paginate_caps_rendered_pages() {
    let (status, body) = get_json(
        router(Settings::default()),
        "/paginate?total_items=100000000000&per_page=1",
        &[],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["paginator"]["total_pages"], 100_000_000_000_i64);

    let view = &body["data"]["view"];
    assert_eq!(view["total"], 100_000_000_000_i64);
    assert_eq!(page_numbers(view), (1..=100).collect::<Vec<i64>>());
    assert_eq!(view["pages"][0]["active"], true);
}

#[tokio::test]
async fn test_paginate_caps_oversized_window_to_configured_max() {
    let settings = load_settings_from_str("server:\n  max_pages: 7\n").unwrap();
    let (_, body) = get_json(
        router(settings),
        "/paginate?total_items=1000&per_page=10&page=50&window=500",
        &[],
    )
    .await;

    assert_eq!(
        page_numbers(&body["data"]["view"]),
        vec![47, 48, 49, 50, 51, 52, 53]
    );
}

#[tokio::test]
async fn test_paginate_last_page_at_i64_max() {
    let uri = format!(
        "/paginate?total_items={max}&per_page=1&page={max}&window=5",
        max = i64::MAX
    );
    let (status, body) = get_json(router(Settings::default()), &uri, &[]).await;

    assert_eq!(status, StatusCode::OK);
    let view = &body["data"]["view"];
    assert_eq!(view["next_url"], "");
    assert_eq!(
        page_numbers(view),
        vec![
            i64::MAX - 4,
            i64::MAX - 3,
            i64::MAX - 2,
            i64::MAX - 1,
            i64::MAX
        ]
    );
}
