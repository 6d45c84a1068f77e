//! Tests for view module

use super::*;
use crate::links::BuildOptions;
use crate::pagination::Paginator;
use crate::request::RequestSnapshot;
use test_case::test_case;

fn list_request() -> RequestSnapshot {
    RequestSnapshot::from_url("http://localhost:8080/list?limit=10&foo=bar").unwrap()
}

fn numbers(view: &View) -> Vec<i64> {
    view.pages.iter().map(|p| p.num).collect()
}

// ============================================================================
// build_view Tests
// ============================================================================

#[test_case(5, 10, 0, "/list?foo=bar&limit=10&page=4", "/list?foo=bar&limit=10&page=6", vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 4 ; "full range when window is zero")]
#[test_case(1, 10, 5, "", "/list?foo=bar&limit=10&page=2", vec![1, 2, 3, 4, 5], 0 ; "window at start")]
#[test_case(6, 10, 5, "/list?foo=bar&limit=10&page=5", "/list?foo=bar&limit=10&page=7", vec![4, 5, 6, 7, 8], 2 ; "window in middle")]
#[test_case(10, 10, 5, "/list?foo=bar&limit=10&page=9", "", vec![6, 7, 8, 9, 10], 4 ; "window at end")]
#[test_case(-3, 0, 5, "", "", vec![1], 0 ; "normalizes current and total")]
fn test_build_view_windows(
    current: i64,
    total: i64,
    window: i64,
    want_prev: &str,
    want_next: &str,
    want_pages: Vec<i64>,
    want_active_at: usize,
) {
    let view = build_view(&list_request(), current, total, None, window);

    assert_eq!(view.prev_url, want_prev);
    assert_eq!(view.next_url, want_next);
    assert_eq!(numbers(&view), want_pages);
    assert!(view.pages[want_active_at].active);
    assert_eq!(view.pages.iter().filter(|p| p.active).count(), 1);
}

#[test]
fn test_build_view_normalized_fields() {
    let view = build_view(&list_request(), -3, 0, None, 5);
    assert_eq!(view.current, 1);
    assert_eq!(view.total, 1);
    assert!(!view.has_prev());
    assert!(!view.has_next());
}

#[test]
fn test_build_view_page_urls() {
    let view = build_view(&list_request(), 2, 3, None, 0);
    let urls: Vec<&str> = view.pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "/list?foo=bar&limit=10&page=1",
            "/list?foo=bar&limit=10&page=2",
            "/list?foo=bar&limit=10&page=3",
        ]
    );
    assert_eq!(view.active().map(|p| p.num), Some(2));
}

#[test]
fn test_build_view_with_absolute_options() {
    let req = list_request().with_header("X-Forwarded-Proto", "https");
    let opts = BuildOptions::new().absolute().keep_existing_query(false);
    let view = build_view(&req, 2, 2, Some(&opts), 0);

    assert_eq!(view.prev_url, "https://localhost:8080/list?page=1");
    assert_eq!(view.next_url, "");
    assert_eq!(view.pages[1].url, "https://localhost:8080/list?page=2");
}

#[test]
fn test_build_view_current_past_total_is_not_clamped() {
    let view = build_view(&list_request(), 15, 10, None, 5);

    assert_eq!(view.current, 15);
    assert_eq!(view.prev_url, "/list?foo=bar&limit=10&page=14");
    assert_eq!(view.next_url, "");
    assert_eq!(numbers(&view), vec![6, 7, 8, 9, 10]);
    assert!(view.active().is_none());
}

#[test]
fn test_view_from_paginator() {
    let paginator = Paginator::compute(100, 5, 10);
    let view = View::from_paginator(&list_request(), &paginator, None, 3);

    assert_eq!(view.current, 5);
    assert_eq!(view.total, 10);
    assert_eq!(numbers(&view), vec![4, 5, 6]);
}

#[test]
fn test_view_serializes() {
    let view = build_view(&list_request(), 1, 1, None, 0);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["current"], 1);
    assert_eq!(json["prev_url"], "");
    assert_eq!(json["pages"][0]["url"], "/list?foo=bar&limit=10&page=1");
    assert_eq!(json["pages"][0]["active"], true);
}

// ============================================================================
// page_window Tests
// ============================================================================

#[test_case(1, 10, 0 => (1, 10) ; "zero window renders all")]
#[test_case(3, 10, -2 => (1, 10) ; "negative window renders all")]
#[test_case(3, 5, 5 => (1, 5) ; "window equal to total renders all")]
#[test_case(3, 5, 8 => (1, 5) ; "window larger than total renders all")]
#[test_case(6, 10, 4 => (4, 7) ; "even window leans right")]
#[test_case(2, 6, 5 => (1, 5) ; "clamped at start")]
#[test_case(6, 6, 5 => (2, 6) ; "shifted at end")]
#[test_case(5, 6, 5 => (2, 6) ; "total just above window")]
fn test_page_window(current: i64, total: i64, window: i64) -> (i64, i64) {
    let range = page_window(current, total, window);
    (*range.start(), *range.end())
}

#[test]
fn test_page_window_at_i64_max() {
    let range = page_window(i64::MAX, i64::MAX, 5);
    assert_eq!(*range.start(), i64::MAX - 4);
    assert_eq!(*range.end(), i64::MAX);
    assert_eq!(range.count(), 5);
}

#[test]
fn test_page_window_extreme_current() {
    assert_eq!(page_window(i64::MIN, 10, 3), 1..=3);
    assert_eq!(page_window(i64::MAX, 10, 3), 8..=10);
}

#[test]
fn test_view_from_paginator_at_i64_max() {
    let paginator = Paginator::compute(i64::MAX, i64::MAX, 1);
    let view = View::from_paginator(&list_request(), &paginator, None, 5);

    assert_eq!(view.current, i64::MAX);
    assert_eq!(view.next_url, "");
    assert_eq!(view.pages.len(), 5);
    assert_eq!(view.pages[4].num, i64::MAX);
    assert!(view.pages[4].active);
    assert_eq!(
        view.pages[4].url,
        format!("/list?foo=bar&limit=10&page={}", i64::MAX)
    );
}

#[test]
fn test_page_window_properties() {
    for total in 1..=20 {
        for window in 1..total {
            for current in 1..=total {
                let range = page_window(current, total, window);
                let len = range.end() - range.start() + 1;

                assert_eq!(len, window.min(total));
                assert!(range.contains(&current));
                assert!(*range.start() >= 1 && *range.end() <= total);
            }
        }
    }
}
