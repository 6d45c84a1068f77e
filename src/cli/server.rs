//! HTTP server mode for REST access to pagination

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use crate::links::DEFAULT_PAGE_PARAM;
use crate::pagination::Paginator;
use crate::request::{RequestContext, RequestSnapshot};
use crate::types::QueryValues;
use crate::view::View;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    settings: Settings,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Body of a successful `/paginate` response
#[derive(Debug, Serialize)]
struct PaginateResponse {
    paginator: Paginator,
    view: View,
}

/// Build the router with all endpoints
pub fn router(settings: Settings) -> Router {
    let state = AppState { settings };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/paginate", get(paginate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(settings: Settings, port: u16) -> Result<()> {
    let app = router(settings);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to port {port}"))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Compute pagination for the query parameters and render page links back to
/// this same request
///
/// Reads `total_items`, the configured page parameter, `per_page` and
/// `window`. Missing or non-numeric values fall back to defaults rather than
/// rejecting the request.
async fn paginate(State(state): State<Arc<AppState>>, req: RequestSnapshot) -> impl IntoResponse {
    let settings = &state.settings;
    let query = req.query();

    let page_param = settings
        .url
        .page_param
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PAGE_PARAM);

    let total_items = int_param(&query, "total_items").unwrap_or(0);
    let page = int_param(&query, page_param).unwrap_or(1);
    let per_page = int_param(&query, "per_page").unwrap_or(settings.per_page);
    let window = int_param(&query, "window").unwrap_or(settings.window);

    let paginator = Paginator::compute(total_items, page, per_page);
    let window = bounded_window(window, paginator.total_pages(), settings.server.max_pages);
    let view = View::from_paginator(&req, &paginator, Some(&settings.url), window);

    tracing::debug!(
        path = req.path(),
        total_items,
        page = paginator.current_page(),
        total_pages = paginator.total_pages(),
        "Paginated request"
    );

    (
        StatusCode::OK,
        Json(ApiResponse::success(PaginateResponse { paginator, view })),
    )
}

/// Narrow `window` so at most `max_pages` links are rendered
///
/// A window of 0 (every page) or one wider than `max_pages` is replaced by
/// `max_pages` once the collection has more pages than that.
fn bounded_window(window: i64, total_pages: i64, max_pages: i64) -> i64 {
    let unbounded = window <= 0 || window > max_pages;
    if unbounded && total_pages > max_pages {
        max_pages
    } else {
        window
    }
}

/// First value of `key` parsed as an integer
fn int_param(query: &QueryValues, key: &str) -> Option<i64> {
    query
        .get(key)
        .and_then(|values| values.first())
        .and_then(|value| value.trim().parse().ok())
}
