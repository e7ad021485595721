use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;

use crate::state::AppState;

fn render_failed(e: minijinja::Error) -> StatusCode {
    tracing::error!("widget render failed: {e}");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn page(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let snapshot = state.store.load();
    let html = state
        .renderer
        .page(&snapshot.view, &state.card, state.poll_interval)
        .map_err(render_failed)?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

pub async fn fragment(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let snapshot = state.store.load();
    let html = state
        .renderer
        .widget(&snapshot.view, &state.card)
        .map_err(render_failed)?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

pub async fn view_json(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.load();
    ([(header::CACHE_CONTROL, "no-store")], Json(snapshot.as_ref().clone()))
}
