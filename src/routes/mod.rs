mod health;
mod widget;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the widget router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(widget::page))
        .route("/widget", get(widget::fragment))
        .route("/health", get(health::health))
        .route("/version", get(health::version))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().route("/view", get(widget::view_json))
}
