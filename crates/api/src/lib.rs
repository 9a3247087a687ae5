pub mod error;
pub mod routes;
pub mod state;

use axum::{Router, http::HeaderValue, routing::get};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.app.cors_origins);

    let talk_routes = Router::new()
        .route("/", get(routes::talks::list))
        .route("/{talk_id}", get(routes::talks::get));

    let playback_routes = Router::new()
        .route("/audio/{talk_id}/{language}", get(routes::playback::audio))
        .route("/text/{talk_id}/{language}", get(routes::playback::text))
        .route(
            "/alignment/{talk_id}/{language}",
            get(routes::playback::alignment),
        )
        .route(
            "/alignment/{talk_id}/{language}/segment",
            get(routes::playback::segment_at),
        )
        .route(
            "/alignment/{talk_id}/{language}/word",
            get(routes::playback::word_at),
        );

    let api = Router::new()
        .nest("/talks", talk_routes)
        .nest("/playback", playback_routes);

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
