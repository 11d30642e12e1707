pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::interview::handlers;
use crate::state::AppState;

/// Builds the `/api` router. Cross-origin calls are allowed from `config.frontend_url` only.
pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.frontend_url)?;

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route("/persona", get(handlers::handle_get_persona))
        .route("/ask", post(handlers::handle_ask))
        .route("/start-interview", post(handlers::handle_start_interview))
        .route("/evaluate-answer", post(handlers::handle_evaluate_answer))
        .route("/next-question", post(handlers::handle_next_question))
        .route("/improve-answer", post(handlers::handle_improve_answer))
        .layer(cors);

    Ok(Router::new().nest("/api", api).with_state(state))
}

fn cors_layer(frontend_url: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(frontend_url)
        .with_context(|| format!("FRONTEND_URL '{frontend_url}' is not a valid origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any))
}
