use axum::Router;
use tower_http::cors::CorsLayer;

use crate::config::Settings;
use crate::services::llm::LlmClient;

pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            llm: LlmClient::new(settings),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(modules::translate::routes::routes())
        .merge(modules::health::routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
