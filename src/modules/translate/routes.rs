use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::translate::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/translate", post(controller::translate))
        .route("/api/translate/languages", get(controller::list_languages))
}
