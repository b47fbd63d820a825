use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};
use validator::Validate;

use crate::modules::translate::{
    model::{DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, SUPPORTED_LANGUAGES},
    schema::{
        ErrorResponse, LanguageOption, LanguagesResponse, TranslateRequest, TranslateResponse,
    },
};
use crate::AppState;

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

fn failure(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(TranslateResponse::failed(message)),
    )
        .into_response()
}

pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslateResponse>, Response> {
    let payload: TranslateRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Failed to parse translation request");
        failure(format!("Invalid request body: {}", e))
    })?;

    if let Err(e) = payload.validate() {
        warn!(error = %e, "Rejected translation request");
        return Err(bad_request(e.to_string()));
    }

    let params = payload.sampling().map_err(|e| {
        warn!(error = %e, "Rejected translation parameters");
        bad_request(e.to_string())
    })?;

    let job = payload.job(&params);

    let translated_text = state.llm.translate(&job).await.map_err(|e| {
        error!(error = %e, mode = job.mode.as_str(), "Translation failed");
        failure(e.to_string())
    })?;

    info!(
        mode = job.mode.as_str(),
        source_lang = job.source_lang,
        target_lang = job.target_lang,
        input_chars = job.text.chars().count(),
        output_chars = translated_text.chars().count(),
        "Translation completed"
    );

    Ok(Json(TranslateResponse::translated(translated_text)))
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = SUPPORTED_LANGUAGES
        .iter()
        .map(|&(value, label)| LanguageOption { value, label })
        .collect();

    Json(LanguagesResponse {
        languages,
        default_source: DEFAULT_SOURCE_LANGUAGE,
        default_target: DEFAULT_TARGET_LANGUAGE,
    })
}
