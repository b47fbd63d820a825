use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::services::llm::{TranslationJob, TranslationMode};

pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: i64 = 512;

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("Invalid parameter: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0}")]
    OutOfRange(#[from] ValidationErrors),
}

/// Incoming body. Every field accepts any JSON value so a missing required
/// string is always reported, whatever shape the optional fields have.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(
        required(message = "text is required"),
        length(min = 1, message = "text cannot be empty")
    )]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(
        required(message = "sourceLang is required"),
        length(min = 1, message = "sourceLang cannot be empty")
    )]
    pub source_lang: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(
        required(message = "targetLang is required"),
        length(min = 1, message = "targetLang cannot be empty")
    )]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub max_tokens: Option<Value>,
    #[serde(default)]
    pub endpoint: Option<Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> i64 {
    DEFAULT_MAX_TOKENS
}

/// Typed view of the optional sampling fields.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SamplingParams {
    #[serde(default = "default_temperature")]
    #[validate(range(min = 0.0, max = 2.0, message = "temperature must be between 0 and 2"))]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    #[validate(range(min = 1, message = "maxTokens must be a positive integer"))]
    pub max_tokens: i64,
    #[serde(default)]
    pub endpoint: TranslationMode,
}

impl TranslateRequest {
    pub fn sampling(&self) -> Result<SamplingParams, ParamError> {
        let mut fields = Map::new();
        for (key, value) in [
            ("temperature", &self.temperature),
            ("maxTokens", &self.max_tokens),
            ("endpoint", &self.endpoint),
        ] {
            if let Some(value) = value {
                fields.insert(key.to_string(), value.clone());
            }
        }

        let params: SamplingParams = serde_json::from_value(Value::Object(fields))?;
        params.validate()?;

        Ok(params)
    }

    /// Missing strings read as empty, so call this only after `validate()`.
    pub fn job(&self, params: &SamplingParams) -> TranslationJob<'_> {
        TranslationJob {
            text: self.text.as_deref().unwrap_or_default(),
            source_lang: self.source_lang.as_deref().unwrap_or_default(),
            target_lang: self.target_lang.as_deref().unwrap_or_default(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            mode: params.endpoint,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslateResponse {
    pub fn translated(text: String) -> Self {
        Self {
            success: true,
            translated_text: Some(text),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            translated_text: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageOption>,
    pub default_source: &'static str,
    pub default_target: &'static str,
}
