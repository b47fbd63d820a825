use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;

pub const MODEL_NAME: &str = "Tencent/Hunyuan-MT-7B";

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const COMPLETION_PATH: &str = "/v1/completions";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Upstream request failed: {status} {reason}")]
    UpstreamStatus { status: u16, reason: String },
    #[error("Translation result is empty")]
    EmptyResult,
}

/// Which OpenAI-style endpoint the upstream request is framed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMode {
    #[default]
    Chat,
    Completion,
}

impl TranslationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationMode::Chat => "chat",
            TranslationMode::Completion => "completion",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            TranslationMode::Chat => CHAT_PATH,
            TranslationMode::Completion => COMPLETION_PATH,
        }
    }
}

/// One translation, borrowed from the incoming request.
#[derive(Debug, Clone, Copy)]
pub struct TranslationJob<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub temperature: f32,
    pub max_tokens: i64,
    pub mode: TranslationMode,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: i64,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: i64,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UpstreamPayload {
    Chat(ChatRequest),
    Completion(CompletionRequest),
}

// Upstream bodies are read leniently: any missing or null field on the
// path to the text counts as an empty result rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamResponse {
    #[serde(default)]
    choices: Option<Vec<UpstreamChoice>>,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamChoice {
    #[serde(default)]
    message: Option<UpstreamMessage>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UpstreamMessage {
    #[serde(default)]
    content: Option<String>,
}

pub fn build_payload(job: &TranslationJob<'_>) -> UpstreamPayload {
    match job.mode {
        TranslationMode::Chat => UpstreamPayload::Chat(ChatRequest {
            model: MODEL_NAME.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: format!(
                        "你是一名专业的翻译官，请将用户提供的{}文本准确流畅地翻译成{}。",
                        job.source_lang, job.target_lang
                    ),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!(
                        "请将以下{}内容翻译成{}：{}",
                        job.source_lang, job.target_lang, job.text
                    ),
                },
            ],
            temperature: job.temperature,
            max_tokens: job.max_tokens,
        }),
        TranslationMode::Completion => UpstreamPayload::Completion(CompletionRequest {
            model: MODEL_NAME.to_string(),
            prompt: format!(
                "请将以下{}文本翻译成{}：{}",
                job.source_lang, job.target_lang, job.text
            ),
            temperature: job.temperature,
            max_tokens: job.max_tokens,
        }),
    }
}

/// Pulls the translated string out of the first choice.
pub fn extract_text(mode: TranslationMode, response: &UpstreamResponse) -> Result<String, LlmError> {
    let first = response.choices.as_ref().and_then(|choices| choices.first());

    let text = match mode {
        TranslationMode::Chat => first
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref()),
        TranslationMode::Completion => first.and_then(|c| c.text.as_deref()),
    }
    .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::EmptyResult);
    }

    Ok(text.to_string())
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.backend_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, mode: TranslationMode) -> String {
        format!("{}{}", self.base_url, mode.path())
    }

    pub async fn translate(&self, job: &TranslationJob<'_>) -> Result<String, LlmError> {
        let url = self.endpoint_url(job.mode);
        let payload = build_payload(job);

        debug!(url = %url, mode = job.mode.as_str(), "Sending translation request upstream");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::UpstreamStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body: UpstreamResponse = response.json().await?;

        extract_text(job.mode, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn job(mode: TranslationMode) -> TranslationJob<'static> {
        TranslationJob {
            text: "今天天气很好",
            source_lang: "中文",
            target_lang: "英文",
            temperature: 0.0,
            max_tokens: 512,
            mode,
        }
    }

    fn payload_json(mode: TranslationMode) -> Value {
        serde_json::to_value(build_payload(&job(mode))).unwrap()
    }

    #[test]
    fn chat_payload_has_system_and_user_messages() {
        let body = payload_json(TranslationMode::Chat);

        assert_eq!(body["model"], MODEL_NAME);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");

        let system = messages[0]["content"].as_str().unwrap();
        assert!(system.contains("中文"));
        assert!(system.contains("英文"));

        let user = messages[1]["content"].as_str().unwrap();
        assert!(user.ends_with("今天天气很好"));
        assert!(body.get("prompt").is_none());
    }

    #[test]
    fn completion_payload_is_a_single_prompt() {
        let body = payload_json(TranslationMode::Completion);

        assert_eq!(body["model"], MODEL_NAME);
        assert!(body.get("messages").is_none());

        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("中文"));
        assert!(prompt.contains("英文"));
        assert!(prompt.contains("今天天气很好"));
    }

    #[test]
    fn sampling_parameters_use_upstream_field_names() {
        let mut j = job(TranslationMode::Completion);
        j.temperature = 0.5;
        j.max_tokens = 64;
        let body = serde_json::to_value(build_payload(&j)).unwrap();

        assert_eq!(body["temperature"], json!(0.5));
        assert_eq!(body["max_tokens"], json!(64));
        assert!(body.get("maxTokens").is_none());
    }

    #[test]
    fn mode_selects_endpoint_path() {
        let client = LlmClient::new(&Settings::new("http://gpu-box:8000/"));

        assert_eq!(
            client.endpoint_url(TranslationMode::Chat),
            "http://gpu-box:8000/v1/chat/completions"
        );
        assert_eq!(
            client.endpoint_url(TranslationMode::Completion),
            "http://gpu-box:8000/v1/completions"
        );
    }

    #[test]
    fn extracts_chat_message_content() {
        let response: UpstreamResponse =
            serde_json::from_value(json!({ "choices": [{ "message": { "content": "Hello" } }] }))
                .unwrap();

        assert_eq!(extract_text(TranslationMode::Chat, &response).unwrap(), "Hello");
    }

    #[test]
    fn extracts_completion_text() {
        let response: UpstreamResponse =
            serde_json::from_value(json!({ "choices": [{ "text": "Good weather" }] })).unwrap();

        assert_eq!(
            extract_text(TranslationMode::Completion, &response).unwrap(),
            "Good weather"
        );
    }

    #[test]
    fn wrong_shape_for_mode_is_empty() {
        let response: UpstreamResponse =
            serde_json::from_value(json!({ "choices": [{ "text": "Hello" }] })).unwrap();

        assert!(matches!(
            extract_text(TranslationMode::Chat, &response),
            Err(LlmError::EmptyResult)
        ));
    }

    #[test]
    fn empty_or_missing_choices_are_empty_results() {
        for body in [
            json!({ "choices": [] }),
            json!({ "choices": null }),
            json!({}),
            json!({ "choices": [{ "message": { "content": null } }] }),
            json!({ "choices": [{ "message": { "content": "" } }] }),
        ] {
            let response: UpstreamResponse = serde_json::from_value(body).unwrap();
            assert!(matches!(
                extract_text(TranslationMode::Chat, &response),
                Err(LlmError::EmptyResult)
            ));
        }
    }

    #[test]
    fn mode_deserializes_lowercase_and_defaults_to_chat() {
        let mode: TranslationMode = serde_json::from_value(json!("completion")).unwrap();
        assert_eq!(mode, TranslationMode::Completion);
        assert_eq!(TranslationMode::default(), TranslationMode::Chat);
        assert!(serde_json::from_value::<TranslationMode>(json!("stream")).is_err());
    }
}
