//! Gemini `generateContent` backend (blocking, runs on the chat worker thread)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::gateway::{Content, InferenceBackend, InferenceError, InferenceRequest, Part};
use crate::models::Role;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables searched for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

/// Read the API key once. A missing key is not an error here; it turns into
/// a failed reply on the first chat message.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

pub struct GeminiBackend {
    client: reqwest::blocking::Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    pub fn new(config: GeminiConfig) -> Result<Self, InferenceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        if config.api_key.is_none() {
            tracing::warn!("no Gemini API key found, chat replies will fail");
        }
        Ok(Self { client, config })
    }

    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl InferenceBackend for GeminiBackend {
    fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InferenceError::MissingCredential)?;

        let body = GenerateContentRequest::from_request(request);
        tracing::debug!(model = %self.config.model, turns = body.contents.len(), "sending generateContent");

        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        Ok(parsed.text())
    }
}

// ========== Wire format ==========

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

impl GenerateContentRequest {
    fn from_request(request: &InferenceRequest) -> Self {
        let mut contents = request.history.clone();
        contents.push(Content::text(Role::User, request.message.clone()));
        Self {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            contents,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// 第一个候选的全部文本片段拼接；被拦截或无候选时为空串
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
