//! Inference gateway - boundary to the text-generation backend

use serde::Serialize;
use thiserror::Error;

use crate::models::{ChatMessage, Role};

pub const SYSTEM_INSTRUCTION: &str = "\
You are \"Portfolio Bot\", an AI assistant living on the portfolio website of a Senior UX Designer specializing in Fintech.
Your tone is professional, concise, slightly technical, but friendly.
The designer loves minimal design, data visualization, and street photography.
Answer questions about their experience (assume they have 8 years experience, expert in React, Figma, and Financial Data viz).
If asked about contact info, suggest emailing 'hello@uxdesigner.tech'.
Keep answers short (under 100 words) unless asked for details.
";

/// Shown when the backend answers with nothing
pub const EMPTY_REPLY: &str =
    "I'm processing that data point, but couldn't generate a response right now.";

/// Shown for every failed call
pub const FALLBACK_REPLY: &str =
    "Connection to the neural interface interrupted. Please try again later.";

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingCredential,
    #[error("inference backend unavailable: {0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

/// One role-tagged history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(msg: &ChatMessage) -> Self {
        Content::text(msg.role, msg.text.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRequest {
    pub system_instruction: String,
    pub history: Vec<Content>,
    pub message: String,
}

/// Text-completion service. One call per request, no retries.
pub trait InferenceBackend: Send + Sync {
    fn generate(&self, request: &InferenceRequest) -> Result<String, InferenceError>;
}

/// Used when the real backend could not be set up at startup
pub struct OfflineBackend {
    reason: String,
}

impl OfflineBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl InferenceBackend for OfflineBackend {
    fn generate(&self, _request: &InferenceRequest) -> Result<String, InferenceError> {
        Err(InferenceError::Unavailable(self.reason.clone()))
    }
}

pub struct InferenceGateway {
    backend: Box<dyn InferenceBackend>,
    system_instruction: String,
}

impl InferenceGateway {
    pub fn new(backend: Box<dyn InferenceBackend>) -> Self {
        Self {
            backend,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn request(&self, history: &[ChatMessage], message: &str) -> InferenceRequest {
        InferenceRequest {
            system_instruction: self.system_instruction.clone(),
            history: history.iter().map(Content::from).collect(),
            message: message.to_string(),
        }
    }

    /// Always returns display text: the reply, [`EMPTY_REPLY`] for a blank
    /// answer, or [`FALLBACK_REPLY`] on any error.
    pub fn complete(&self, history: &[ChatMessage], message: &str) -> String {
        let request = self.request(history, message);
        match self.backend.generate(&request) {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("inference returned an empty reply");
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "inference failed");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
