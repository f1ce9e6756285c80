//! Chat module - transcript state for the floating assistant widget

pub mod gateway;
pub mod gemini;

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::{ChatMessage, Role};

pub use gateway::{InferenceBackend, InferenceError, InferenceGateway, EMPTY_REPLY, FALLBACK_REPLY};

pub const WELCOME_MESSAGE: &str =
    "Wake up, Neo... I mean, Jason. The system is online. Ask me about design systems.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    /// 有一个请求在途，禁止再次发送
    Awaiting,
}

/// Ordered transcript plus the single in-flight inference request.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// 输入框内容
    pub input: String,
    state: ChatState,
    pending: Option<Receiver<String>>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::with_welcome(WELCOME_MESSAGE)
    }

    pub fn with_welcome(welcome: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Model, welcome, now_millis())],
            input: String::new(),
            state: ChatState::Idle,
            pending: None,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ChatState::Awaiting
    }

    /// Whether the send action should be enabled
    pub fn can_submit(&self) -> bool {
        self.state == ChatState::Idle && !self.input.trim().is_empty()
    }

    /// Send the input buffer. Returns `false` (and changes nothing) when the
    /// buffer is blank or a request is already in flight.
    pub fn submit(&mut self, gateway: &Arc<InferenceGateway>) -> bool {
        self.submit_with_notify(gateway, || {})
    }

    /// Like [`submit`](Self::submit); `notify` runs on the worker once the
    /// reply is ready (the GUI uses it to request a repaint).
    pub fn submit_with_notify<F>(&mut self, gateway: &Arc<InferenceGateway>, notify: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.can_submit() {
            return false;
        }

        let text = std::mem::take(&mut self.input);
        let history = self.messages.clone();
        self.push(Role::User, text.clone());
        self.state = ChatState::Awaiting;

        let (tx, rx) = mpsc::channel();
        let gateway = Arc::clone(gateway);
        let spawned = thread::Builder::new()
            .name("chat-inference".to_string())
            .spawn(move || {
                let reply = gateway.complete(&history, &text);
                // 接收端已释放时丢弃结果即可
                let _ = tx.send(reply);
                notify();
            });

        match spawned {
            Ok(_) => self.pending = Some(rx),
            Err(e) => {
                tracing::error!(error = %e, "failed to start inference worker");
                self.finish(FALLBACK_REPLY.to_string());
            }
        }
        true
    }

    /// Non-blocking: apply the reply if it has arrived. Returns `true` when
    /// the transcript changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(reply) => {
                self.finish(reply);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("inference worker exited without a reply");
                self.finish(FALLBACK_REPLY.to_string());
                true
            }
        }
    }

    /// Block until the in-flight request (if any) completes.
    pub fn wait(&mut self) {
        let Some(rx) = self.pending.take() else {
            return;
        };
        let reply = rx.recv().unwrap_or_else(|_| {
            tracing::error!("inference worker exited without a reply");
            FALLBACK_REPLY.to_string()
        });
        self.finish(reply);
    }

    fn finish(&mut self, reply: String) {
        self.pending = None;
        self.push(Role::Model, reply);
        self.state = ChatState::Idle;
    }

    fn push(&mut self, role: Role, text: String) {
        // 时间戳单调不减
        let last = self.messages.last().map_or(0, |m| m.timestamp);
        let timestamp = now_millis().max(last);
        self.messages.push(ChatMessage::new(role, text, timestamp));
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
