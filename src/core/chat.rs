//! Chat session: append-only history relayed to a chat-completion backend.
//!
//! The session is a plain value. Each turn takes it by value and hands it
//! back inside `ChatTurn`, together with what happened and whether the
//! input field must be cleared.

use crate::errors::AppResult;
use crate::models::chat::ChatMessage;
use tracing::{debug, info};

/// Anything able to answer a conversation.
pub trait ChatCompletion {
    /// One synchronous call; `messages` is the full history, oldest first.
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> AppResult<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank prompt: nothing sent, history untouched.
    Ignored,
    Replied(String),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub session: ChatSession,
    pub outcome: TurnOutcome,
    /// Render loop must empty the input field.
    pub clear_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    model: String,
    history: Vec<ChatMessage>,
    state: ChatState,
}

impl ChatSession {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            history: Vec::new(),
            state: ChatState::Idle,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    /// Idle → AwaitingReply → Idle. No retry on failure; the user message
    /// stays in history so the user can simply ask again.
    ///
    /// A non-blank prompt is stored and sent exactly as typed.
    pub fn submit<C: ChatCompletion + ?Sized>(mut self, prompt: &str, client: &C) -> ChatTurn {
        if prompt.trim().is_empty() {
            return ChatTurn {
                session: self,
                outcome: TurnOutcome::Ignored,
                clear_input: false,
            };
        }

        self.history.push(ChatMessage::user(prompt));
        self.state = ChatState::AwaitingReply;
        info!(turns = self.history.len(), model = %self.model, "sending chat request");

        let outcome = match client.complete(&self.model, &self.history) {
            Ok(answer) => {
                self.history.push(ChatMessage::assistant(&answer));
                TurnOutcome::Replied(answer)
            }
            Err(e) => {
                debug!(error = %e, "chat request failed");
                TurnOutcome::Failed {
                    error: format!("Failed to generate a response: {e}"),
                }
            }
        };

        self.state = ChatState::Idle;
        ChatTurn {
            session: self,
            outcome,
            clear_input: true,
        }
    }

    /// "You:" / "AI:" blocks, content wrapped to `width` columns.
    pub fn transcript(&self, width: usize) -> String {
        self.history
            .iter()
            .map(|msg| format_message(msg, width))
            .collect()
    }
}

pub fn format_message(msg: &ChatMessage, width: usize) -> String {
    let mut out = format!("{}:\n", msg.role.label());
    for line in textwrap::wrap(&msg.content, width.max(20)) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
