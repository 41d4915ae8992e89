//! Chat turns
//!
//! The presentation layer exclusively owns the ordered turn list for the
//! duration of a session. The resolver is stateless across turns and only
//! ever sees the current utterance, so these types never cross into it.

use serde::{Deserialize, Serialize};

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person typing into the chat
    User,
    /// The assistant's reply
    Assistant,
}

/// One entry of a session's append-only chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who produced this turn
    pub role: ChatRole,
    /// The displayed text
    pub content: String,
}

impl ChatTurn {
    /// A turn authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// A turn authored by the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
