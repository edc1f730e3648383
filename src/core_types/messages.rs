//! Message model for LLM interactions
//!
//! Provider-agnostic transcript entries. The facade forwards these
//! untouched; delegates consume them and extend the transcript with
//! tool-use and tool-result entries while looping.

use serde::{Deserialize, Serialize};

use crate::core_types::provider::{ToolResult, ToolUse};

/// Message roles for LLM interactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message content types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Tool invocation requested by the model
    ToolUse(ToolUse),
    /// Tool execution result fed back to the model
    ToolResult(ToolResult),
}

impl std::fmt::Display for MessageContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageContent::Text(text) => write!(f, "{}", text),
            MessageContent::ToolUse(tool_use) => {
                write!(
                    f,
                    "Tool use: {} with input: {}",
                    tool_use.name,
                    serde_json::to_string(&tool_use.input).unwrap_or_default()
                )
            }
            MessageContent::ToolResult(result) => {
                if result.is_error {
                    write!(f, "Error: {}", result.content)
                } else {
                    write!(f, "{}", result.content)
                }
            }
        }
    }
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: MessageContent,
}

impl Message {
    /// Text message with the system role.
    ///
    /// The system prompt is usually passed to `complete` separately; this
    /// exists for transcripts imported from sources that inline it.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Text message with the user role.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Text message with the assistant role.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Assistant message carrying a tool invocation.
    pub fn tool_use(tool_use: ToolUse) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::ToolUse(tool_use),
        }
    }

    /// User message carrying a tool execution result.
    pub fn tool_result(result: ToolResult) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::ToolResult(result),
        }
    }

    /// The plain text of this message, if it carries any.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            _ => None,
        }
    }
}
