//! Core types shared by the provider facade and its delegates
//!
//! ## Organization
//! - `messages` - transcript message model
//! - `provider` - delegate contract and request/response types

pub mod messages;
pub mod provider;

// Re-export commonly used types
pub use messages::{Message, MessageContent, MessageRole};
pub use provider::{
    FromCredentials, LlmProvider, LlmResponse, ResponseFormat, TokenUsage, Tool, ToolExecutor,
    ToolResult, ToolUse, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_TOKENS,
};
