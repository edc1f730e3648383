//! # anthropic-llm
//!
//! Anthropic Claude provider facade over a pluggable LLM delegate.
//!
//! The provider itself carries no transport, retry, or streaming logic: it
//! sources and validates an API key at construction time, builds a delegate
//! from `(model, api_key)`, and forwards `complete` and
//! `complete_with_tools` to it unchanged. Existing call sites keep the
//! `AnthropicProvider` entry point while the delegate supplies the unified
//! request handling.
//!
//! ## Key Features
//!
//! - **Layered credential resolution**: explicit key, then an installed
//!   [`CredentialStore`], then the `ANTHROPIC_API_KEY` environment variable
//! - **Key validation**: copy-paste and format mistakes rejected at
//!   construction with actionable messages
//! - **Pass-through delegation**: every operation parameter is forwarded to
//!   the delegate unchanged, and its responses and errors come back untouched
//!
//! ## Example
//!
//! ```rust
//! use anthropic_llm::validate_api_key;
//!
//! # fn main() -> Result<(), anthropic_llm::CredentialError> {
//! // Keys are normalized once, at provider construction.
//! let key = validate_api_key("  sk-ant-example-key  ")?;
//! assert_eq!(key, "sk-ant-example-key");
//! # Ok(())
//! # }
//! ```
//!
//! Constructing a provider requires a delegate type implementing both
//! [`LlmProvider`] and [`FromCredentials`]; see [`AnthropicProvider`].

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Core types for the delegate contract and message model
pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod credentials;
pub mod error;
pub mod providers;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{AnthropicConfig, DEFAULT_MODEL};
pub use credentials::validation::{validate_api_key, KEY_PREFIX};
pub use credentials::{
    install_store, resolve_api_key, CredentialStore, KeySource, ResolvedKey, API_KEY_ENV,
    PROVIDER_NAME,
};
pub use error::{CredentialError, LlmError, LlmResult};
pub use providers::AnthropicProvider;

// Re-export core types (messages and the delegate contract)
pub use core_types::{
    FromCredentials,
    LlmProvider,
    LlmResponse,
    Message,
    MessageContent,
    MessageRole,
    ResponseFormat,
    TokenUsage,
    Tool,
    ToolExecutor,
    ToolResult,
    ToolUse,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_TOKENS,
};
