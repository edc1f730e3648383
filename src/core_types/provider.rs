//! Provider trait and types for LLM delegation
//!
//! Defines the `LlmProvider` contract that backend delegates implement,
//! the `FromCredentials` construction contract, and the request/response
//! types shared across that boundary. The facade and its delegates speak
//! exactly this vocabulary; transport, retries, and the tool loop live
//! entirely behind the trait.

use serde::{Deserialize, Serialize};

use crate::core_types::messages::Message;
use crate::error::LlmResult;

/// Default token budget for a completion when the caller has no opinion.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Default cap on tool-calling rounds before a delegate must stop looping.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Tool definition for LLM operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Tool name - must be unique within a request
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema defining the tool's input parameters
    pub parameters: serde_json::Value,
}

/// Tool invocation requested by the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolUse {
    /// Unique identifier for this invocation
    pub id: String,
    /// Name of the tool to invoke
    pub name: String,
    /// Arguments to pass to the tool (as JSON)
    pub input: serde_json::Value,
}

/// Tool execution result to send back to the model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    /// ID of the tool use this is responding to
    pub tool_use_id: String,
    /// Result content from the tool execution
    pub content: String,
    /// Whether this result represents an error
    pub is_error: bool,
}

/// Response format specification for structured output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseFormat {
    /// Name of the JSON schema
    pub name: String,
    /// JSON schema specification
    pub schema: serde_json::Value,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used (prompt + completion)
    pub total_tokens: u32,
}

/// Response from LLM operations
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Primary text content of the response
    pub content: String,
    /// Structured JSON response (if response_format was specified)
    pub structured_response: Option<serde_json::Value>,
    /// Tool invocations requested by the model (if any)
    pub tool_uses: Vec<ToolUse>,
    /// Token usage information
    pub usage: Option<TokenUsage>,
    /// Model that generated the response
    pub model: Option<String>,
    /// Raw response body for debugging
    pub raw_body: Option<String>,
}

/// Executes a single tool invocation on behalf of a delegate's tool loop.
///
/// Implemented for free by any matching closure, so callers can pass
/// `&|tool_use| ...` directly.
pub trait ToolExecutor: Send + Sync {
    fn execute(&self, tool_use: ToolUse) -> ToolResult;
}

impl<F> ToolExecutor for F
where
    F: Fn(ToolUse) -> ToolResult + Send + Sync,
{
    fn execute(&self, tool_use: ToolUse) -> ToolResult {
        self(tool_use)
    }
}

/// Construction contract for delegates.
///
/// A delegate is built from exactly a model identifier and a validated API
/// key; everything else it needs it must default internally.
pub trait FromCredentials: Sized {
    fn from_credentials(model: &str, api_key: &str) -> LlmResult<Self>;
}

/// Trait for LLM providers to implement
///
/// This is the contract between the facade and backend delegates, and the
/// facade implements it itself by pure delegation, so a wrapped provider is
/// substitutable wherever a delegate is.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a single completion.
    async fn complete(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Option<Vec<Tool>>,
        max_tokens: u32,
        response_format: Option<ResponseFormat>,
        json_mode: bool,
    ) -> LlmResult<LlmResponse>;

    /// Run a tool-use loop until the model produces a final response.
    ///
    /// The implementation executes each requested tool through
    /// `tool_executor` and feeds results back, up to `max_iterations`
    /// rounds.
    async fn complete_with_tools(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Vec<Tool>,
        tool_executor: &dyn ToolExecutor,
        max_iterations: u32,
    ) -> LlmResult<LlmResponse>;

    /// Get provider name for logging and debugging
    fn provider_name(&self) -> &'static str;
}
