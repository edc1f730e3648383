//! Anthropic provider facade
//!
//! Backward-compatible entry point: sources and validates an API key at
//! construction, then forwards every operation to a delegate built from
//! `(model, api_key)`. The delegate owns transport, retries, streaming,
//! and the tool loop; nothing is intercepted on the way through.

use async_trait::async_trait;

use crate::config::AnthropicConfig;
use crate::credentials::validation::validate_api_key;
use crate::credentials::{self, PROVIDER_NAME};
use crate::core_types::messages::Message;
use crate::core_types::provider::{
    FromCredentials, LlmProvider, LlmResponse, ResponseFormat, Tool, ToolExecutor,
};
use crate::error::{CredentialError, LlmError, LlmResult};
use crate::logging::log_debug;

/// Anthropic Claude provider.
///
/// A thin wrapper over a delegate `D`: existing call sites keep this entry
/// point while the delegate supplies the unified request handling.
///
/// Construction either fully succeeds or fails; the stored key of a live
/// instance is always non-empty, control-character-free, unquoted, and
/// `sk-ant-`-prefixed, and is never re-checked afterwards.
#[derive(Debug)]
pub struct AnthropicProvider<D> {
    model: String,
    api_key: String,
    delegate: D,
}

impl<D> AnthropicProvider<D>
where
    D: LlmProvider + FromCredentials,
{
    /// Create a provider from configuration.
    ///
    /// The key is resolved from the explicit `api_key`, then the installed
    /// credential store, then `ANTHROPIC_API_KEY`, and validated before the
    /// delegate is built. Total absence fails with
    /// [`CredentialError::Missing`]; a malformed key fails with the
    /// validator's own rejection, propagated verbatim.
    pub fn new(config: AnthropicConfig) -> LlmResult<Self> {
        let resolved = credentials::resolve_api_key(config.api_key.as_deref())
            .ok_or_else(|| LlmError::credential(CredentialError::Missing))?;

        let api_key = validate_api_key(&resolved.value).map_err(LlmError::credential)?;

        let delegate = D::from_credentials(&config.model, &api_key)?;

        log_debug!(
            provider = PROVIDER_NAME,
            model = %config.model,
            key_source = %resolved.source,
            "Anthropic provider initialized"
        );

        Ok(Self {
            model: config.model,
            api_key,
            delegate,
        })
    }

    /// Create a provider with the default model, sourcing the key from the
    /// credential store or environment.
    pub fn from_env() -> LlmResult<Self> {
        Self::new(AnthropicConfig::default())
    }

    /// The model identifier handed to the delegate.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The normalized API key held for the provider's lifetime.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The delegate that receives every forwarded call.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }
}

/// Pure pass-through: every parameter is forwarded unchanged and the
/// delegate's result comes back unchanged, errors included.
#[async_trait]
impl<D> LlmProvider for AnthropicProvider<D>
where
    D: LlmProvider,
{
    async fn complete(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Option<Vec<Tool>>,
        max_tokens: u32,
        response_format: Option<ResponseFormat>,
        json_mode: bool,
    ) -> LlmResult<LlmResponse> {
        self.delegate
            .complete(
                messages,
                system,
                tools,
                max_tokens,
                response_format,
                json_mode,
            )
            .await
    }

    async fn complete_with_tools(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Vec<Tool>,
        tool_executor: &dyn ToolExecutor,
        max_iterations: u32,
    ) -> LlmResult<LlmResponse> {
        self.delegate
            .complete_with_tools(messages, system, tools, tool_executor, max_iterations)
            .await
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
