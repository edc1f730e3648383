//! Test helper utilities for anthropic-llm tests
//!
//! This module provides reusable test fixtures and helper functions
//! that are shared across multiple test modules.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::AnthropicConfig;
use crate::core_types::messages::Message;
use crate::core_types::provider::{
    FromCredentials, LlmProvider, LlmResponse, ResponseFormat, TokenUsage, Tool, ToolExecutor,
    ToolUse,
};
use crate::error::{LlmError, LlmResult};

/// Create test configuration with a well-formed explicit key.
///
/// Using an explicit key keeps most tests independent of the process
/// environment and the global credential store.
pub fn create_test_config() -> AnthropicConfig {
    AnthropicConfig {
        api_key: Some("sk-ant-test-key".to_string()),
        model: "claude-haiku-4-5-20251001".to_string(),
    }
}

/// A tool definition fixture.
pub fn weather_tool() -> Tool {
    Tool {
        name: "get_weather".to_string(),
        description: "Look up current weather for a city".to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": { "city": { "type": "string" } },
            "required": ["city"]
        }),
    }
}

/// The canned response every [`StubDelegate`] `complete` call returns.
pub fn stub_response(model: &str) -> LlmResponse {
    LlmResponse {
        content: "stub response".to_string(),
        structured_response: None,
        tool_uses: Vec::new(),
        usage: Some(TokenUsage {
            prompt_tokens: 12,
            completion_tokens: 4,
            total_tokens: 16,
        }),
        model: Some(model.to_string()),
        raw_body: None,
    }
}

/// Arguments captured from a `complete` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteCall {
    pub messages: Vec<Message>,
    pub system: String,
    pub tools: Option<Vec<Tool>>,
    pub max_tokens: u32,
    pub response_format: Option<ResponseFormat>,
    pub json_mode: bool,
}

/// Arguments captured from a `complete_with_tools` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteWithToolsCall {
    pub messages: Vec<Message>,
    pub system: String,
    pub tools: Vec<Tool>,
    pub max_iterations: u32,
}

/// Delegate double that records its construction arguments and every call,
/// replying with canned responses.
#[derive(Debug)]
pub struct StubDelegate {
    pub model: String,
    pub api_key: String,
    pub complete_calls: Mutex<Vec<CompleteCall>>,
    pub complete_with_tools_calls: Mutex<Vec<CompleteWithToolsCall>>,
}

impl FromCredentials for StubDelegate {
    fn from_credentials(model: &str, api_key: &str) -> LlmResult<Self> {
        Ok(Self {
            model: model.to_string(),
            api_key: api_key.to_string(),
            complete_calls: Mutex::new(Vec::new()),
            complete_with_tools_calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LlmProvider for StubDelegate {
    async fn complete(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Option<Vec<Tool>>,
        max_tokens: u32,
        response_format: Option<ResponseFormat>,
        json_mode: bool,
    ) -> LlmResult<LlmResponse> {
        self.complete_calls.lock().unwrap().push(CompleteCall {
            messages,
            system: system.to_string(),
            tools,
            max_tokens,
            response_format,
            json_mode,
        });
        Ok(stub_response(&self.model))
    }

    async fn complete_with_tools(
        &self,
        messages: Vec<Message>,
        system: &str,
        tools: Vec<Tool>,
        tool_executor: &dyn ToolExecutor,
        max_iterations: u32,
    ) -> LlmResult<LlmResponse> {
        // Exercise the executor once so tests can observe the callable
        // arriving intact through the facade.
        let probe = tool_executor.execute(ToolUse {
            id: "toolu_stub".to_string(),
            name: tools
                .first()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "noop".to_string()),
            input: serde_json::json!({}),
        });

        self.complete_with_tools_calls
            .lock()
            .unwrap()
            .push(CompleteWithToolsCall {
                messages,
                system: system.to_string(),
                tools,
                max_iterations,
            });

        Ok(LlmResponse {
            content: probe.content,
            structured_response: None,
            tool_uses: Vec::new(),
            usage: None,
            model: Some(self.model.clone()),
            raw_body: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Delegate whose operations always fail; used to verify that delegate
/// errors pass through the facade untouched.
#[derive(Debug)]
pub struct FailingDelegate;

impl FromCredentials for FailingDelegate {
    fn from_credentials(_model: &str, _api_key: &str) -> LlmResult<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl LlmProvider for FailingDelegate {
    async fn complete(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        _tools: Option<Vec<Tool>>,
        _max_tokens: u32,
        _response_format: Option<ResponseFormat>,
        _json_mode: bool,
    ) -> LlmResult<LlmResponse> {
        Err(LlmError::RateLimitExceeded {
            retry_after_seconds: 30,
        })
    }

    async fn complete_with_tools(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        _tools: Vec<Tool>,
        _tool_executor: &dyn ToolExecutor,
        _max_iterations: u32,
    ) -> LlmResult<LlmResponse> {
        Err(LlmError::Timeout { timeout_seconds: 5 })
    }

    fn provider_name(&self) -> &'static str {
        "failing-stub"
    }
}

/// Delegate that refuses construction; used to verify constructor error
/// propagation and check ordering.
#[derive(Debug)]
pub struct UnbuildableDelegate;

impl FromCredentials for UnbuildableDelegate {
    fn from_credentials(_model: &str, _api_key: &str) -> LlmResult<Self> {
        Err(LlmError::ConfigurationError {
            message: "delegate backend unavailable".to_string(),
        })
    }
}

#[async_trait]
impl LlmProvider for UnbuildableDelegate {
    async fn complete(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        _tools: Option<Vec<Tool>>,
        _max_tokens: u32,
        _response_format: Option<ResponseFormat>,
        _json_mode: bool,
    ) -> LlmResult<LlmResponse> {
        unreachable!("UnbuildableDelegate is never constructed")
    }

    async fn complete_with_tools(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        _tools: Vec<Tool>,
        _tool_executor: &dyn ToolExecutor,
        _max_iterations: u32,
    ) -> LlmResult<LlmResponse> {
        unreachable!("UnbuildableDelegate is never constructed")
    }

    fn provider_name(&self) -> &'static str {
        "unbuildable-stub"
    }
}
