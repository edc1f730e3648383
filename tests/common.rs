//! Test helper utilities for anthropic-llm integration tests
//!
//! This module provides reusable fixtures shared across integration test
//! files. Everything here goes through the crate's public API only.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anthropic_llm::{
    CredentialStore, FromCredentials, LlmProvider, LlmResponse, LlmResult, Message,
    ResponseFormat, TokenUsage, Tool, ToolExecutor, ToolUse,
};
use async_trait::async_trait;

/// Delegate double that records its construction arguments and replies with
/// a canned response.
#[derive(Debug)]
pub struct RecordingDelegate {
    pub model: String,
    pub api_key: String,
    pub complete_count: Mutex<u32>,
}

impl FromCredentials for RecordingDelegate {
    fn from_credentials(model: &str, api_key: &str) -> LlmResult<Self> {
        Ok(Self {
            model: model.to_string(),
            api_key: api_key.to_string(),
            complete_count: Mutex::new(0),
        })
    }
}

#[async_trait]
impl LlmProvider for RecordingDelegate {
    async fn complete(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        _tools: Option<Vec<Tool>>,
        _max_tokens: u32,
        _response_format: Option<ResponseFormat>,
        _json_mode: bool,
    ) -> LlmResult<LlmResponse> {
        *self.complete_count.lock().unwrap() += 1;
        Ok(LlmResponse {
            content: "recorded".to_string(),
            structured_response: None,
            tool_uses: Vec::new(),
            usage: Some(TokenUsage {
                prompt_tokens: 8,
                completion_tokens: 2,
                total_tokens: 10,
            }),
            model: Some(self.model.clone()),
            raw_body: None,
        })
    }

    async fn complete_with_tools(
        &self,
        _messages: Vec<Message>,
        _system: &str,
        tools: Vec<Tool>,
        tool_executor: &dyn ToolExecutor,
        _max_iterations: u32,
    ) -> LlmResult<LlmResponse> {
        let probe = tool_executor.execute(ToolUse {
            id: "toolu_integration".to_string(),
            name: tools
                .first()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "noop".to_string()),
            input: serde_json::json!({}),
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
        "recording-stub"
    }
}

/// In-memory credential store backed by a fixed map.
pub struct MapStore {
    entries: HashMap<String, String>,
}

impl MapStore {
    pub fn with_entry(provider: &str, key: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(provider.to_string(), key.to_string());
        Self { entries }
    }
}

impl CredentialStore for MapStore {
    fn is_available(&self, provider: &str) -> bool {
        self.entries.contains_key(provider)
    }

    fn get(&self, provider: &str) -> Option<String> {
        self.entries.get(provider).cloned()
    }
}
