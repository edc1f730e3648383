//! LLM provider facades
//!
//! - **anthropic**: Anthropic Claude facade over a pluggable delegate

pub mod anthropic;

// Re-export the provider struct
pub use anthropic::AnthropicProvider;
