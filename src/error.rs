//! Error types for provider operations.
//!
//! This module provides structured error handling for anthropic-llm,
//! including categorization, severity levels, and retry guidance.
//!
//! # Error Types
//!
//! [`CredentialError`] covers everything that can go wrong while sourcing
//! and validating an API key at provider construction. [`LlmError`] is the
//! shared error language between the facade and its delegates:
//! - Credential and configuration errors (fatal at construction)
//! - Request failures (network issues, backend errors)
//! - Rate limiting and timeouts
//! - Authentication failures
//! - Token limit exceeded
//! - Tool execution failures
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use anthropic_llm::{LlmError, LlmResult};
//!
//! fn handle_error(err: LlmError) {
//!     // Check if we should retry
//!     if err.is_retryable() {
//!         println!("Retryable error: {}", err);
//!     }
//!
//!     // Get user-friendly message
//!     let user_msg = err.user_message();
//!     println!("Tell user: {}", user_msg);
//!
//!     // Check error category for routing
//!     match err.category() {
//!         anthropic_llm::error::ErrorCategory::Transient => {
//!             println!("Temporary issue, try again later");
//!         }
//!         anthropic_llm::error::ErrorCategory::Client => {
//!             println!("Fix the request and try again");
//!         }
//!         _ => {
//!             println!("System issue, contact support");
//!         }
//!     }
//! }
//! ```
//!
//! # Result Type
//!
//! Use [`LlmResult<T>`] as a convenient alias for `Result<T, LlmError>`.

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`LlmError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (the delegate's backend, network issues).
    ///
    /// The backend or network had an issue. May be transient or indicate
    /// an outage.
    External,

    /// Client errors (invalid input, authentication, configuration).
    ///
    /// The caller made a mistake that they can fix (wrong API key,
    /// invalid parameters, etc.).
    Client,

    /// Temporary failures that should be retried.
    ///
    /// Rate limits, timeouts, and other transient issues. Retry
    /// with exponential backoff.
    Transient,
}

/// Severity level for logging and alerting decisions.
///
/// Use [`LlmError::severity()`] to get the severity for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    ///
    /// Should be logged and investigated but not urgent.
    Error,

    /// Unexpected but recoverable situation.
    ///
    /// Worth logging for monitoring but may not require action.
    Warning,

    /// Expected failure (e.g., validation error).
    ///
    /// Normal operation, log at info/debug level.
    Info,
}

// ============================================================================
// Credential errors
// ============================================================================

/// Rejections produced while sourcing and validating an Anthropic API key.
///
/// All variants are fatal and non-retryable. They surface synchronously from
/// provider construction; a constructed provider never re-checks its key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// No key was supplied and no configured source yielded one.
    ///
    /// This is a configuration problem, not a format problem: nothing was
    /// found to validate.
    #[error("Anthropic API key required. Set ANTHROPIC_API_KEY env var or pass api_key.")]
    Missing,

    /// The raw key is empty or entirely whitespace.
    #[error(
        "Anthropic API key is empty or contains only whitespace. \
         Check your ANTHROPIC_API_KEY environment variable or api_key parameter."
    )]
    EmptyOrWhitespace,

    /// The raw, unstripped key contains a newline, carriage return, tab,
    /// vertical tab, or form feed.
    #[error(
        "Anthropic API key contains control characters (newline, tab, etc.). \
         This is likely a copy-paste error. Please check your key."
    )]
    ControlCharacters,

    /// The trimmed key is wrapped in a matching pair of quotes.
    #[error(
        "Anthropic API key appears to be quoted. \
         Remove the surrounding quotes from your configuration."
    )]
    QuotedKey,

    /// The trimmed key does not start with the expected `sk-ant-` prefix.
    #[error(
        "Anthropic API key has unexpected format (expected to start with 'sk-ant-'). \
         Received key starting with: '{prefix}...'"
    )]
    UnexpectedFormat {
        /// The first characters of the rejected key, for diagnostics.
        prefix: String,
    },
}

// ============================================================================
// LLM Error types
// ============================================================================

/// Convenient result type for provider operations.
///
/// Alias for `Result<T, LlmError>`.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur during provider operations.
///
/// Each variant can be:
/// - Categorized via [`category()`](Self::category)
/// - Assessed for severity via [`severity()`](Self::severity)
/// - Checked for retryability via [`is_retryable()`](Self::is_retryable)
/// - Converted to user-friendly messages via [`user_message()`](Self::user_message)
///
/// The facade only ever produces `Credential` and `ConfigurationError`
/// itself; the remaining variants are the vocabulary delegates report
/// failures in, passed through the facade untouched.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use anthropic_llm::LlmError;
///
/// // These methods log automatically
/// let err = LlmError::configuration_error("Missing model identifier");
/// let err = LlmError::rate_limit_exceeded(60);
/// let err = LlmError::timeout(30);
/// ```
///
/// # Error Categories
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `Credential` | Client | No |
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `ResponseParsingError` | External | No |
/// | `RateLimitExceeded` | Transient | Yes |
/// | `Timeout` | Transient | Yes |
/// | `AuthenticationFailed` | Client | No |
/// | `TokenLimitExceeded` | Client | No |
/// | `ToolExecutionFailed` | External | No |
#[derive(Error, Debug)]
pub enum LlmError {
    /// API key resolution or validation failed at construction time.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Provider configuration is invalid or incomplete.
    #[error("Provider configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The delegate's request to its backend failed.
    ///
    /// This is a general failure that may be retryable. Check the source
    /// error for more details about the underlying cause.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend returned a response that couldn't be parsed.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// Backend rate limit exceeded.
    ///
    /// Wait the indicated time before retrying.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Recommended wait time before retrying.
        retry_after_seconds: u64,
    },

    /// Request timed out.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// Authentication with the backend failed.
    ///
    /// The key passed construction-time format checks but the backend
    /// rejected it. Not retryable without fixing the credential.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },

    /// Request exceeds the model's token limit.
    #[error("Token limit exceeded: {current} > {max}")]
    TokenLimitExceeded {
        /// The actual token count of the request.
        current: usize,
        /// The maximum allowed tokens for the model.
        max: usize,
    },

    /// A tool execution failed inside the delegate's tool loop.
    #[error("Tool execution failed: {tool_name} - {message}")]
    ToolExecutionFailed {
        /// The name of the tool that failed.
        tool_name: String,
        /// Details about the failure.
        message: String,
    },
}

impl LlmError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Credential(_) => ErrorCategory::Client,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::TokenLimitExceeded { .. } => ErrorCategory::Client,
            Self::ToolExecutionFailed { .. } => ErrorCategory::External,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Credential(_) => ErrorSeverity::Error,
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::RateLimitExceeded { .. } => ErrorSeverity::Warning,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::TokenLimitExceeded { .. } => ErrorSeverity::Info,
            Self::ToolExecutionFailed { .. } => ErrorSeverity::Error,
        }
    }

    /// Whether this error is transient and should trigger a retry.
    ///
    /// Returns `true` for rate limits, timeouts, and general request
    /// failures. Credential errors are never retryable: the same key will
    /// fail the same way until the configuration changes.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded { .. } | Self::Timeout { .. } | Self::RequestFailed { .. }
        )
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// Returns a message that's safe to show to end users - technical
    /// details and internal information are stripped or generalized.
    pub fn user_message(&self) -> String {
        match self {
            Self::Credential(_) => {
                "AI service credentials are invalid. Please check your API key".to_string()
            }
            Self::ConfigurationError { .. } => {
                "AI service configuration issue. Please check your settings".to_string()
            }
            Self::RequestFailed { .. } => {
                "Unable to communicate with AI service. Please try again".to_string()
            }
            Self::ResponseParsingError { .. } => {
                "Received an invalid response from AI service".to_string()
            }
            Self::RateLimitExceeded {
                retry_after_seconds,
            } => {
                format!("Service is busy. Please wait {retry_after_seconds} seconds and try again")
            }
            Self::Timeout { .. } => "Request timed out. Please try again".to_string(),
            Self::AuthenticationFailed { .. } => {
                "Authentication failed. Please check your credentials".to_string()
            }
            Self::TokenLimitExceeded { .. } => {
                "Your request is too long. Please shorten it and try again".to_string()
            }
            Self::ToolExecutionFailed { .. } => {
                "Unable to execute the requested action".to_string()
            }
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Wrap a credential rejection (logs at ERROR level).
    pub fn credential(error: CredentialError) -> Self {
        log_error!(
            error_type = "credential_error",
            message = %error,
            "Anthropic API key rejected"
        );
        Self::Credential(error)
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Provider configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "LLM request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "LLM response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "LLM backend rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "LLM request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "LLM backend authentication failed"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn token_limit_exceeded(current: usize, max: usize) -> Self {
        log_warn!(
            error_type = "token_limit_exceeded",
            current_tokens = current,
            max_tokens = max,
            "Request exceeds LLM token limit"
        );
        Self::TokenLimitExceeded { current, max }
    }

    pub fn tool_execution_failed(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        let message = message.into();
        log_error!(
            error_type = "tool_execution_failed",
            tool_name = %tool_name,
            message = %message,
            "LLM tool execution failed"
        );
        Self::ToolExecutionFailed { tool_name, message }
    }
}
