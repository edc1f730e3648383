//! API key format validation
//!
//! A fixed sequence of sanity checks applied once, at provider construction.
//! Earlier checks take precedence when several would apply.

use crate::error::CredentialError;

/// Required prefix of every Anthropic API key.
pub const KEY_PREFIX: &str = "sk-ant-";

/// Characters treated as copy-paste artifacts. Checked on the raw,
/// unstripped input so a trailing newline is reported, not silently trimmed.
const CONTROL_CHARS: [char; 5] = ['\n', '\r', '\t', '\u{000B}', '\u{000C}'];

/// Number of leading characters echoed back in format diagnostics.
const DIAGNOSTIC_PREFIX_LEN: usize = 10;

/// Validate and normalize an Anthropic API key.
///
/// Returns the trimmed key, or the first failing check as a
/// [`CredentialError`]. Re-validating the returned value is a no-op.
pub fn validate_api_key(raw: &str) -> Result<String, CredentialError> {
    if raw.trim().is_empty() {
        return Err(CredentialError::EmptyOrWhitespace);
    }

    if raw.chars().any(|c| CONTROL_CHARS.contains(&c)) {
        return Err(CredentialError::ControlCharacters);
    }

    let normalized = raw.trim();

    if is_quote_wrapped(normalized) {
        return Err(CredentialError::QuotedKey);
    }

    if !normalized.starts_with(KEY_PREFIX) {
        return Err(CredentialError::UnexpectedFormat {
            prefix: normalized.chars().take(DIAGNOSTIC_PREFIX_LEN).collect(),
        });
    }

    Ok(normalized.to_string())
}

/// A common configuration mistake: the key pasted together with the quotes
/// that surrounded it in a shell or config file.
fn is_quote_wrapped(candidate: &str) -> bool {
    (candidate.starts_with('"') && candidate.ends_with('"'))
        || (candidate.starts_with('\'') && candidate.ends_with('\''))
}
