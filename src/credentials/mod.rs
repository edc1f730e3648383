//! Credential sourcing for the Anthropic provider
//!
//! Layered resolution of the API key: explicit argument, then an optionally
//! installed [`CredentialStore`], then the `ANTHROPIC_API_KEY` environment
//! variable. The store is a capability registered at most once per process;
//! a deployment without one is an expected variant, not an error.

pub mod validation;

use once_cell::sync::OnceCell;

use crate::logging::log_debug;

/// Provider identifier used for credential store lookups.
pub const PROVIDER_NAME: &str = "anthropic";

/// Environment variable consulted when no other source yields a key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Pluggable store that may hold encrypted or managed API keys, queried by
/// provider name.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    /// Whether the store holds a credential for `provider`.
    fn is_available(&self, provider: &str) -> bool;

    /// Fetch the credential for `provider`, if the store can produce it.
    fn get(&self, provider: &str) -> Option<String>;
}

static STORE: OnceCell<Box<dyn CredentialStore>> = OnceCell::new();

/// Register the process-wide credential store.
///
/// At most one store can be installed; a second call leaves the first store
/// in place and hands the rejected store back to the caller.
pub fn install_store(store: Box<dyn CredentialStore>) -> Result<(), Box<dyn CredentialStore>> {
    let result = STORE.set(store);
    if result.is_ok() {
        log_debug!(provider = PROVIDER_NAME, "Credential store installed");
    }
    result
}

/// The installed credential store, if any component registered one.
pub fn installed_store() -> Option<&'static dyn CredentialStore> {
    STORE.get().map(Box::as_ref)
}

/// Which layer of the resolution chain produced a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Explicit `api_key` argument.
    Argument,
    /// Installed credential store.
    Store,
    /// `ANTHROPIC_API_KEY` environment variable.
    Environment,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::Argument => write!(f, "argument"),
            KeySource::Store => write!(f, "credential-store"),
            KeySource::Environment => write!(f, "environment"),
        }
    }
}

/// A raw key together with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    /// The raw credential, not yet validated or trimmed.
    pub value: String,
    /// The resolution layer that won.
    pub source: KeySource,
}

/// Resolve a raw API key from the layered sources.
///
/// An explicit key always wins, even over a populated store and environment,
/// and even when it is empty - presence is decided by `Option`, and a bad
/// explicit value should fail validation rather than silently fall through
/// to an unrelated source. The store and the environment have no such
/// presence signal of their own, so an empty value from either is treated
/// as no-value and resolution keeps going. Returns `None` when no source
/// yields a value; the caller decides whether absence is fatal.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<ResolvedKey> {
    resolve_from(explicit, installed_store())
}

/// Resolution core with an injectable store.
///
/// The precedence is an ordered list of lookup strategies, evaluated until
/// one yields a value, so the order stays auditable in one place.
pub(crate) fn resolve_from(
    explicit: Option<&str>,
    store: Option<&dyn CredentialStore>,
) -> Option<ResolvedKey> {
    let lookups: [(KeySource, Box<dyn Fn() -> Option<String> + '_>); 3] = [
        (
            KeySource::Argument,
            Box::new(move || explicit.map(str::to_owned)),
        ),
        (KeySource::Store, Box::new(move || store_lookup(store))),
        (
            KeySource::Environment,
            Box::new(|| std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty())),
        ),
    ];

    let resolved = lookups
        .into_iter()
        .find_map(|(source, lookup)| lookup().map(|value| ResolvedKey { value, source }));

    if let Some(ref key) = resolved {
        log_debug!(
            provider = PROVIDER_NAME,
            source = %key.source,
            "API key resolved"
        );
    }
    resolved
}

fn store_lookup(store: Option<&dyn CredentialStore>) -> Option<String> {
    let store = store?;
    if store.is_available(PROVIDER_NAME) {
        store.get(PROVIDER_NAME).filter(|v| !v.is_empty())
    } else {
        None
    }
}
