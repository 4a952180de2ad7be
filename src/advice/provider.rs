//! Header value provider.
//!
//! # Responsibilities
//! - Produce the string the response interceptor writes into `Custom-Header`
//! - Stay stateless so concurrent requests need no coordination
//!
//! # Design Decisions
//! - Trait object bound at router construction, not looked up per call
//! - Value is computed freshly per invocation, never cached by the caller

/// Source of the value injected into advised responses.
///
/// Implementations must be stateless or internally synchronized; a single
/// instance is shared across all in-flight requests.
pub trait HeaderValueProvider: Send + Sync {
    /// Return the header value for one response. Called once per advised
    /// response.
    fn message(&self) -> String;
}

/// Default provider returning a fixed message from configuration.
#[derive(Debug, Clone)]
pub struct StaticMessageProvider {
    message: String,
}

impl StaticMessageProvider {
    /// Create a provider that always returns `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl HeaderValueProvider for StaticMessageProvider {
    fn message(&self) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_configured_message() {
        let provider = StaticMessageProvider::new("configured");
        assert_eq!(provider.message(), "configured");
        // Stable across calls.
        assert_eq!(provider.message(), "configured");
    }
}
