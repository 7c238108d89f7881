//! Builder methods for creating errors with context

use super::types::Error;

// Helper methods for creating errors with context
impl Error {
    /// Create a shape mismatch error
    #[must_use]
    pub fn invalid_shape(expected: &'static str, found: &'static str) -> Self {
        Error::InvalidShape { expected, found }
    }

    /// Create a missing method error for the element at `index`
    #[must_use]
    pub fn missing_method(index: usize, method: impl Into<String>, kind: impl Into<String>) -> Self {
        Error::MissingMethod {
            index,
            method: method.into(),
            kind: kind.into(),
        }
    }

    /// Create a poisoned guard error
    #[must_use]
    pub fn poisoned(combinator: &'static str) -> Self {
        Error::Poisoned { combinator }
    }

    /// Create a missing runtime error
    #[must_use]
    pub fn no_runtime(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::NoRuntime {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a deferred call error
    #[must_use]
    pub fn deferred_call(message: impl Into<String>) -> Self {
        Error::DeferredCall {
            message: message.into(),
            source: None,
        }
    }

    /// Create a deferred call error with a source error
    #[must_use]
    pub fn deferred_call_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::DeferredCall {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Error::Logging {
            message: message.into(),
        }
    }

    /// Wrap this error with additional context
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Error::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }
}
