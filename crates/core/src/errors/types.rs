//! Core error type definitions

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for underbar operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dynamic value did not have the shape an operation requires
    InvalidShape {
        expected: &'static str,
        found: &'static str,
    },

    /// An element passed to `invoke` does not expose the named method
    MissingMethod {
        index: usize,
        method: String,
        kind: String,
    },

    /// A `once` guard whose first invocation panicked
    Poisoned { combinator: &'static str },

    /// An async combinator was used outside of a tokio runtime
    NoRuntime { operation: String, message: String },

    /// A deferred call failed after it was scheduled
    DeferredCall {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Logging subscriber could not be installed
    Logging { message: String },

    /// An error wrapped with caller supplied context
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}
