//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidShape { expected, found } => {
                write!(f, "expected a {expected}, found {found}")
            }
            Error::MissingMethod {
                index,
                method,
                kind,
            } => {
                write!(f, "element {index} ({kind}) has no method '{method}'")
            }
            Error::Poisoned { combinator } => {
                write!(
                    f,
                    "{combinator} guard is poisoned: the first invocation panicked"
                )
            }
            Error::NoRuntime { operation, message } => {
                write!(f, "'{operation}' requires a tokio runtime: {message}")
            }
            Error::DeferredCall { message, source } => match source {
                Some(source) => write!(f, "deferred call failed: {message}: {source}"),
                None => write!(f, "deferred call failed: {message}"),
            },
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::Logging { message } => {
                write!(f, "failed to initialize logging: {message}")
            }
            Error::Context { message, source } => {
                write!(f, "{message}: {source}")
            }
        }
    }
}
