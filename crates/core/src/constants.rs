/// Constants used throughout the underbar codebase
// Log filter environment variables, in lookup order
pub const LOG_ENV_VAR: &str = "UNDERBAR_LOG";
pub const FALLBACK_LOG_ENV_VAR: &str = "RUST_LOG";

// Filter used when neither variable is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Kind names reported by shape errors
pub const KIND_SEQUENCE: &str = "sequence";
pub const KIND_OBJECT: &str = "object";
pub const KIND_COLLECTION: &str = "collection";

// Separator used by the `join` method when none is given
pub const DEFAULT_JOIN_SEPARATOR: &str = ",";
