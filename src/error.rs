use std::fmt;

/// Custom error type for KUMA operations
#[derive(Debug)]
pub enum KumaError {
    /// A client call came back with an error envelope
    Request(String),
    /// Token not supplied by any source
    TokenNotFound(String),
    /// JSON parsing error
    Json(String),
    /// Malformed CSV input (line is 1-based)
    Csv { line: usize, message: String },
    /// File I/O error
    Io { message: String },
    /// Configuration error
    Config(String),
}

impl fmt::Display for KumaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KumaError::Request(details) => write!(f, "{}", details),
            KumaError::TokenNotFound(msg) => write!(f, "{}", msg),
            KumaError::Json(msg) => write!(f, "JSON error: {}", msg),
            KumaError::Csv { line, message } => write!(f, "CSV error on line {}: {}", line, message),
            KumaError::Io { message } => write!(f, "{}", message),
            KumaError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for KumaError {}

impl From<serde_json::Error> for KumaError {
    fn from(err: serde_json::Error) -> Self {
        KumaError::Json(err.to_string())
    }
}

impl From<std::io::Error> for KumaError {
    fn from(err: std::io::Error) -> Self {
        KumaError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type alias for KUMA operations
pub type Result<T> = std::result::Result<T, KumaError>;
