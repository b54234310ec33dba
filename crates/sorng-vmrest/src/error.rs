//! Error types for the vmrest client crate.

use std::fmt;

/// Categorised error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmrestErrorKind {
    /// vmrest unreachable (refused, DNS, TLS)
    ConnectionError,
    /// Credentials rejected (401)
    AuthenticationError,
    /// Resource not found (404)
    NotFound,
    /// HTTP / API error with status code
    ApiError(u16),
    /// Timeout
    Timeout,
    /// JSON parse / serialization error
    ParseError,
    /// Service used before `connect`
    NotConnected,
    /// Generic
    Other,
}

/// Crate error type carrying a kind + human-readable message.
#[derive(Debug, Clone)]
pub struct VmrestError {
    pub kind: VmrestErrorKind,
    pub message: String,
}

impl VmrestError {
    pub fn new(kind: VmrestErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::ConnectionError, msg)
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::AuthenticationError, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::NotFound, msg)
    }

    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::ApiError(status), msg)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::ParseError, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(VmrestErrorKind::Timeout, msg)
    }

    pub fn not_connected() -> Self {
        Self::new(
            VmrestErrorKind::NotConnected,
            "Not connected to vmrest. Call connect first.",
        )
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            VmrestErrorKind::AuthenticationError => Some(401),
            VmrestErrorKind::NotFound => Some(404),
            VmrestErrorKind::ApiError(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for VmrestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

impl std::error::Error for VmrestError {}

impl From<VmrestError> for String {
    fn from(e: VmrestError) -> String {
        e.to_string()
    }
}

impl From<reqwest::Error> for VmrestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(format!("HTTP timeout: {e}"))
        } else if e.is_connect() {
            Self::connection(format!("Connection failed: {e}"))
        } else {
            Self::new(VmrestErrorKind::Other, format!("HTTP error: {e}"))
        }
    }
}

impl From<serde_json::Error> for VmrestError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {e}"))
    }
}

/// Convenience alias.
pub type VmrestResult<T> = Result<T, VmrestError>;
