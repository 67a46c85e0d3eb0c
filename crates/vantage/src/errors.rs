//! Error types for the Vantage SDK.

use thiserror::Error;

/// Errors surfaced by the SDK.
///
/// Construction and option errors (`Configuration`, `Validation`, `Decode`)
/// are produced locally before any network traffic. `Authentication` and
/// `Service` report what the platform said; `Transport` reports that it could
/// not be reached at all, so callers can build retry policy on top. The SDK
/// itself never retries.
#[derive(Error, Debug)]
pub enum VantageError {
    /// Bad credentials or client configuration at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An option value was rejected (role, expiration, connection data,
    /// location) or a session id belongs to a different account.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A session id did not match the codec's structure.
    #[error("Session id decode error: {0}")]
    Decode(String),

    /// The platform rejected the account credentials.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The platform failed or returned an unparseable response.
    #[error("Service error: {0}")]
    Service(String),

    /// The platform could not be reached (timeout, connection failure).
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias using `VantageError`.
pub type Result<T> = std::result::Result<T, VantageError>;
