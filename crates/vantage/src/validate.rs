//! Pure option validators shared by token generation and session creation.

use crate::errors::VantageError;
use std::net::Ipv4Addr;

/// Default token lifetime when no expiration is supplied (24 hours).
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 86_400;

/// Maximum connection data size in bytes.
pub const MAX_CONNECTION_DATA_BYTES: usize = 1000;

/// Resolve a requested expiration against a reference instant.
///
/// Absent means one day from the reference. Requested values are taken
/// as-is; the platform does not reject expirations in the past, so neither
/// does the SDK.
#[must_use]
pub fn expire_time(requested: Option<i64>, reference: i64) -> i64 {
    requested.unwrap_or(reference + DEFAULT_TOKEN_LIFETIME_SECS)
}

/// Check connection data size.
///
/// # Errors
///
/// Returns `VantageError::Validation` when the data exceeds
/// [`MAX_CONNECTION_DATA_BYTES`]. Exactly the maximum is accepted.
pub fn connection_data(data: Option<&str>) -> Result<(), VantageError> {
    match data {
        Some(d) if d.len() > MAX_CONNECTION_DATA_BYTES => Err(VantageError::Validation(format!(
            "connection data must be at most {MAX_CONNECTION_DATA_BYTES} bytes, got {}",
            d.len()
        ))),
        _ => Ok(()),
    }
}

/// Check a location hint.
///
/// # Errors
///
/// Returns `VantageError::Validation` unless the value is an IPv4 dotted
/// quad. There is no silent fallback; session creation refuses to build a
/// request around a malformed location.
pub fn location(location: Option<&str>) -> Result<(), VantageError> {
    match location {
        Some(loc) if loc.parse::<Ipv4Addr>().is_err() => Err(VantageError::Validation(format!(
            "location must be an IPv4 address, got {loc:?}"
        ))),
        _ => Ok(()),
    }
}
