//! Codec for the platform's structured session identifiers.
//!
//! A session id is issued by the platform at session-creation time and is
//! opaque to callers, but it embeds the owning account id: a two-character
//! version prefix, then a URL-safe base64 record of `~`-delimited fields.
//! Token generation decodes it locally to cross-check account ownership.
//!
//! The codec is fed externally-issued strings and must never panic on
//! malformed input; every failure is a typed [`VantageError::Decode`].

use crate::errors::VantageError;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};

/// Session id version prefixes the codec understands.
const VERSION_PREFIXES: [&str; 2] = ["1_", "2_"];

/// Separator between fields of the decoded record.
const FIELD_SEPARATOR: char = '~';

/// Fields recovered from a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSessionId {
    /// Account id embedded at creation time.
    pub account_id: String,

    /// Creation instant, when the embedded timestamp is parseable.
    pub created_at: Option<DateTime<Utc>>,
}

/// Decode a session id into its embedded fields.
///
/// # Errors
///
/// Returns `VantageError::Decode` when the version prefix is unknown, the
/// body is not valid base64, the record is not UTF-8, or the account id
/// field is missing or empty.
pub fn decode(session_id: &str) -> Result<DecodedSessionId, VantageError> {
    let body = VERSION_PREFIXES
        .iter()
        .find_map(|prefix| session_id.strip_prefix(prefix))
        .ok_or_else(|| {
            VantageError::Decode("session id has an unrecognized version prefix".to_string())
        })?;

    // The wire form uses the URL-safe alphabet with optional padding.
    let translated: String = body
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = general_purpose::STANDARD_NO_PAD
        .decode(translated.trim_end_matches('='))
        .map_err(|e| VantageError::Decode(format!("session id body is not valid base64: {e}")))?;
    let record = String::from_utf8(bytes)
        .map_err(|e| VantageError::Decode(format!("session id record is not UTF-8: {e}")))?;

    let mut fields = record.split(FIELD_SEPARATOR);
    let _version = fields.next();
    let account_id = fields
        .next()
        .filter(|field| !field.is_empty())
        .ok_or_else(|| {
            VantageError::Decode("session id record is missing the account id field".to_string())
        })?
        .to_string();
    let _location = fields.next();
    let created_at = fields.next().and_then(parse_create_time);

    Ok(DecodedSessionId {
        account_id,
        created_at,
    })
}

/// The creation field holds epoch milliseconds on current session ids and a
/// textual date on very old ones; only the former is recovered.
fn parse_create_time(field: &str) -> Option<DateTime<Utc>> {
    field
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
