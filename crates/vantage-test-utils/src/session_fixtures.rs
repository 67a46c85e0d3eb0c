//! Session id fixtures.
//!
//! Builds ids with the platform's structure: a two-character version
//! prefix, then URL-safe base64 of a `~`-delimited record whose second
//! field is the owning account id.

use base64::{engine::general_purpose, Engine as _};

/// A structurally valid session id for `account_id`, with a fixed
/// creation timestamp so fixtures are reproducible.
#[must_use]
pub fn fake_session_id(account_id: &str) -> String {
    encode_session_id(account_id, "", "1395183743000")
}

/// Build a session id from its record fields.
#[must_use]
pub fn encode_session_id(account_id: &str, location: &str, created_at: &str) -> String {
    let record = format!("1~{account_id}~{location}~{created_at}~0.49013025~");
    let body = general_purpose::STANDARD_NO_PAD
        .encode(record)
        .replace('+', "-")
        .replace('/', "_");
    format!("1_{body}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_version_prefix() {
        let session_id = fake_session_id("123456");
        assert!(session_id.starts_with("1_"));
    }

    #[test]
    fn test_fixture_round_trips_through_base64() {
        let session_id = fake_session_id("123456");
        let body = session_id.strip_prefix("1_").unwrap();
        let translated = body.replace('-', "+").replace('_', "/");
        let record = String::from_utf8(
            general_purpose::STANDARD_NO_PAD
                .decode(translated)
                .unwrap(),
        )
        .unwrap();
        assert_eq!(record.split('~').nth(1), Some("123456"));
    }
}
