//! Outbound request construction for session creation.
//!
//! Everything here is pure: validation and body shaping happen before any
//! network call, so an invalid option never produces traffic.

use crate::credentials::Credentials;
use crate::errors::VantageError;
use crate::session::{MediaMode, SessionOptions};
use crate::validate;
use secrecy::ExposeSecret;
use std::fmt;

/// Path of the session creation endpoint.
pub(crate) const SESSION_CREATE_PATH: &str = "/session/create";

/// Header carrying the `account_id:secret` pair.
pub(crate) const PARTNER_AUTH_HEADER: &str = "x-vg-partner-auth";

/// User agent identifying this SDK and its version.
pub(crate) const USER_AGENT: &str = concat!("Vantage-Rust-SDK/", env!("CARGO_PKG_VERSION"));

/// A fully shaped session-create request, ready for the transport.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct SessionCreateRequest {
    pub path: &'static str,
    pub partner_auth: String,
    pub body: String,
}

impl fmt::Debug for SessionCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCreateRequest")
            .field("path", &self.path)
            .field("partner_auth", &"[REDACTED]")
            .field("body", &self.body)
            .finish()
    }
}

/// Build the session-create request body and auth material.
///
/// The body is form-urlencoded with a stable field order: `location` when
/// present, then `p2p.preference`, then `archive.mode` when present. The
/// wire field is named from the peer-to-peer side, so the mapping inverts:
/// relayed sessions send `enabled`, routed sessions send `disabled`.
///
/// # Errors
///
/// Returns `VantageError::Validation` for a malformed location, before any
/// request is built.
pub(crate) fn build(
    options: &SessionOptions,
    credentials: &Credentials,
) -> Result<SessionCreateRequest, VantageError> {
    validate::location(options.location.as_deref())?;

    let mut body = url::form_urlencoded::Serializer::new(String::new());
    if let Some(location) = options.location.as_deref() {
        body.append_pair("location", location);
    }
    let preference = match options.media_mode {
        MediaMode::Relayed => "enabled",
        MediaMode::Routed => "disabled",
    };
    body.append_pair("p2p.preference", preference);
    if let Some(mode) = options.archive_mode {
        body.append_pair("archive.mode", mode.as_str());
    }

    Ok(SessionCreateRequest {
        path: SESSION_CREATE_PATH,
        partner_auth: format!(
            "{}:{}",
            credentials.account_id(),
            credentials.secret().expose_secret()
        ),
        body: body.finish(),
    })
}
