//! Access token minting.
//!
//! Tokens are minted entirely locally: a cleartext payload (session id,
//! timestamps, role, optional connection data, nonce) is signed with
//! HMAC-SHA1 under the account secret and framed in base64 behind a
//! format sentinel. No network call is involved.

use crate::credentials::Credentials;
use crate::errors::VantageError;
use crate::session_id;
use crate::validate;
use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use std::str::FromStr;
use tracing::debug;

type HmacSha1 = Hmac<Sha1>;

/// Token format sentinel; the platform's verifier dispatches on it, so it
/// must stay stable across SDK versions.
const TOKEN_SENTINEL: &str = "T1==";

/// Capability level embedded in a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May subscribe to streams only.
    Subscriber,

    /// May publish and subscribe.
    #[default]
    Publisher,

    /// May publish, subscribe and moderate other connections.
    Moderator,
}

impl Role {
    /// Wire-format name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Subscriber => "subscriber",
            Role::Publisher => "publisher",
            Role::Moderator => "moderator",
        }
    }
}

impl FromStr for Role {
    type Err = VantageError;

    /// Exactly `subscriber`, `publisher` or `moderator`; anything else is
    /// rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "subscriber" => Ok(Role::Subscriber),
            "publisher" => Ok(Role::Publisher),
            "moderator" => Ok(Role::Moderator),
            other => Err(VantageError::Validation(format!("unknown role {other:?}"))),
        }
    }
}

/// Options for a minted token. Exists only for the duration of the call.
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    /// Capability level; defaults to [`Role::Publisher`].
    pub role: Role,

    /// Expiration as unix seconds; defaults to one day from minting.
    pub expire_time: Option<i64>,

    /// Free-form connection data, at most 1000 bytes.
    pub data: Option<String>,
}

impl TokenOptions {
    /// Options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Set the expiration (unix seconds).
    #[must_use]
    pub fn with_expire_time(mut self, expire_time: i64) -> Self {
        self.expire_time = Some(expire_time);
        self
    }

    /// Attach connection data.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }
}

/// Mint a signed token authorizing a client to join `session_id`.
///
/// # Errors
///
/// - `VantageError::Validation` if the session id is empty, the session is
///   owned by a different account, or the connection data is oversized.
/// - `VantageError::Decode` if the session id does not match the codec.
pub(crate) fn generate(
    credentials: &Credentials,
    session_id: &str,
    options: &TokenOptions,
) -> Result<String, VantageError> {
    if session_id.is_empty() {
        return Err(VantageError::Validation(
            "session id must not be empty".to_string(),
        ));
    }
    let decoded = session_id::decode(session_id)?;
    if decoded.account_id != credentials.account_id() {
        return Err(VantageError::Validation(format!(
            "session belongs to account {}, credentials are for account {}",
            decoded.account_id,
            credentials.account_id()
        )));
    }
    validate::connection_data(options.data.as_deref())?;

    let create_time = chrono::Utc::now().timestamp();
    let expire_time = validate::expire_time(options.expire_time, create_time);
    let nonce = format!("{:016x}", rand::random::<u64>());

    let mut payload = url::form_urlencoded::Serializer::new(String::new());
    payload.append_pair("session_id", session_id);
    payload.append_pair("create_time", &create_time.to_string());
    payload.append_pair("expire_time", &expire_time.to_string());
    payload.append_pair("nonce", &nonce);
    payload.append_pair("role", options.role.as_str());
    if let Some(data) = options.data.as_deref() {
        payload.append_pair("connection_data", data);
    }
    let payload = payload.finish();

    let signature = sign(&payload, credentials.secret().expose_secret())?;
    let framed = format!(
        "partner_id={}&sig={}:{}",
        credentials.account_id(),
        signature,
        payload
    );

    debug!(
        target: "vantage.token",
        role = options.role.as_str(),
        expire_time,
        "Minted session token"
    );

    Ok(format!(
        "{TOKEN_SENTINEL}{}",
        general_purpose::STANDARD.encode(framed)
    ))
}

/// Hex-encoded HMAC-SHA1 of `payload` under `secret`.
fn sign(payload: &str, secret: &str) -> Result<String, VantageError> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| VantageError::Configuration(format!("failed to key HMAC: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
