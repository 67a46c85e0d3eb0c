//! Token inspection.
//!
//! Decodes the SDK's token framing (`T1==` sentinel, base64 body holding
//! `partner_id=…&sig=…:<payload>`) and recomputes the HMAC-SHA1 signature
//! so tests can verify tokens the way the platform's verifier would.

use base64::{engine::general_purpose, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::collections::HashMap;

type HmacSha1 = Hmac<Sha1>;

/// Token format sentinel.
const TOKEN_SENTINEL: &str = "T1==";

/// A token pulled apart into its cleartext pieces.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// Account id from the framing header.
    pub partner_id: Option<String>,

    /// Hex signature from the framing header.
    pub signature: Option<String>,

    /// Raw payload string the signature covers.
    pub payload: String,

    /// Parsed payload fields (`session_id`, `create_time`, `expire_time`,
    /// `nonce`, `role`, `connection_data`).
    pub claims: HashMap<String, String>,
}

impl DecodedToken {
    /// Look up a payload field by name.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).map(String::as_str)
    }
}

/// Decode a token without verifying it. Returns `None` when the framing
/// is not recognizable.
#[must_use]
pub fn decode_token(token: &str) -> Option<DecodedToken> {
    let encoded = token.strip_prefix(TOKEN_SENTINEL)?;
    let bytes = general_purpose::STANDARD.decode(encoded).ok()?;
    let framed = String::from_utf8(bytes).ok()?;
    let (header, payload) = framed.split_once(':')?;

    let header_fields: HashMap<String, String> = url::form_urlencoded::parse(header.as_bytes())
        .into_owned()
        .collect();
    let claims: HashMap<String, String> = url::form_urlencoded::parse(payload.as_bytes())
        .into_owned()
        .collect();

    Some(DecodedToken {
        partner_id: header_fields.get("partner_id").cloned(),
        signature: header_fields.get("sig").cloned(),
        payload: payload.to_string(),
        claims,
    })
}

/// True iff the token's signature matches an HMAC-SHA1 of its payload
/// under `secret`.
#[must_use]
pub fn verify_token_signature(token: &str, secret: &str) -> bool {
    let Some(decoded) = decode_token(token) else {
        return false;
    };
    let Some(signature) = decoded.signature else {
        return false;
    };
    let Ok(mut mac) = HmacSha1::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(decoded.payload.as_bytes());
    hex::encode(mac.finalize().into_bytes()) == signature
}
