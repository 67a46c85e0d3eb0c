//! Account credentials held by the client.

use crate::errors::VantageError;
use secrecy::SecretString;
use std::fmt;

/// Account id and API secret, validated once at construction.
///
/// The secret is stored as a [`SecretString`] so it is redacted from any
/// `Debug` output and zeroized on drop.
pub struct Credentials {
    account_id: String,
    secret: SecretString,
}

impl Credentials {
    /// Validate and build a credential pair.
    ///
    /// The account id must be a non-empty numeric string (integers are
    /// accepted and coerced); the secret must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` on any violation. This fails
    /// at construction, not on first use.
    pub fn new(account_id: impl ToString, secret: impl ToString) -> Result<Self, VantageError> {
        let account_id = account_id.to_string();
        let secret = secret.to_string();

        if account_id.is_empty() || !account_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VantageError::Configuration(format!(
                "account id must be a numeric string, got {account_id:?}"
            )));
        }
        if secret.is_empty() {
            return Err(VantageError::Configuration(
                "API secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            account_id,
            secret: SecretString::from(secret),
        })
    }

    /// The numeric account id, unchanged from construction.
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The API secret. Call `expose_secret()` at the point of use.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
