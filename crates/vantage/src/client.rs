//! Client facade for the Vantage platform API.

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::errors::VantageError;
use crate::request;
use crate::response;
use crate::session::{Session, SessionOptions};
use crate::token::{self, TokenOptions};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Entry point for the SDK.
///
/// Holds the account credentials and a shared HTTP transport; nothing
/// else. The client is cheap to clone and has no mutable state, so any
/// number of concurrent [`Client::create_session`] calls on one instance
/// are safe.
#[derive(Clone)]
pub struct Client {
    credentials: Arc<Credentials>,
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl Client {
    /// Build a client against the default platform endpoint.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` for invalid credentials.
    pub fn new(account_id: impl ToString, secret: impl ToString) -> Result<Self, VantageError> {
        Self::with_config(account_id, secret, ClientConfig::default())
    }

    /// Build a client with explicit transport configuration. The config
    /// argument also accepts a bare URL string as an endpoint override.
    ///
    /// # Errors
    ///
    /// Returns `VantageError::Configuration` for invalid credentials, a
    /// malformed proxy URL, or a transport that fails to build.
    pub fn with_config(
        account_id: impl ToString,
        secret: impl ToString,
        config: impl Into<ClientConfig>,
    ) -> Result<Self, VantageError> {
        let credentials = Credentials::new(account_id, secret)?;
        let config = config.into();

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);
        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| VantageError::Configuration(format!("invalid proxy URL: {e}")))?;
            builder = builder.proxy(proxy);
        }
        let http = builder.build().map_err(|e| {
            VantageError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            credentials: Arc::new(credentials),
            config: Arc::new(config),
            http,
        })
    }

    /// The account id this client authenticates as.
    #[must_use]
    pub fn account_id(&self) -> &str {
        self.credentials.account_id()
    }

    /// The API endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Create a session on the platform.
    ///
    /// Options are validated before any traffic: a malformed location
    /// fails locally with `Validation` and no request is attempted. The
    /// call issues exactly one request and never retries.
    ///
    /// # Errors
    ///
    /// - `VantageError::Validation` if the location is malformed.
    /// - `VantageError::Transport` if the platform was unreachable or the
    ///   configured timeout expired.
    /// - `VantageError::Authentication` if the platform rejected the
    ///   credentials.
    /// - `VantageError::Service` on platform failure or an unparseable
    ///   response.
    #[instrument(skip_all)]
    pub async fn create_session(&self, options: SessionOptions) -> Result<Session, VantageError> {
        let request = request::build(&options, &self.credentials)?;
        let url = format!("{}{}", self.config.api_url, request.path);

        debug!(
            target: "vantage.client",
            url = %url,
            media_mode = options.media_mode.as_str(),
            "Creating session"
        );

        let response = self
            .http
            .post(&url)
            .header(request::PARTNER_AUTH_HEADER, request.partner_auth)
            .header(reqwest::header::USER_AGENT, request::USER_AGENT)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "vantage.client", error = %e, "Session request failed");
                VantageError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            warn!(target: "vantage.client", error = %e, "Failed to read session response");
            VantageError::Transport(e.to_string())
        })?;

        let session_id = response::parse_create_response(status, &body)?;
        debug!(target: "vantage.client", "Session created");

        Ok(Session::new(self.clone(), session_id, &options))
    }

    /// Mint a signed access token for `session_id`.
    ///
    /// Fully synchronous; no I/O is involved. The session id is decoded
    /// locally and must belong to this client's account.
    ///
    /// # Errors
    ///
    /// - `VantageError::Decode` if the session id does not match the codec.
    /// - `VantageError::Validation` if the session id is empty, belongs to
    ///   another account, or carries oversized connection data.
    pub fn generate_token(
        &self,
        session_id: &str,
        options: TokenOptions,
    ) -> Result<String, VantageError> {
        token::generate(&self.credentials, session_id, &options)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("account_id", &self.credentials.account_id())
            .field("api_url", &self.config.api_url)
            .finish()
    }
}
