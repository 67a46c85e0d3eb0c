//! Session entity and creation options.

use crate::client::Client;
use crate::errors::VantageError;
use crate::token::TokenOptions;
use serde::{Deserialize, Serialize};

/// How the platform routes a session's media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaMode {
    /// Media flows peer-to-peer between clients.
    #[default]
    Relayed,

    /// Media is routed through the platform's servers.
    Routed,
}

impl MediaMode {
    /// String name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaMode::Relayed => "relayed",
            MediaMode::Routed => "routed",
        }
    }

    /// Permissive parse: `routed` selects routing, any other value
    /// (including garbage) falls back to relayed. This mirrors the
    /// platform's own handling and never fails.
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "routed" => MediaMode::Routed,
            _ => MediaMode::Relayed,
        }
    }
}

/// Whether the platform archives a session automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveMode {
    /// Archives are started explicitly.
    Manual,

    /// Every session is archived for its whole duration.
    Always,
}

impl ArchiveMode {
    /// String name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveMode::Manual => "manual",
            ArchiveMode::Always => "always",
        }
    }
}

/// Options for session creation. Input-only; not retained after the call.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Media routing; defaults to [`MediaMode::Relayed`].
    pub media_mode: MediaMode,

    /// Location hint, an IPv4 address near the intended participants.
    pub location: Option<String>,

    /// Archive behavior; absent leaves the platform default.
    pub archive_mode: Option<ArchiveMode>,
}

impl SessionOptions {
    /// Options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media routing mode.
    #[must_use]
    pub fn with_media_mode(mut self, media_mode: MediaMode) -> Self {
        self.media_mode = media_mode;
        self
    }

    /// Set the location hint.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the archive mode.
    #[must_use]
    pub fn with_archive_mode(mut self, archive_mode: ArchiveMode) -> Self {
        self.archive_mode = Some(archive_mode);
        self
    }
}

/// A communication channel created on the platform.
///
/// The media mode and location reflect what was *requested*; the platform
/// does not echo them back in the creation response. The session keeps a
/// handle to the client that created it so tokens can be minted directly
/// from it.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    media_mode: MediaMode,
    location: Option<String>,
    client: Client,
}

impl Session {
    pub(crate) fn new(client: Client, id: String, options: &SessionOptions) -> Self {
        Self {
            id,
            media_mode: options.media_mode,
            location: options.location.clone(),
            client,
        }
    }

    /// The platform-issued session id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Media routing requested at creation.
    #[must_use]
    pub fn media_mode(&self) -> MediaMode {
        self.media_mode
    }

    /// Location hint requested at creation.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Mint an access token for this session.
    ///
    /// # Errors
    ///
    /// Propagates the owning client's [`Client::generate_token`] errors.
    pub fn generate_token(&self, options: TokenOptions) -> Result<String, VantageError> {
        self.client.generate_token(&self.id, options)
    }
}
