//! Rust client SDK for the Vantage real-time video platform.
//!
//! The SDK does two things: it creates sessions (named communication
//! channels) through the platform's HTTP API, and it mints signed,
//! time-bound access tokens locally. Token generation involves no
//! network traffic at all.
//!
//! # Example
//!
//! ```rust,no_run
//! use vantage::{Client, Role, SessionOptions, TokenOptions};
//!
//! # async fn run() -> Result<(), vantage::VantageError> {
//! let client = Client::new("123456", "your-api-secret")?;
//!
//! let session = client.create_session(SessionOptions::default()).await?;
//!
//! let token = session.generate_token(
//!     TokenOptions::new().with_role(Role::Moderator),
//! )?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]

/// Module for the client facade
pub mod client;

/// Module for transport configuration
pub mod config;

/// Module for account credentials
pub mod credentials;

/// Module for SDK error types
pub mod errors;

/// Module for session-create request construction
mod request;

/// Module for session-create response parsing
mod response;

/// Module for the session entity and options
pub mod session;

/// Module for the session id codec
pub mod session_id;

/// Module for access token minting
pub mod token;

/// Module for pure option validators
pub mod validate;

pub use client::Client;
pub use config::ClientConfig;
pub use credentials::Credentials;
pub use errors::{Result, VantageError};
pub use session::{ArchiveMode, MediaMode, Session, SessionOptions};
pub use session_id::DecodedSessionId;
pub use token::{Role, TokenOptions};
