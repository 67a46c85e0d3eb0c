//! # Vantage Test Utilities
//!
//! Shared test helpers for the Vantage SDK.
//!
//! This crate provides:
//! - Session id fixtures (structurally valid ids for any account)
//! - Token inspection (decode a minted token's payload, verify its
//!   signature against the account secret)
//!
//! The helpers reimplement the wire formats independently of the SDK so
//! tests exercise the real encoding rather than the SDK's own view of it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vantage_test_utils::{decode_token, fake_session_id, verify_token_signature};
//!
//! let session_id = fake_session_id("123456");
//! let token = client.generate_token(&session_id, TokenOptions::default())?;
//!
//! assert!(verify_token_signature(&token, "api-secret"));
//! let decoded = decode_token(&token).unwrap();
//! assert_eq!(decoded.claim("role"), Some("publisher"));
//! ```

pub mod session_fixtures;
pub mod token_inspector;

pub use session_fixtures::*;
pub use token_inspector::*;
