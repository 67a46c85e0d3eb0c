//! Parsing of session-create responses.
//!
//! The platform answers with a small XML document. On success it carries
//! the new session id; on failure an error payload with a code and
//! message. The parser only ever extracts text, so unknown surrounding
//! tags are tolerated.

use crate::errors::VantageError;
use quick_xml::events::Event;
use tracing::warn;

/// Map a session-create response to the new session id.
///
/// # Errors
///
/// - 403 → `VantageError::Authentication`, with the error payload's
///   message when one is present.
/// - any other non-2xx status → `VantageError::Service`.
/// - 2xx with a malformed body or no session id → `VantageError::Service`.
pub(crate) fn parse_create_response(status: u16, body: &str) -> Result<String, VantageError> {
    if (200..300).contains(&status) {
        return extract_first_text(body, b"session_id")?.ok_or_else(|| {
            VantageError::Service("session response did not contain a session id".to_string())
        });
    }

    if status == 403 {
        let message = extract_first_text(body, b"message")
            .ok()
            .flatten()
            .unwrap_or_else(|| "invalid account credentials".to_string());
        warn!(target: "vantage.response", status, "Session creation rejected");
        return Err(VantageError::Authentication(message));
    }

    warn!(target: "vantage.response", status, "Session creation failed");
    Err(VantageError::Service(format!(
        "session creation failed with status {status}"
    )))
}

/// Scan for the first non-empty text inside `element`.
fn extract_first_text(xml: &str, element: &[u8]) -> Result<Option<String>, VantageError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut inside = false;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                inside = e.name().as_ref() == element;
            }
            Ok(Event::Text(e)) if inside => {
                let text = e
                    .unescape()
                    .map_err(|e| {
                        VantageError::Service(format!("malformed session response: {e}"))
                    })?
                    .to_string();
                if !text.is_empty() {
                    return Ok(Some(text));
                }
            }
            Ok(Event::End(_)) => {
                inside = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(VantageError::Service(format!(
                    "malformed session response: {e}"
                )));
            }
            Ok(_) => {}
        }
        buf.clear();
    }
    Ok(None)
}
