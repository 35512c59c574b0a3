//! Shared validation helpers for inbound HTTP adapters.
//!
//! Bodies are read as raw bytes rather than through the framework's JSON
//! extractor so a parse failure produces this service's error envelope, and
//! so update handlers can run their existence check before touching the body.

use serde_json::Value;

use crate::domain::Error;

/// Parse a request body as JSON.
///
/// An empty body is unparseable and rejected like any other malformed input.
///
/// # Errors
/// [`Error::invalid_request`] with the fixed client-facing message.
pub(crate) fn parse_body(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body)
        .map_err(|_| Error::invalid_request("Invalid JSON in request body"))
}
