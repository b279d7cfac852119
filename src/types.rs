//! Response types returned by the client.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::transport::TransportError;

/// First element of a reply document, with its attributes in document order.
///
/// This is what the transport hands back for a well-formed reply; the client
/// flattens its attributes into a [`ResponseMessage`].
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: IndexMap<String, String>,
}

/// Normalized result of a service call.
///
/// Every dispatch resolves to one of two shapes: the attribute fields of the
/// service's XML reply, or a diagnostic report for a transport fault that was
/// caught instead of propagated. Callers branch with [`http_error`] /
/// [`is_http_error`] rather than handling a typed transport exception.
///
/// [`http_error`]: ResponseMessage::http_error
/// [`is_http_error`]: ResponseMessage::is_http_error
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseMessage {
    /// Attributes of the reply's root element, in document order.
    ///
    /// Only root attributes are surfaced; text content of nested elements is
    /// not exposed by the service wrapper.
    Fields(IndexMap<String, String>),
    /// Transport failure downgraded to data.
    HttpError(HttpErrorReport),
}

impl ResponseMessage {
    /// Look up a field on a successful reply.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            ResponseMessage::Fields(fields) => fields.get(key).map(String::as_str),
            ResponseMessage::HttpError(_) => None,
        }
    }

    /// The reply's fields, if the call reached the service.
    pub fn fields(&self) -> Option<&IndexMap<String, String>> {
        match self {
            ResponseMessage::Fields(fields) => Some(fields),
            ResponseMessage::HttpError(_) => None,
        }
    }

    /// The transport diagnostic, if the call failed before a reply.
    pub fn http_error(&self) -> Option<&HttpErrorReport> {
        match self {
            ResponseMessage::Fields(_) => None,
            ResponseMessage::HttpError(report) => Some(report),
        }
    }

    pub fn is_http_error(&self) -> bool {
        matches!(self, ResponseMessage::HttpError(_))
    }
}

impl Serialize for ResponseMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseMessage::Fields(fields) => fields.serialize(serializer),
            ResponseMessage::HttpError(report) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("http_error", report)?;
                map.end()
            }
        }
    }
}

/// Diagnostic payload produced when a dispatch fails at the transport level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorReport {
    /// Fault classification (e.g. "timeout", "status", "malformed_response").
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description of the fault.
    pub message: String,
    /// Origin file, best-effort. Not populated by the built-in transport.
    pub file: Option<String>,
    /// Origin line, best-effort. Not populated by the built-in transport.
    pub line: Option<u32>,
    /// Human-readable fault chain, outermost cause first.
    pub trace: Vec<String>,
}

impl HttpErrorReport {
    /// Build a report from a transport fault, walking its source chain into
    /// the trace.
    pub(crate) fn from_transport(err: &TransportError) -> Self {
        let mut trace = Vec::new();
        let mut cause: Option<&(dyn std::error::Error + 'static)> = Some(err);
        while let Some(current) = cause {
            trace.push(current.to_string());
            cause = current.source();
        }

        Self {
            kind: err.class().to_string(),
            message: err.to_string(),
            file: None,
            line: None,
            trace,
        }
    }
}
