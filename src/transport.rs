//! HTTP transport for the NeoSpeech REST endpoint.

use std::env;
use std::time::Duration;

use tracing::debug;

use crate::types::XmlElement;
use crate::xml;

/// Fixed REST endpoint of the NeoSpeech service.
pub const NEOSPEECH_REST_ENDPOINT: &str = "https://tts.neospeech.com/rest_1_1.php";

/// Thin POST adapter over [`reqwest::Client`].
///
/// Timeout and TLS policy live here; the client above it defines no retry or
/// timeout semantics of its own.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        // Minimal production-friendly default (env-overridable).
        let timeout_secs = env::var("NEOSPEECH_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `body` as the entire request payload and parse the reply as XML.
    ///
    /// The body goes out as-is, with no headers beyond transport defaults.
    /// Non-2xx statuses count as faults. Returns the reply's root element, or
    /// `None` when the reply parses but holds no element.
    pub async fn post(&self, body: String) -> Result<Option<XmlElement>, TransportError> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting request");

        let response = self
            .client
            .post(&self.endpoint)
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        Ok(xml::parse_root_element(&text)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed XML in response: {0}")]
    Xml(#[from] quick_xml::Error),
}

impl TransportError {
    /// Coarse fault classification for diagnostic reports.
    pub fn class(&self) -> &'static str {
        match self {
            TransportError::Http(e) if e.is_timeout() => "timeout",
            TransportError::Http(e) if e.is_connect() => "connect",
            TransportError::Http(e) if e.is_status() => "status",
            TransportError::Http(_) => "http",
            TransportError::Xml(_) => "malformed_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_faults_classify_as_malformed_response() {
        let parse_err = crate::xml::parse_root_element("<response").unwrap_err();
        let err = TransportError::from(parse_err);
        assert_eq!(err.class(), "malformed_response");
    }

    #[test]
    fn test_default_endpoint_is_the_fixed_rest_url() {
        let transport = HttpTransport::new(NEOSPEECH_REST_ENDPOINT).unwrap();
        assert_eq!(transport.endpoint(), "https://tts.neospeech.com/rest_1_1.php");
    }
}
