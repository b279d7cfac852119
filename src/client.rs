//! NeoSpeech TTS client.

use std::fmt;

use tracing::warn;

use crate::catalog;
use crate::transport::{HttpTransport, TransportError, NEOSPEECH_REST_ENDPOINT};
use crate::types::{HttpErrorReport, ResponseMessage, XmlElement};
use crate::xml;
use crate::{Error, ErrorContext, Result};

/// Client for the NeoSpeech text-to-speech REST API.
///
/// Holds the account credentials and the validated voice/format/rate
/// preferences. Credentials are fixed at construction; the preferences can be
/// reassigned through the setters, which revalidate against the same tables
/// as construction.
#[derive(Debug)]
pub struct TtsClient {
    transport: HttpTransport,
    email: String,
    account_id: String,
    login_key: String,
    password: String,
    voice: &'static str,
    audio_format: &'static str,
    sample_rate: u16,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// The voice table: short keys and their service-side identifiers.
    pub fn available_voices() -> &'static [(&'static str, &'static str)] {
        catalog::VOICES
    }

    /// The audio format table: short keys and their service-side identifiers.
    pub fn available_formats() -> &'static [(&'static str, &'static str)] {
        catalog::FORMATS
    }

    /// The supported sample rates in kHz.
    pub fn available_rates() -> &'static [u16] {
        catalog::SAMPLE_RATES
    }

    /// Reassign the voice. Returns the resolved service identifier.
    pub fn set_voice(&mut self, key: &str) -> Result<&'static str> {
        let voice = catalog::resolve(key, catalog::VOICES, "Voice")?;
        self.voice = voice;
        Ok(voice)
    }

    /// Reassign the audio format. Returns the resolved service identifier.
    pub fn set_format(&mut self, key: &str) -> Result<&'static str> {
        let format = catalog::resolve(key, catalog::FORMATS, "Format of audio")?;
        self.audio_format = format;
        Ok(format)
    }

    /// Reassign the sample rate. Returns the validated value.
    pub fn set_rate(&mut self, rate: u16) -> Result<u16> {
        let rate = catalog::validate_rate(rate)?;
        self.sample_rate = rate;
        Ok(rate)
    }

    pub fn voice(&self) -> &str {
        self.voice
    }

    pub fn audio_format(&self) -> &str {
        self.audio_format
    }

    pub fn sample_rate(&self) -> u16 {
        self.sample_rate
    }

    /// Submit `text` for conversion with the configured voice, format, and
    /// rate.
    ///
    /// A transport fault does not fail the call; it comes back as
    /// [`ResponseMessage::HttpError`]. On success the service replies with the
    /// conversion fields (notably `conversionNumber`, used to poll status).
    pub async fn convert_simple(&self, text: &str) -> Result<ResponseMessage> {
        let sample_rate = self.sample_rate.to_string();
        let body = xml::element_with_children(
            "ConvertSimple",
            &[
                ("email", self.email.as_str()),
                ("accountId", self.account_id.as_str()),
                ("loginKey", self.login_key.as_str()),
                ("loginPassword", self.password.as_str()),
                ("voice", self.voice),
                ("outputFormat", self.audio_format),
                ("sampleRate", sample_rate.as_str()),
                ("text", text),
            ],
        )?;
        self.dispatch(body).await
    }

    /// Poll the status of a submitted conversion.
    ///
    /// The service's conversion numbers are opaque, so anything printable is
    /// accepted: `42` and `"42"` produce the same request.
    pub async fn get_conversion_status(&self, number: impl fmt::Display) -> Result<ResponseMessage> {
        let number = number.to_string();
        let body = xml::element_with_children(
            "GetConversionStatus",
            &[
                ("email", self.email.as_str()),
                ("accountId", self.account_id.as_str()),
                ("conversionNumber", number.as_str()),
            ],
        )?;
        self.dispatch(body).await
    }

    async fn dispatch(&self, body: String) -> Result<ResponseMessage> {
        create_message(self.transport.post(body).await)
    }
}

/// Normalize the transport's reply into a [`ResponseMessage`].
///
/// Faults are swallowed into diagnostic data; only a reply that parses to no
/// element at all is an error, since that means the transport contract was
/// not honored.
fn create_message(reply: std::result::Result<Option<XmlElement>, TransportError>) -> Result<ResponseMessage> {
    match reply {
        Ok(Some(element)) => Ok(ResponseMessage::Fields(element.attributes)),
        Ok(None) => Err(Error::unsupported_response_shape_with_context(
            "reply document has no root element",
            ErrorContext::new().with_source("response_normalizer"),
        )),
        Err(fault) => {
            warn!(class = fault.class(), error = %fault, "transport fault downgraded to http_error");
            Ok(ResponseMessage::HttpError(HttpErrorReport::from_transport(
                &fault,
            )))
        }
    }
}

pub struct TtsClientBuilder {
    email: Option<String>,
    account_id: Option<String>,
    login_key: Option<String>,
    password: Option<String>,
    voice: String,
    audio_format: String,
    sample_rate: u16,
    endpoint: String,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            email: None,
            account_id: None,
            login_key: None,
            password: None,
            voice: "paul".to_string(),
            audio_format: "wav".to_string(),
            sample_rate: 16,
            endpoint: NEOSPEECH_REST_ENDPOINT.to_string(),
        }
    }
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }
    pub fn login_key(mut self, login_key: impl Into<String>) -> Self {
        self.login_key = Some(login_key.into());
        self
    }
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
    pub fn voice(mut self, key: impl Into<String>) -> Self {
        self.voice = key.into();
        self
    }
    pub fn audio_format(mut self, key: impl Into<String>) -> Self {
        self.audio_format = key.into();
        self
    }
    pub fn sample_rate(mut self, rate: u16) -> Self {
        self.sample_rate = rate;
        self
    }

    /// Override the REST endpoint. Intended for tests against a local mock
    /// server; production traffic goes to the fixed service URL.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let email = self.email.ok_or_else(|| required("email", "Email"))?;
        let account_id = self
            .account_id
            .ok_or_else(|| required("account_id", "Account id"))?;
        let login_key = self
            .login_key
            .ok_or_else(|| required("login_key", "Login key"))?;
        let password = self
            .password
            .ok_or_else(|| required("password", "Password"))?;

        let voice = catalog::resolve(&self.voice, catalog::VOICES, "Voice")?;
        let audio_format = catalog::resolve(&self.audio_format, catalog::FORMATS, "Format of audio")?;
        let sample_rate = catalog::validate_rate(self.sample_rate)?;

        let transport = HttpTransport::new(self.endpoint)?;

        Ok(TtsClient {
            transport,
            email,
            account_id,
            login_key,
            password,
            voice,
            audio_format,
            sample_rate,
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn required(field: &str, label: &str) -> Error {
    Error::invalid_parameter_with_context(
        format!("{} must be specified", label),
        ErrorContext::new()
            .with_field_path(field)
            .with_source("client_builder"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn test_client() -> TtsClient {
        TtsClient::builder()
            .email("mail@example.com")
            .account_id("1234657890")
            .login_key("login_key")
            .password("password")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = test_client();
        assert_eq!(client.voice(), "TTS_PAUL_DB");
        assert_eq!(client.audio_format(), "FORMAT_WAV");
        assert_eq!(client.sample_rate(), 16);
    }

    #[test]
    fn test_builder_requires_credentials() {
        let err = TtsClient::builder()
            .account_id("1234657890")
            .login_key("login_key")
            .password("password")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Email must be specified"));
    }

    #[test]
    fn test_builder_rejects_unknown_voice() {
        let err = TtsClient::builder()
            .email("mail@example.com")
            .account_id("1234657890")
            .login_key("login_key")
            .password("password")
            .voice("bob")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
        assert!(err.to_string().contains("Voice is incorrect"));
    }

    #[test]
    fn test_builder_rejects_unsupported_rate() {
        let err = TtsClient::builder()
            .email("mail@example.com")
            .account_id("1234657890")
            .login_key("login_key")
            .password("password")
            .sample_rate(11)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Rate of audio is incorrect"));
    }

    #[test]
    fn test_set_voice_resolves_every_key() {
        let mut client = test_client();
        for (key, id) in TtsClient::available_voices() {
            assert_eq!(client.set_voice(key).unwrap(), *id);
            assert_eq!(client.voice(), *id);
        }
        assert!(client.set_voice("bob").is_err());
    }

    #[test]
    fn test_set_format_resolves_every_key() {
        let mut client = test_client();
        for (key, id) in TtsClient::available_formats() {
            assert_eq!(client.set_format(key).unwrap(), *id);
            assert_eq!(client.audio_format(), *id);
        }
        assert!(client.set_format("mp3").is_err());
    }

    #[test]
    fn test_set_rate_checks_membership() {
        let mut client = test_client();
        assert_eq!(client.set_rate(8).unwrap(), 8);
        assert_eq!(client.sample_rate(), 8);
        assert_eq!(client.set_rate(16).unwrap(), 16);

        let err = client.set_rate(11).unwrap_err();
        assert!(err.to_string().contains("Rate of audio is incorrect"));
        // A rejected assignment leaves the previous value in place.
        assert_eq!(client.sample_rate(), 16);
    }

    #[test]
    fn test_failed_setter_keeps_previous_voice() {
        let mut client = test_client();
        client.set_voice("kate").unwrap();
        assert!(client.set_voice("nobody").is_err());
        assert_eq!(client.voice(), "TTS_KATE_DB");
    }

    #[test]
    fn test_create_message_flattens_root_attributes() {
        let mut attributes = IndexMap::new();
        attributes.insert("conversionNumber".to_string(), "123".to_string());
        attributes.insert("status".to_string(), "done".to_string());
        let message = create_message(Ok(Some(XmlElement {
            name: "response".to_string(),
            attributes,
        })))
        .unwrap();
        assert_eq!(message.get("conversionNumber"), Some("123"));
        assert_eq!(message.get("status"), Some("done"));
        let keys: Vec<_> = message.fields().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["conversionNumber", "status"]);
    }

    #[test]
    fn test_create_message_rejects_element_free_reply() {
        let err = create_message(Ok(None)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedResponseShape { .. }));
    }

    #[test]
    fn test_create_message_wraps_transport_faults() {
        let fault = crate::xml::parse_root_element("<response").unwrap_err();
        let message = create_message(Err(TransportError::from(fault))).unwrap();
        let report = message.http_error().expect("should carry a report");
        assert_eq!(report.kind, "malformed_response");
        assert!(!report.message.is_empty());
        assert!(!report.trace.is_empty());
    }
}
