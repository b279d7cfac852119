//! # neospeech-rest
//!
//! Rust client for the NeoSpeech text-to-speech REST API.
//!
//! The service takes an XML document over HTTP POST and answers with XML.
//! This crate validates the caller's voice/format/rate choices against the
//! service's fixed tables, marshals the two request documents
//! (`ConvertSimple` and `GetConversionStatus`), and normalizes every reply
//! into an ordered field mapping.
//!
//! Transport faults never surface as errors from a dispatch: they are caught
//! at the transport boundary and returned as a
//! [`ResponseMessage::HttpError`] diagnostic payload, so calling code can
//! branch on data instead of catching a typed failure. Configuration
//! mistakes (an unknown voice key, a rate outside {8, 16}) fail fast with
//! [`Error::InvalidParameter`] at construction or setter time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neospeech_rest::TtsClient;
//!
//! #[tokio::main]
//! async fn main() -> neospeech_rest::Result<()> {
//!     let client = TtsClient::builder()
//!         .email("mail@example.com")
//!         .account_id("1234657890")
//!         .login_key("login_key")
//!         .password("password")
//!         .build()?;
//!
//!     let resp = client.convert_simple("Hello, World!").await?;
//!     if let Some(number) = resp.get("conversionNumber") {
//!         let status = client.get_conversion_status(number).await?;
//!         println!("{status:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The client, its builder, and response normalization |
//! | [`catalog`] | Fixed voice/format/rate tables and validation |
//! | [`transport`] | HTTP POST adapter and fault classification |
//! | [`types`] | Response message and diagnostic payload types |

pub mod catalog;
pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod xml;

pub use client::{TtsClient, TtsClientBuilder};
pub use error::{Error, ErrorContext};
pub use types::{HttpErrorReport, ResponseMessage, XmlElement};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
