use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field or parameter that caused the error (e.g., "voice", "sample_rate")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected key)
    pub details: Option<String>,
    /// Source of the error (e.g., "parameter_validator", "response_normalizer")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the NeoSpeech client.
///
/// Configuration mistakes surface here immediately; transport faults during
/// dispatch do not — those are downgraded into an
/// [`HttpErrorReport`](crate::HttpErrorReport) on the returned message.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid parameter: {message}{}", format_context(.context))]
    InvalidParameter {
        message: String,
        context: ErrorContext,
    },

    #[error("Unsupported response shape: {message}{}", format_context(.context))]
    UnsupportedResponseShape {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] quick_xml::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new invalid-parameter error
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new invalid-parameter error with structured context
    pub fn invalid_parameter_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidParameter {
            message: msg.into(),
            context,
        }
    }

    /// Create a new unsupported-response-shape error with structured context
    pub fn unsupported_response_shape_with_context(
        msg: impl Into<String>,
        context: ErrorContext,
    ) -> Self {
        Error::UnsupportedResponseShape {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidParameter { context, .. }
            | Error::UnsupportedResponseShape { context, .. } => Some(context),
            _ => None,
        }
    }
}
