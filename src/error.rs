use std::fmt;
use thiserror::Error;

/// Structured error context for input and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Parameter or configuration key that caused the error (e.g., "id", "api_base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "validation", "builder")
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

/// Details of a failed API call.
///
/// `status` is `None` when no response was received (connection refused, DNS
/// failure, timeout). `body` is a best-effort capture of the response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub message: String,
    pub status: Option<u16>,
    pub body: Option<String>,
}

impl ApiFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(status) = self.status {
            write!(f, " | Status code: {}", status)?;
        }
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            write!(f, " | Response: {}", body)?;
        }
        Ok(())
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Authentication,
    NotFound,
    RateLimit,
    Api,
}

impl ErrorKind {
    /// Whether this kind is raised after a network call (as opposed to input checks).
    pub fn is_api(&self) -> bool {
        matches!(
            self,
            Self::Authentication | Self::NotFound | Self::RateLimit | Self::Api
        )
    }
}

/// Unified error type for the BundleUp SDK.
///
/// `Validation` and `Configuration` are raised before any request is sent.
/// The remaining variants wrap an [`ApiFailure`] and are raised after a call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Authentication error: {0}")]
    Authentication(ApiFailure),

    #[error("Not found: {0}")]
    NotFound(ApiFailure),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(ApiFailure),

    #[error("API error: {0}")]
    Api(ApiFailure),
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
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Wrap an API failure in the variant matching `kind`.
    ///
    /// Input-side kinds are not produced by the transport; they collapse to `Api`.
    pub fn from_api_failure(kind: ErrorKind, failure: ApiFailure) -> Self {
        match kind {
            ErrorKind::Authentication => Error::Authentication(failure),
            ErrorKind::NotFound => Error::NotFound(failure),
            ErrorKind::RateLimit => Error::RateLimit(failure),
            ErrorKind::Api | ErrorKind::Validation | ErrorKind::Configuration => {
                Error::Api(failure)
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::RateLimit(_) => ErrorKind::RateLimit,
            Error::Api(_) => ErrorKind::Api,
        }
    }

    /// True for every error raised after a network call.
    pub fn is_api_error(&self) -> bool {
        self.kind().is_api()
    }

    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Error::Authentication(f) | Error::NotFound(f) | Error::RateLimit(f) | Error::Api(f) => {
                Some(f)
            }
            _ => None,
        }
    }

    /// HTTP status of the failed call, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.api_failure().and_then(|f| f.status)
    }

    /// Raw response body of the failed call, if it could be captured.
    pub fn response_body(&self) -> Option<&str> {
        self.api_failure().and_then(|f| f.body.as_deref())
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}
