use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde::{Deserialize, Serialize};

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Network level failure (DNS, connection refused, timeout). Never retried.
    Transport,
    /// A path or query could not be composed into a URL. Indicates a defect in this crate.
    MalformedEndpoint,
    /// Non-successful HTTP status returned by the API
    Upstream,
    /// Successful status but no usable payload where one was expected
    EmptyResponse,
    /// Body present but not matching the expected JSON shape
    Decode,
    /// Invalid input supplied by the caller
    Validation,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    /// Wraps a network failure reported by an [`crate::http::HttpExecutor`].
    pub fn transport<S: StdError + Send + Sync + 'static>(source: S) -> Self {
        Self::with_source(Kind::Transport, source)
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn malformed_endpoint<S: Into<String>>(reason: S) -> Self {
        MalformedEndpoint {
            reason: reason.into(),
        }
        .into()
    }

    pub fn upstream(
        status_code: StatusCode,
        method: Method,
        path: String,
        payload: ErrorPayload,
    ) -> Self {
        Upstream {
            status_code,
            method,
            path,
            payload,
        }
        .into()
    }

    #[must_use]
    pub fn empty_response(status_code: StatusCode, method: Method, path: String) -> Self {
        EmptyResponse {
            status_code,
            method,
            path,
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Structured error body returned by the API, e.g.
/// `{"message": "...", "code": 400, "timestamp": "...", "path": "/markets"}`.
///
/// The Data API reports errors as `{"error": "..."}`, which is accepted as the message.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(alias = "error")]
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Body of a non-successful response.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPayload {
    /// Body decoded as an [`ApiError`].
    Structured(ApiError),
    /// Body that is not a recognizable error record, carried verbatim.
    Opaque(String),
}

impl ErrorPayload {
    /// Decodes a structured error from `body`, falling back to the raw text.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(error) => Self::Structured(error),
            Err(_) => Self::Opaque(String::from_utf8_lossy(body).into_owned()),
        }
    }

    /// The human-readable message, whichever form the payload took.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Structured(error) => &error.message,
            Self::Opaque(text) => text,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(error) => match error.code {
                Some(code) => write!(f, "{} (code {code})", error.message),
                None => f.write_str(&error.message),
            },
            Self::Opaque(text) => f.write_str(text),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Upstream {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub payload: ErrorPayload,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.payload
        )
    }
}

impl StdError for Upstream {}

#[non_exhaustive]
#[derive(Debug)]
pub struct EmptyResponse {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
}

impl fmt::Display for EmptyResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} call to {} returned {} without a payload",
            self.method, self.path, self.status_code
        )
    }
}

impl StdError for EmptyResponse {}

#[non_exhaustive]
#[derive(Debug)]
pub struct MalformedEndpoint {
    pub reason: String,
}

impl fmt::Display for MalformedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed endpoint: {}", self.reason)
    }
}

impl StdError for MalformedEndpoint {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Transport, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Validation, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Decode, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::MalformedEndpoint, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::MalformedEndpoint, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<MalformedEndpoint> for Error {
    fn from(err: MalformedEndpoint) -> Self {
        Error::with_source(Kind::MalformedEndpoint, err)
    }
}

impl From<Upstream> for Error {
    fn from(err: Upstream) -> Self {
        Error::with_source(Kind::Upstream, err)
    }
}

impl From<EmptyResponse> for Error {
    fn from(err: EmptyResponse) -> Self {
        Error::with_source(Kind::EmptyResponse, err)
    }
}
