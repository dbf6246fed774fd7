//! Domain error taxonomy shared by every layer.
//!
//! A [`DomainError`] carries a closed [`ErrorKind`], a message that is safe to
//! show to clients, and an optional low-level cause that is only ever logged.
//! The HTTP status is derived from the kind:
//!
//! | Kind       | Status |
//! |------------|--------|
//! | `missing`  | 404    |
//! | `invalid`  | 400    |
//! | `internal` | 500    |

use std::fmt;
use std::str::FromStr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Boxed low-level error kept for diagnostics.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unexpected failure (storage, infrastructure). Details stay server-side.
    Internal,
    /// The caller supplied malformed or out-of-policy input.
    Invalid,
    /// The referenced entity does not exist.
    Missing,
}

impl ErrorKind {
    /// Canonical wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Invalid => "invalid",
            Self::Missing => "missing",
        }
    }

    /// HTTP status code used when this kind reaches the transport layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Missing => StatusCode::NOT_FOUND,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognized error kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error kind `{0}`")]
pub struct ParseErrorKindError(String);

impl FromStr for ErrorKind {
    type Err = ParseErrorKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Self::Internal),
            "invalid" => Ok(Self::Invalid),
            "missing" => Ok(Self::Missing),
            other => Err(ParseErrorKindError(other.to_string())),
        }
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A typed failure produced by the domain service and its collaborators.
///
/// `Display` renders only the client-safe message. The cause is reachable
/// through [`std::error::Error::source`] for logging.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl DomainError {
    pub fn with_cause(kind: ErrorKind, message: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_cause(ErrorKind::Invalid, message, None)
    }

    pub fn invalid_with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::with_cause(ErrorKind::Invalid, message, Some(cause.into()))
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::with_cause(ErrorKind::Missing, message, None)
    }

    pub fn internal(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::with_cause(ErrorKind::Internal, message, Some(cause.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Client-facing representation, without the cause.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            kind: self.kind,
            message: self.message.clone(),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(e: sqlx::Error) -> Self {
        Self::internal("database error", e)
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        if self.kind == ErrorKind::Internal {
            match self.cause() {
                Some(cause) => tracing::error!(error = %cause, "{}", self.message),
                None => tracing::error!("{}", self.message),
            }
        }

        (status, Json(self.to_body())).into_response()
    }
}
