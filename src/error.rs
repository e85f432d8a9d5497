//! Errors raised by the client transport.
//!
//! The models never fail. Everything here comes from talking to the service:
//! building or signing the HTTP request, the connection itself, or a reply
//! that is either malformed or an `<ErrorResponse>`.

use thiserror::Error;

string_enum! {
    /// Error codes the service is documented to return.
    pub enum ErrorKind {
        AlreadyExists => "AlreadyExists",
        InvalidNextToken => "InvalidNextToken",
        LimitExceeded => "LimitExceeded",
        ResourceContention => "ResourceContention",
        ResourceInUse => "ResourceInUse",
        ScalingActivityInProgress => "ScalingActivityInProgress",
        ServiceLinkedRoleFailure => "ServiceLinkedRoleFailure",
        Throttling => "Throttling",
    }
}

const THROTTLING_CODES: &[&str] =
    &["Throttling", "ThrottlingException", "RequestLimitExceeded", "RequestThrottled"];

/// An `<ErrorResponse>` returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (http {status}): {message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
    /// `Sender` or `Receiver`.
    pub fault: Option<String>,
    pub request_id: Option<String>,
    pub status: i32,
}

impl ServiceError {
    pub fn is_throttling(&self) -> bool {
        THROTTLING_CODES.contains(&self.kind.as_str())
    }

    pub fn is_retryable(&self) -> bool {
        self.is_throttling() || self.kind == ErrorKind::ResourceContention || self.status >= 500
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("transport error: {0}")]
    Transport(#[from] minreq::Error),

    #[error("malformed response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("can't parse <{element}> value {value:?}")]
    Parse { element: String, value: String },

    #[error("unexpected response (http {status}): {body}")]
    Unexpected { status: i32, body: String },

    #[error("can't sign request: {0}")]
    Signing(String),

    #[error("invalid request: {0}")]
    Request(#[from] http::Error),

    #[error("invalid header: {0}")]
    Header(#[from] http::header::ToStrError),
}

impl Error {
    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service(err) => err.is_retryable(),
            Error::Transport(_) => true,
            Error::Unexpected { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn service_error(code: &str, status: i32) -> ServiceError {
        ServiceError {
            kind: ErrorKind::from(code),
            message: "boom".into(),
            fault: Some("Sender".into()),
            request_id: None,
            status,
        }
    }

    #[test]
    fn known_codes_map_to_kinds() {
        assert_eq!(ErrorKind::from("AlreadyExists"), ErrorKind::AlreadyExists);
        assert_eq!(
            ErrorKind::from("ScalingActivityInProgress"),
            ErrorKind::ScalingActivityInProgress,
        );
        assert_eq!(
            ErrorKind::from("ValidationError"),
            ErrorKind::Unknown("ValidationError".into()),
        );
        assert_eq!(ErrorKind::from("ValidationError").as_str(), "ValidationError");
    }

    #[test]
    fn throttling_and_contention_are_retryable() {
        assert!(service_error("Throttling", 400).is_retryable());
        assert!(service_error("RequestLimitExceeded", 400).is_retryable());
        assert!(service_error("ResourceContention", 500).is_retryable());
        assert!(service_error("InternalFailure", 503).is_retryable());
        assert!(!service_error("AlreadyExists", 400).is_retryable());
        assert!(!service_error("ValidationError", 400).is_retryable());
    }

    #[test]
    fn display_names_code_and_message() {
        let err = Error::from(service_error("LimitExceeded", 400));
        assert_eq!(err.to_string(), "LimitExceeded (http 400): boom");
        assert!(err.service_error().is_some());
        assert!(!err.is_retryable());
    }
}
