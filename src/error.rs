use axum::{
    Json,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Header carrying the protocol error-type identifier on every error response.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// The fixed catalog of SendEmail error kinds.
///
/// Each kind is bound to an HTTP status code and a protocol error-type
/// string. The catalog mirrors the common errors shared by every operation
/// of the real service plus the kinds specific to SendEmail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AccessDenied,
    ExpiredToken,
    IncompleteSignature,
    InternalFailure,
    MalformedHttpRequest,
    NotAuthorized,
    OptInRequired,
    RequestAborted,
    RequestEntityTooLarge,
    RequestExpired,
    RequestTimeout,
    ServiceUnavailable,
    Throttling,
    UnrecognizedClient,
    UnknownOperation,
    ValidationError,
    AccountSuspended,
    BadRequest,
    LimitExceeded,
    MailFromDomainNotVerified,
    MessageRejected,
    NotFound,
    SendingPaused,
    TooManyRequests,
}

impl ErrorKind {
    /// Every kind in the catalog.
    pub const ALL: [Self; 24] = [
        Self::AccessDenied,
        Self::ExpiredToken,
        Self::IncompleteSignature,
        Self::InternalFailure,
        Self::MalformedHttpRequest,
        Self::NotAuthorized,
        Self::OptInRequired,
        Self::RequestAborted,
        Self::RequestEntityTooLarge,
        Self::RequestExpired,
        Self::RequestTimeout,
        Self::ServiceUnavailable,
        Self::Throttling,
        Self::UnrecognizedClient,
        Self::UnknownOperation,
        Self::ValidationError,
        Self::AccountSuspended,
        Self::BadRequest,
        Self::LimitExceeded,
        Self::MailFromDomainNotVerified,
        Self::MessageRejected,
        Self::NotFound,
        Self::SendingPaused,
        Self::TooManyRequests,
    ];

    /// The HTTP status code fixed for this kind.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::AccessDenied
            | Self::ExpiredToken
            | Self::IncompleteSignature
            | Self::OptInRequired
            | Self::UnrecognizedClient => StatusCode::FORBIDDEN,
            Self::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MalformedHttpRequest
            | Self::RequestAborted
            | Self::RequestExpired
            | Self::Throttling
            | Self::ValidationError
            | Self::AccountSuspended
            | Self::BadRequest
            | Self::LimitExceeded
            | Self::MailFromDomainNotVerified
            | Self::MessageRejected
            | Self::SendingPaused => StatusCode::BAD_REQUEST,
            Self::NotAuthorized => StatusCode::UNAUTHORIZED,
            Self::RequestEntityTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::UnknownOperation | Self::NotFound => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// The protocol error-type string fixed for this kind.
    #[must_use]
    pub const fn error_type(self) -> &'static str {
        match self {
            Self::AccessDenied => "AccessDeniedException",
            Self::ExpiredToken => "ExpiredTokenException",
            Self::IncompleteSignature => "IncompleteSignature",
            Self::InternalFailure => "InternalFailure",
            Self::MalformedHttpRequest => "MalformedHttpRequestException",
            Self::NotAuthorized => "NotAuthorized",
            Self::OptInRequired => "OptInRequired",
            Self::RequestAborted => "RequestAbortedException",
            Self::RequestEntityTooLarge => "RequestEntityTooLargeException",
            Self::RequestExpired => "RequestExpired",
            Self::RequestTimeout => "RequestTimeoutException",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Throttling => "ThrottlingException",
            Self::UnrecognizedClient => "UnrecognizedClientException",
            Self::UnknownOperation => "UnknownOperationException",
            Self::ValidationError => "ValidationError",
            Self::AccountSuspended => "AccountSuspendedException",
            Self::BadRequest => "BadRequestException",
            Self::LimitExceeded => "LimitExceededException",
            Self::MailFromDomainNotVerified => "MailFromDomainNotVerifiedException",
            Self::MessageRejected => "MessageRejected",
            Self::NotFound => "NotFoundException",
            Self::SendingPaused => "SendingPausedException",
            Self::TooManyRequests => "TooManyRequestsException",
        }
    }

    /// Looks up a kind by its protocol error-type string.
    #[must_use]
    pub fn from_error_type(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.error_type() == name)
    }
}

/// A typed error returned by a send handler.
///
/// The status code and error-type string come from the kind; the message is
/// free text carried in the response body.
#[derive(Debug, Clone, Error)]
#[error("{}: {}", .kind.error_type(), .message)]
pub struct SendError {
    pub kind: ErrorKind,
    pub message: String,
}

impl SendError {
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind, message: String::new() }
    }

    #[must_use]
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl From<ErrorKind> for SendError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        tracing::debug!(error_type = self.kind.error_type(), message = %self.message, "send request failed");
        let mut response =
            (self.kind.status_code(), Json(ErrorBody { message: self.message })).into_response();
        response.headers_mut().insert(ERROR_TYPE_HEADER, HeaderValue::from_static(self.kind.error_type()));
        response
    }
}
