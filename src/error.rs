// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// The fixed message shown for any failed feed fetch. Every transport and
/// decoding failure collapses into this one non-retriable string.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load news";

/// Errors produced while fetching or decoding the news feed.
///
/// The variants keep the internal taxonomy for diagnostics, but every one of
/// them renders as the same fixed user-facing message.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (connect, DNS, timeout).
    Http(String),
    /// The endpoint answered with a non-success HTTP status.
    Status(u16),
    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
}

impl Error {
    /// The user-visible text for this error. All variants collapse to the
    /// single fixed message; the taxonomy only feeds stderr diagnostics.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Status(code) => write!(f, "HTTP Status: {}", code),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_status_error() {
        let err = Error::Status(503);
        assert_eq!(format!("{}", err), "HTTP Status: 503");
    }

    #[test]
    fn from_json_error_produces_decode_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn every_variant_collapses_to_fixed_user_message() {
        let errors = [
            Error::Http("boom".into()),
            Error::Status(404),
            Error::Decode("bad field".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
        }
    }
}
