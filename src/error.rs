//! Error types.

use derive_more::{Display, Error, From};
#[cfg(feature = "http")]
use http::StatusCode;

/// A set of errors that can occur while parsing media type expressions.
///
/// All variants describe malformed input; retrying the same text will fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The `type/subtype` segment did not split into exactly two non-empty components.
    #[display("invalid media type [{}]", value)]
    InvalidMediaType {
        #[error(not(source))]
        value: String,
    },

    /// A parameter segment did not contain exactly one `=` separator.
    #[display("malformed parameter [{}]", value)]
    MalformedParameter {
        #[error(not(source))]
        value: String,
    },

    /// The `q` parameter value is not a floating point number.
    #[display("malformed quality [{}]", value)]
    MalformedQuality {
        #[error(not(source))]
        value: String,
    },

    /// Header value contained bytes that are not visible ASCII.
    #[display("header value is not valid visible ASCII")]
    InvalidHeaderValue,
}

impl ParseError {
    pub(crate) fn invalid_media_type(value: impl Into<String>) -> Self {
        Self::InvalidMediaType {
            value: value.into(),
        }
    }

    pub(crate) fn malformed_parameter(value: impl Into<String>) -> Self {
        Self::MalformedParameter {
            value: value.into(),
        }
    }

    pub(crate) fn malformed_quality(value: impl Into<String>) -> Self {
        Self::MalformedQuality {
            value: value.into(),
        }
    }

    /// Status code a server should respond with when a request header fails to parse.
    #[cfg(feature = "http")]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Errors returned by request-level negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
#[non_exhaustive]
pub enum NegotiationError {
    /// A negotiation header could not be parsed.
    #[display("{}", _0)]
    Parse(ParseError),

    /// None of the offered media types is acceptable to the client.
    #[display("no acceptable media type")]
    #[from(ignore)]
    NotAcceptable,
}

impl NegotiationError {
    /// Status code a server should respond with for this error.
    ///
    /// Parse failures map to `400 Bad Request`; an empty intersection maps to
    /// `406 Not Acceptable`.
    #[cfg(feature = "http")]
    pub fn status_code(&self) -> StatusCode {
        match self {
            NegotiationError::Parse(err) => err.status_code(),
            NegotiationError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(ParseError: std::error::Error, Send, Sync, Clone);
    assert_impl_all!(NegotiationError: std::error::Error, Send, Sync, From<ParseError>);

    #[test]
    fn display_output() {
        assert_eq!(
            ParseError::invalid_media_type("text").to_string(),
            "invalid media type [text]"
        );
        assert_eq!(
            ParseError::malformed_parameter(" charset").to_string(),
            "malformed parameter [ charset]"
        );
        assert_eq!(
            ParseError::malformed_quality("high").to_string(),
            "malformed quality [high]"
        );
        assert_eq!(
            NegotiationError::from(ParseError::InvalidHeaderValue).to_string(),
            "header value is not valid visible ASCII"
        );
        assert_eq!(
            NegotiationError::NotAcceptable.to_string(),
            "no acceptable media type"
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn status_codes() {
        let err = ParseError::malformed_quality("x");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = NegotiationError::from(err);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(
            NegotiationError::NotAcceptable.status_code(),
            StatusCode::NOT_ACCEPTABLE
        );
    }
}
