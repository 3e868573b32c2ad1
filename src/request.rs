//! Media type extraction from `http` request types.

use http::header::{self, HeaderMap, HeaderValue};

use crate::{
    error::{NegotiationError, ParseError},
    list::MediaTypeList,
    media_type::MediaType,
};

/// Reads negotiation headers from an HTTP message.
///
/// Implemented for [`HeaderMap`], [`http::Request`] and [`http::request::Parts`]. Other request
/// types only need to expose their header map.
pub trait HttpMessageExt {
    /// Read the message headers.
    fn headers(&self) -> &HeaderMap;

    /// Parses the `Content-Type` header.
    ///
    /// Only the first header value is used. Returns `Ok(None)` if the header is missing or blank.
    fn content_media_type(&self) -> Result<Option<MediaType>, ParseError> {
        match self.headers().get(header::CONTENT_TYPE) {
            Some(val) => MediaType::parse_one(header_str(val)?),
            None => Ok(None),
        }
    }

    /// Parses all `Accept` header values as a single list.
    ///
    /// Repeated `Accept` headers are joined with a comma before parsing, as if they had been sent
    /// as one field ([RFC 7230 §3.2.2]). A missing header results in an empty list.
    ///
    /// [RFC 7230 §3.2.2]: https://datatracker.ietf.org/doc/html/rfc7230#section-3.2.2
    fn accepted_media_types(&self) -> Result<MediaTypeList, ParseError> {
        let mut joined = String::new();

        for (idx, val) in self.headers().get_all(header::ACCEPT).iter().enumerate() {
            if idx > 0 {
                joined.push(',');
            }

            joined.push_str(header_str(val)?);
        }

        MediaTypeList::parse(&joined)
    }

    /// Chooses which of the `offered` media types to respond with.
    ///
    /// A request without an `Accept` header accepts any media type ([RFC 7231 §5.3.2]).
    ///
    /// # Errors
    /// - [`NegotiationError::Parse`] if the `Accept` header is malformed.
    /// - [`NegotiationError::NotAcceptable`] if no offered type is acceptable.
    ///
    /// [RFC 7231 §5.3.2]: https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.2
    fn negotiate(&self, offered: &MediaTypeList) -> Result<MediaType, NegotiationError> {
        let accept = if self.headers().contains_key(header::ACCEPT) {
            self.accepted_media_types()?
        } else {
            MediaTypeList::star()
        };

        accept
            .preferred_match(offered)
            .cloned()
            .ok_or(NegotiationError::NotAcceptable)
    }
}

fn header_str(val: &HeaderValue) -> Result<&str, ParseError> {
    val.to_str().map_err(|_| {
        tracing::debug!("negotiation header is not visible ASCII: {:?}", val);
        ParseError::InvalidHeaderValue
    })
}

/// Parses the `Content-Type` and `Accept` headers of a message.
///
/// The content type is parsed first; the first failure is returned and nothing else is.
///
/// # Examples
/// ```
/// use actix_conneg::parse_request;
///
/// let req = http::Request::post("/")
///     .header("content-type", "application/json; charset=utf-8")
///     .header("accept", "text/html")
///     .header("accept", "application/json; q=0.9")
///     .body(())
///     .unwrap();
///
/// let (content_type, accept) = parse_request(&req).unwrap();
///
/// assert_eq!(content_type.unwrap().param("charset"), Some("utf-8"));
/// assert_eq!(accept.to_string(), "text/html, application/json; q=0.9");
/// ```
pub fn parse_request<M>(msg: &M) -> Result<(Option<MediaType>, MediaTypeList), ParseError>
where
    M: HttpMessageExt + ?Sized,
{
    let content = msg.content_media_type()?;
    let accepts = msg.accepted_media_types()?;
    Ok((content, accepts))
}

impl HttpMessageExt for HeaderMap {
    fn headers(&self) -> &HeaderMap {
        self
    }
}

impl<B> HttpMessageExt for http::Request<B> {
    fn headers(&self) -> &HeaderMap {
        http::Request::headers(self)
    }
}

impl HttpMessageExt for http::request::Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<T> HttpMessageExt for &T
where
    T: HttpMessageExt + ?Sized,
{
    fn headers(&self) -> &HeaderMap {
        (**self).headers()
    }
}
