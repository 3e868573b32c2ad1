//! Media type parsing and content negotiation for the Actix ecosystem.
//!
//! Implements the proactive negotiation rules of [RFC 7231 §5.3]: parsing `Content-Type` and
//! `Accept` style media type expressions (with parameters and q-factor weights) and choosing the
//! best mutually acceptable media type between two lists.
//!
//! # Examples
//! ```
//! use actix_conneg::{parse_list, preferred_match};
//!
//! let accept = parse_list("text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c").unwrap();
//! let offered = parse_list("application/json, text/plain, text/x-dvi, text/html").unwrap();
//!
//! // all three supported offers have the default quality; the last of them wins
//! let best = preferred_match(&accept, &offered).unwrap();
//! assert_eq!(best.essence(), "text/html");
//! ```
//!
//! # Crate Features
//! - `http` (default): extraction of `Content-Type` and `Accept` from [`http`] request types
//!   through [`HttpMessageExt`].
//!
//! [RFC 7231 §5.3]: https://datatracker.ietf.org/doc/html/rfc7231#section-5.3

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible, missing_docs)]
#![doc(html_logo_url = "https://actix.rs/img/logo.png")]
#![doc(html_favicon_url = "https://actix.rs/favicon.ico")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod error;
mod list;
mod media_type;
mod negotiate;
#[cfg(feature = "http")]
mod request;

pub use self::error::{NegotiationError, ParseError};
pub use self::list::MediaTypeList;
pub use self::media_type::{MediaType, DEFAULT_QUALITY, STAR};
pub use self::negotiate::{preferred_match, supports};
#[cfg(feature = "http")]
pub use self::request::{parse_request, HttpMessageExt};

/// Parses a single media type expression. Blank input yields `Ok(None)`.
///
/// Shorthand for [`MediaType::parse_one`].
pub fn parse_one(text: &str) -> Result<Option<MediaType>, ParseError> {
    MediaType::parse_one(text)
}

/// Parses a comma separated list of media type expressions.
///
/// Shorthand for [`MediaTypeList::parse`].
pub fn parse_list(text: &str) -> Result<MediaTypeList, ParseError> {
    MediaTypeList::parse(text)
}
