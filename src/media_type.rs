//! Single media type records and their parser.

use std::{fmt, str};

use smallvec::SmallVec;

use crate::error::ParseError;

/// The wildcard token, matching any type or subtype.
pub const STAR: &str = "*";

/// Quality assumed when no `q` parameter is present ([RFC 7231 §5.3.1]).
///
/// [RFC 7231 §5.3.1]: https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.1
pub const DEFAULT_QUALITY: f64 = 1.0;

type Params = SmallVec<[(String, String); 2]>;

/// A single parsed media type expression, such as `text/html; charset=utf-8; q=0.5`.
///
/// Either component may be the wildcard token `*`. Parameters keep their order of appearance;
/// the `q` parameter is also available as a number through [`quality`](Self::quality).
///
/// # Examples
/// ```
/// use actix_conneg::MediaType;
///
/// let mt = MediaType::parse_one("text/html; q=0.5; charset=utf-8")
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(mt.essence(), "text/html");
/// assert_eq!(mt.type_(), "text");
/// assert_eq!(mt.subtype(), "html");
/// assert_eq!(mt.param("charset"), Some("utf-8"));
/// assert_eq!(mt.quality(), 0.5);
///
/// // `q` is always written last
/// assert_eq!(mt.to_string(), "text/html; charset=utf-8; q=0.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    essence: String,
    slash: usize,
    params: Params,
    quality: f64,
}

impl MediaType {
    /// Parses a single, non comma-terminated media type expression.
    ///
    /// Returns `Ok(None)` when `text` is empty or only whitespace, which lets list parsing skip
    /// blank segments without treating them as failures.
    ///
    /// # Errors
    /// - [`ParseError::InvalidMediaType`] when the media type does not split into exactly two
    ///   non-empty components around a `/`.
    /// - [`ParseError::MalformedParameter`] when a parameter is not exactly one `key=value` pair.
    /// - [`ParseError::MalformedQuality`] when the `q` parameter is not a number.
    ///
    /// Quality values are not range checked.
    pub fn parse_one(text: &str) -> Result<Option<MediaType>, ParseError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let (essence, params_text) = match text.split_once(';') {
            Some((essence, params_text)) => (essence.trim(), Some(params_text)),
            None => (text.trim(), None),
        };

        let slash = match essence.split_once('/') {
            Some((type_, subtype))
                if !type_.is_empty() && !subtype.is_empty() && !subtype.contains('/') =>
            {
                type_.len()
            }
            _ => {
                tracing::debug!("rejected media type: {:?}", essence);
                return Err(ParseError::invalid_media_type(essence));
            }
        };

        let mut params = Params::new();
        let mut quality = DEFAULT_QUALITY;

        for segment in params_text.into_iter().flat_map(|params| params.split(';')) {
            let mut parts = segment.split('=');

            let (key, val) = match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(val), None) => (key.trim(), val.trim()),
                _ => {
                    tracing::debug!("rejected media type parameter: {:?}", segment);
                    return Err(ParseError::malformed_parameter(segment));
                }
            };

            if key == "q" {
                quality = val.parse::<f64>().map_err(|_| {
                    tracing::debug!("rejected quality value: {:?}", val);
                    ParseError::malformed_quality(val)
                })?;
            }

            // repeated keys keep their first position but take the latest value
            match params.iter_mut().find(|(k, _)| k == key) {
                Some((_, existing)) => *existing = val.to_owned(),
                None => params.push((key.to_owned(), val.to_owned())),
            }
        }

        let mt = MediaType {
            essence: essence.to_owned(),
            slash,
            params,
            quality,
        };

        tracing::trace!("parsed media type: {}", mt);

        Ok(Some(mt))
    }

    /// Constructs `*/*` with the default quality.
    pub fn star() -> MediaType {
        MediaType {
            essence: "*/*".to_owned(),
            slash: 1,
            params: Params::new(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// The normalized `type/subtype` text, without parameters.
    pub fn essence(&self) -> &str {
        &self.essence
    }

    /// The major type, the component before the `/`.
    pub fn type_(&self) -> &str {
        &self.essence[..self.slash]
    }

    /// The subtype, the component after the `/`.
    pub fn subtype(&self) -> &str {
        &self.essence[self.slash + 1..]
    }

    /// The weight of this entry; [`DEFAULT_QUALITY`] when no `q` parameter was given.
    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// Looks up a parameter value by name. Names are compared exactly.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, val)| val.as_str())
    }

    /// Iterates over parameters in the order they were parsed, including `q` if present.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, val)| (key.as_str(), val.as_str()))
    }

    /// Returns true if either component is the wildcard token.
    pub fn is_wildcard(&self) -> bool {
        self.type_() == STAR || self.subtype() == STAR
    }

    /// Returns true if this entry accepts `candidate`.
    ///
    /// Each of this entry's components must be the wildcard or equal to the candidate's, and this
    /// entry's quality must not be zero; `q=0` marks a type as explicitly not acceptable. The
    /// candidate's own quality is not considered.
    pub fn matches(&self, candidate: &MediaType) -> bool {
        (self.type_() == STAR || self.type_() == candidate.type_())
            && (self.subtype() == STAR || self.subtype() == candidate.subtype())
            && self.quality != 0.0
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.essence)?;

        // q is written once, from the numeric value, below
        for (key, val) in self.params.iter().filter(|(key, _)| key != "q") {
            write!(f, "; {}={}", key, val)?;
        }

        if self.quality != DEFAULT_QUALITY {
            write!(f, "; q={}", self.quality)?;
        }

        Ok(())
    }
}

/// Parses a single media type; unlike [`MediaType::parse_one`], blank input is an error.
impl str::FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::parse_one(s)?.ok_or_else(|| ParseError::invalid_media_type(s.trim()))
    }
}
