//! Ordered media type lists.

use std::{fmt, slice, str, vec};

use derive_more::{Deref, From};

use crate::{error::ParseError, media_type::MediaType};

/// An ordered list of media types, as found in an `Accept` header or a server's set of
/// producible representations.
///
/// Order of appearance is preserved. It decides serialization order and breaks quality ties
/// during [negotiation](Self::preferred_match).
///
/// # Examples
/// ```
/// use actix_conneg::MediaTypeList;
///
/// let list = MediaTypeList::parse("text/plain; q=0.5, text/html, text/x-dvi; q=0.8, text/x-c")
///     .unwrap();
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list[0].essence(), "text/plain");
/// assert_eq!(list[1].essence(), "text/html");
/// assert_eq!(list[2].quality(), 0.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deref, From)]
pub struct MediaTypeList(Vec<MediaType>);

impl MediaTypeList {
    /// Constructs an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs the list `*/*`, which accepts any media type.
    pub fn star() -> Self {
        MediaTypeList(vec![MediaType::star()])
    }

    /// Parses a comma separated list of media type expressions.
    ///
    /// Blank segments, such as one left by a trailing comma, are skipped. The first segment that
    /// fails to parse aborts the whole list; no partial result is returned.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut types = Vec::with_capacity(1);

        for segment in text.split(',') {
            if let Some(mt) = MediaType::parse_one(segment)? {
                types.push(mt);
            }
        }

        Ok(MediaTypeList(types))
    }

    /// Consumes the list, returning the inner vector.
    pub fn into_inner(self) -> Vec<MediaType> {
        self.0
    }
}

impl fmt::Display for MediaTypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();

        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
        }

        for mt in iter {
            f.write_str(", ")?;
            fmt::Display::fmt(mt, f)?;
        }

        Ok(())
    }
}

impl str::FromStr for MediaTypeList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaTypeList::parse(s)
    }
}

impl FromIterator<MediaType> for MediaTypeList {
    fn from_iter<I: IntoIterator<Item = MediaType>>(iter: I) -> Self {
        MediaTypeList(iter.into_iter().collect())
    }
}

impl IntoIterator for MediaTypeList {
    type Item = MediaType;
    type IntoIter = vec::IntoIter<MediaType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MediaTypeList {
    type Item = &'a MediaType;
    type IntoIter = slice::Iter<'a, MediaType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
