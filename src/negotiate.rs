//! Support checks and preferred match selection between two media type lists.

use crate::{list::MediaTypeList, media_type::MediaType};

/// Returns true if some entry of `list` accepts `candidate`.
///
/// See [`MediaType::matches`] for the per-entry rule. An entry with `q=0` never matches.
pub fn supports(list: &[MediaType], candidate: &MediaType) -> bool {
    list.iter().any(|entry| entry.matches(candidate))
}

/// Chooses the best entry of `options` that is supported by `list`.
///
/// Unsupported options are dropped. The remaining candidates are ranked by their own quality (not
/// the quality of the `list` entry that accepted them) and the highest one is returned. When
/// several candidates share the highest quality, the one appearing _last_ in `options` wins.
///
/// Returns `None` when no option is supported.
pub fn preferred_match<'a>(list: &[MediaType], options: &'a [MediaType]) -> Option<&'a MediaType> {
    // a later candidate replaces the best unless its quality is strictly lower, so the last of
    // equal qualities wins (-0 equals 0; NaN compares equal to everything)
    let choice = options
        .iter()
        .filter(|option| supports(list, option))
        .reduce(|best, option| {
            if option.quality() < best.quality() {
                best
            } else {
                option
            }
        });

    match choice {
        Some(mt) => tracing::trace!("negotiated media type: {}", mt),
        None => tracing::trace!("no mutually acceptable media type"),
    }

    choice
}

impl MediaTypeList {
    /// Returns true if some entry of this list accepts `candidate`.
    ///
    /// # Examples
    /// ```
    /// use actix_conneg::{MediaType, MediaTypeList};
    ///
    /// let list: MediaTypeList = "text/html, application/*, image/png; q=0".parse().unwrap();
    ///
    /// assert!(list.supports(&"text/html".parse().unwrap()));
    /// assert!(list.supports(&"application/json".parse().unwrap()));
    /// assert!(!list.supports(&"image/png".parse().unwrap()));
    /// assert!(!list.supports(&"text/plain".parse().unwrap()));
    /// ```
    pub fn supports(&self, candidate: &MediaType) -> bool {
        supports(self, candidate)
    }

    /// Chooses the best entry of `options` that this list supports.
    ///
    /// See [`preferred_match`] for the ranking rules.
    ///
    /// # Examples
    /// ```
    /// use actix_conneg::MediaTypeList;
    ///
    /// let accept: MediaTypeList = "text/*, application/json".parse().unwrap();
    /// let offered: MediaTypeList = "image/png, text/plain; q=0.5, application/json; q=0.9"
    ///     .parse()
    ///     .unwrap();
    ///
    /// let best = accept.preferred_match(&offered).unwrap();
    /// assert_eq!(best.essence(), "application/json");
    ///
    /// let offered: MediaTypeList = "image/png".parse().unwrap();
    /// assert!(accept.preferred_match(&offered).is_none());
    /// ```
    pub fn preferred_match<'a>(&self, options: &'a MediaTypeList) -> Option<&'a MediaType> {
        preferred_match(self, options)
    }
}
