use alloc::borrow::Cow;
#[cfg(feature = "json")]
use alloc::vec::Vec;

#[cfg(feature = "json")]
use crate::error::TextError;
use crate::options::{CANONICAL_NAME, SOURCE_NAME};

/// Exact substring replacement over UTF-8 text.
///
/// Used for the JSON channel, where the name appears verbatim and the text
/// may change length freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSubstitutor<'a> {
    from: &'a str,
    to: &'a str,
}

impl TextSubstitutor<'static> {
    /// Replaces [`SOURCE_NAME`] with [`CANONICAL_NAME`].
    pub const DEFAULT: Self = Self::new(SOURCE_NAME, CANONICAL_NAME);
}

impl Default for TextSubstitutor<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'a> TextSubstitutor<'a> {
    /// Replace every occurrence of `from` with `to`.
    #[must_use]
    pub const fn new(from: &'a str, to: &'a str) -> Self {
        Self { from, to }
    }

    /// Replace all occurrences, borrowing `text` when there are none.
    ///
    /// An empty `from` never matches.
    #[must_use]
    pub fn substitute<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.from.is_empty() || !text.contains(self.from) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.replace(self.from, self.to))
    }

    /// Substitute, parse the result as a JSON array and hand the elements to
    /// `wrap`.
    ///
    /// This is the drop-in for the host's `parseAndWrap(text, Wrapper)`.
    ///
    /// # Errors
    ///
    /// Returns the parser's error unchanged if the substituted text is not a
    /// JSON array. Substitution swaps ASCII letters for ASCII letters, so it
    /// cannot make valid JSON invalid.
    ///
    /// ```rust
    /// use labelpatch::TextSubstitutor;
    ///
    /// let names = TextSubstitutor::DEFAULT
    ///     .parse_and_wrap(r#"["Gulf of America", 3]"#, |items| items.len())
    ///     .unwrap();
    /// assert_eq!(names, 2);
    /// ```
    #[cfg(feature = "json")]
    pub fn parse_and_wrap<W, F>(&self, text: &str, wrap: F) -> Result<W, TextError>
    where
        F: FnOnce(Vec<serde_json::Value>) -> W,
    {
        let text = self.substitute(text);
        let items: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        Ok(wrap(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let out = TextSubstitutor::DEFAULT.substitute("Gulf of America / Gulf of America");
        assert_eq!(out, "Gulf of Mexico / Gulf of Mexico");
    }

    #[test]
    fn borrows_when_nothing_to_replace() {
        let out = TextSubstitutor::DEFAULT.substitute("Gulf of Mexico");
        assert!(matches!(out, Cow::Borrowed("Gulf of Mexico")));
    }

    #[test]
    fn text_match_is_exact() {
        // No fuzzy spacing on the text path.
        let input = "Gulf of\nAmerica, gulf of america";
        assert!(matches!(
            TextSubstitutor::DEFAULT.substitute(input),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn empty_needle_is_inert() {
        let out = TextSubstitutor::new("", "x").substitute("abc");
        assert_eq!(out, "abc");
    }

    #[cfg(feature = "json")]
    #[test]
    fn parse_and_wrap_substitutes_first() {
        use alloc::string::String;

        let payload = r#"[["Gulf of America", 25.0, -90.0], null]"#;
        let first: String = TextSubstitutor::DEFAULT
            .parse_and_wrap(payload, |items| items[0][0].as_str().unwrap().into())
            .unwrap();
        assert_eq!(first, "Gulf of Mexico");
    }

    #[cfg(feature = "json")]
    #[test]
    fn parse_and_wrap_propagates_parse_errors() {
        let err = TextSubstitutor::DEFAULT
            .parse_and_wrap("[\"Gulf of America\"", |_| ())
            .unwrap_err();
        let TextError::Json(inner) = err;
        assert!(inner.is_eof());
    }

    #[cfg(feature = "json")]
    #[test]
    fn parse_and_wrap_requires_array() {
        assert!(
            TextSubstitutor::DEFAULT
                .parse_and_wrap(r#"{"name": "Gulf of America"}"#, |_| ())
                .is_err()
        );
    }
}
