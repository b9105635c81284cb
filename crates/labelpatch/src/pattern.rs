//! Fuzzy byte matcher.
//!
//! A search pattern is plain ASCII where every space is a wildcard for a run
//! of one or more *filler* bytes, i.e. anything that is not an ASCII letter.
//! Label buffers insert control bytes and line breaks at word boundaries, so
//! `"Gulf of America"` must also match `b"Gulf of\x01\n America"`. Letters
//! match exactly, case included.
//!
//! The scan restarts at every offset, O(n·m) in the worst case.

use core::iter::{Chain, Copied, RepeatN};

use crate::error::PatternError;

/// Pattern byte that matches a run of filler bytes.
pub const WILDCARD: u8 = b' ';

/// Whether `byte` may stand in for a space: anything outside `A-Z`/`a-z`.
#[inline]
#[must_use]
pub const fn is_filler(byte: u8) -> bool {
    !byte.is_ascii_alphabetic()
}

/// A validated search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPattern<'a> {
    bytes: &'a [u8],
    /// Index of the first byte of the last word.
    anchor: usize,
}

impl<'a> SearchPattern<'a> {
    /// Validate `bytes` as a search pattern.
    ///
    /// # Errors
    ///
    /// The pattern must contain at least two words, must not start or end
    /// with a wildcard, and every wildcard must be followed by a letter so
    /// the greedy filler run can never swallow the next literal.
    pub const fn new(bytes: &'a [u8]) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        let mut anchor = None;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == WILDCARD {
                if i == 0 || i + 1 == bytes.len() {
                    return Err(PatternError::EdgeWildcard { index: i });
                }
                if !bytes[i + 1].is_ascii_alphabetic() {
                    return Err(PatternError::AmbiguousWildcard { index: i });
                }
                anchor = Some(i + 1);
            }
            i += 1;
        }
        match anchor {
            Some(anchor) => Ok(Self { bytes, anchor }),
            None => Err(PatternError::SingleWord),
        }
    }

    /// The raw pattern bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Pattern index where the distinguishing (last) word starts.
    #[must_use]
    pub const fn anchor_offset(&self) -> usize {
        self.anchor
    }

    /// First byte of the distinguishing word, e.g. `b'A'` for
    /// `"Gulf of America"`.
    #[must_use]
    pub const fn anchor_byte(&self) -> u8 {
        self.bytes[self.anchor]
    }

    /// The distinguishing word itself.
    #[must_use]
    pub const fn distinguishing_word(&self) -> &'a [u8] {
        self.bytes.split_at(self.anchor).1
    }

    /// Try to consume the whole pattern from `buf[start..]`.
    ///
    /// The buffer cursor moves independently of the pattern index since one
    /// wildcard can eat many buffer bytes. Running off the end of `buf` is a
    /// plain mismatch.
    #[must_use]
    pub fn match_at(&self, buf: &[u8], start: usize) -> Option<Match> {
        let mut cursor = start;
        for &expected in self.bytes {
            if expected == WILDCARD {
                if !is_filler(*buf.get(cursor)?) {
                    return None;
                }
                cursor += 1;
                while buf.get(cursor).copied().is_some_and(is_filler) {
                    cursor += 1;
                }
            } else {
                if *buf.get(cursor)? != expected {
                    return None;
                }
                cursor += 1;
            }
        }
        Some(Match {
            start,
            len: cursor - start,
        })
    }

    /// Every offset in `haystack` where the pattern matches, in order.
    #[must_use]
    pub fn find_iter<'b>(&self, haystack: &'b [u8]) -> Matches<'a, 'b> {
        Matches {
            pattern: *self,
            haystack,
            next: 0,
        }
    }
}

/// A successful fuzzy match.
///
/// `len` covers the buffer bytes actually consumed, so it grows with the
/// filler runs and is at least the pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// Offset of the first matched byte.
    pub start: usize,
    /// Number of buffer bytes matched.
    pub len: usize,
}

impl Match {
    /// One past the last matched byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The matched byte range.
    #[must_use]
    pub const fn range(&self) -> core::ops::Range<usize> {
        self.start..self.end()
    }
}

/// Iterator over the matches of a [`SearchPattern`] in a byte slice.
///
/// Created by [`SearchPattern::find_iter`]. Every start offset is tried, so
/// overlapping matches are all reported.
#[derive(Debug, Clone)]
pub struct Matches<'a, 'b> {
    pattern: SearchPattern<'a>,
    haystack: &'b [u8],
    next: usize,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.haystack.len() {
            let start = self.next;
            self.next += 1;
            if let Some(found) = self.pattern.match_at(self.haystack, start) {
                return Some(found);
            }
        }
        None
    }
}

/// Bytes written over the distinguishing word in the bare layout.
///
/// Always exactly as wide as the word it replaces: the canonical word,
/// then zero-width fill up to the full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementPattern<'a> {
    word: &'a [u8],
    fill: u8,
    width: usize,
}

impl<'a> ReplacementPattern<'a> {
    /// Build a replacement `width` bytes wide.
    ///
    /// # Errors
    ///
    /// Fails when `word` is longer than `width`, which would write past the
    /// replaced word, or when `fill` is a letter.
    pub const fn new(word: &'a [u8], fill: u8, width: usize) -> Result<Self, PatternError> {
        if !is_filler(fill) {
            return Err(PatternError::FillIsAlphabetic { fill });
        }
        if word.len() > width {
            return Err(PatternError::ReplacementTooLong {
                replacement: word.len(),
                available: width,
            });
        }
        Ok(Self { word, fill, width })
    }

    /// Total number of bytes written.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The visible part of the replacement.
    #[must_use]
    pub const fn word(&self) -> &'a [u8] {
        self.word
    }

    /// The zero-width fill byte.
    #[must_use]
    pub const fn fill(&self) -> u8 {
        self.fill
    }

    /// The replacement bytes, padding included.
    #[must_use]
    pub fn bytes(&self) -> Chain<Copied<core::slice::Iter<'a, u8>>, RepeatN<u8>> {
        self.word
            .iter()
            .copied()
            .chain(core::iter::repeat_n(self.fill, self.width - self.word.len()))
    }
}
