//! In-place label rewriting.
//!
//! Labels come in two layouts:
//!
//! - bare: `Gulf of America`, rewritten to `Gulf of Mexico` plus one
//!   zero-width pad byte;
//! - parenthetical: `Gulf of Mexico (Gulf of America)`, where the canonical
//!   name is already shown and only the parenthesised alternate is blanked.
//!
//! The buffer is a `&mut [u8]` and is never resized; the host addresses it by
//! fixed offsets. Nothing on this path returns an error. A match that cannot
//! be rewritten is logged and left alone.

use core::ops::AddAssign;

use bstr::{BStr, ByteSlice};
use log::{debug, trace, warn};

use crate::{
    error::PatternError,
    options::RewriteOptions,
    pattern::{Match, ReplacementPattern, SearchPattern},
};

const OPEN_PAREN: u8 = b'(';

/// Which of the two label layouts a buffer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Only the alternate name is present.
    Bare,
    /// Canonical name followed by the alternate in parentheses.
    Parenthetical {
        /// Offset of the `(` byte.
        open: usize,
    },
}

/// Outcome of one rewrite call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewriteStats {
    /// Matches rewritten with the canonical word.
    pub bare: usize,
    /// Matches blanked because the canonical name was already present.
    pub parenthetical: usize,
    /// Matches left untouched because the distinguishing word was not where
    /// the match said it would be.
    pub skipped: usize,
}

impl RewriteStats {
    /// Number of matches that changed the buffer.
    #[must_use]
    pub const fn rewritten(&self) -> usize {
        self.bare + self.parenthetical
    }
}

impl AddAssign for RewriteStats {
    fn add_assign(&mut self, rhs: Self) {
        self.bare += rhs.bare;
        self.parenthetical += rhs.parenthetical;
        self.skipped += rhs.skipped;
    }
}

/// Fuzzy matcher plus the two rewrite policies.
///
/// Holds only borrowed, immutable configuration, so a single instance can be
/// shared freely; [`BytePatternRewriter::DEFAULT`] is a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytePatternRewriter<'a> {
    pattern: SearchPattern<'a>,
    replacement: ReplacementPattern<'a>,
    canonical_lead: u8,
}

impl BytePatternRewriter<'static> {
    /// Rewrites [`SOURCE_NAME`](crate::SOURCE_NAME) to
    /// [`CANONICAL_NAME`](crate::CANONICAL_NAME).
    pub const DEFAULT: Self = match Self::new(RewriteOptions::DEFAULT) {
        Ok(rewriter) => rewriter,
        Err(_) => panic!("default rewrite options are invalid"),
    };
}

impl<'a> BytePatternRewriter<'a> {
    /// Build a rewriter from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if the phrase is not a valid
    /// [`SearchPattern`], if the canonical word does not fit over the
    /// phrase's distinguishing word, or if the canonical lead is not a letter.
    pub const fn new(options: RewriteOptions<'a>) -> Result<Self, PatternError> {
        if !options.canonical_lead.is_ascii_alphabetic() {
            return Err(PatternError::LeadNotAlphabetic {
                lead: options.canonical_lead,
            });
        }
        let pattern = match SearchPattern::new(options.phrase) {
            Ok(pattern) => pattern,
            Err(e) => return Err(e),
        };
        let replacement = match ReplacementPattern::new(
            options.canonical_word,
            options.zero_width_fill,
            pattern.distinguishing_word().len(),
        ) {
            Ok(replacement) => replacement,
            Err(e) => return Err(e),
        };
        Ok(Self {
            pattern,
            replacement,
            canonical_lead: options.canonical_lead,
        })
    }

    /// The search pattern this rewriter looks for.
    #[must_use]
    pub const fn pattern(&self) -> &SearchPattern<'a> {
        &self.pattern
    }

    /// Scan the whole of `buf` for `(` directly followed by the canonical
    /// name's leading letter.
    ///
    /// The position of the current match plays no part: a parenthesis
    /// anywhere in the buffer selects the parenthetical layout.
    #[must_use]
    pub fn detect_layout(&self, buf: &[u8]) -> Layout {
        let layout = match buf.find([OPEN_PAREN, self.canonical_lead]) {
            Some(open) => Layout::Parenthetical { open },
            None => Layout::Bare,
        };
        trace!("detected {layout:?} in {:?}", BStr::new(buf));
        layout
    }

    /// Rewrite every match in `buf` in place. The length never changes.
    pub fn rewrite(&self, buf: &mut [u8]) {
        self.rewrite_counted(buf);
    }

    /// Same as [`rewrite`](Self::rewrite), reporting what was done.
    ///
    /// Blanking at the parenthesis can turn letters before the scan offset
    /// into filler and complete a match there, so a pass with any
    /// parenthetical rewrite is followed by another pass. Each such pass
    /// turns at least the canonical lead letter into filler, which bounds the
    /// number of passes.
    pub fn rewrite_counted(&self, buf: &mut [u8]) -> RewriteStats {
        let mut stats = RewriteStats::default();
        loop {
            let pass = self.rewrite_pass(buf);
            stats += pass;
            if pass.parenthetical == 0 {
                return stats;
            }
        }
    }

    /// One left-to-right pass. Every start offset is tried against the
    /// buffer as it stands at that point, so earlier rewrites are visible to
    /// later offsets.
    fn rewrite_pass(&self, buf: &mut [u8]) -> RewriteStats {
        let mut stats = RewriteStats::default();
        for start in 0..buf.len() {
            let Some(found) = self.pattern.match_at(buf, start) else {
                continue;
            };
            match self.apply(buf, found) {
                Some(Layout::Bare) => stats.bare += 1,
                Some(Layout::Parenthetical { .. }) => stats.parenthetical += 1,
                None => stats.skipped += 1,
            }
        }
        stats
    }

    /// Rewrite a single match. Returns the layout applied, or `None` if the
    /// match was skipped.
    pub(crate) fn apply(&self, buf: &mut [u8], found: Match) -> Option<Layout> {
        // The distinguishing word is the literal tail of every match.
        let anchor_byte = self.pattern.anchor_byte();
        let Some(anchor) = found
            .end()
            .checked_sub(self.replacement.width())
            .filter(|&at| at >= found.start && buf.get(at) == Some(&anchor_byte))
        else {
            warn!(
                "no {:?} where the match at offset {} should end; leaving it untouched",
                char::from(anchor_byte),
                found.start
            );
            return None;
        };

        let layout = self.detect_layout(buf);
        match layout {
            Layout::Parenthetical { open } => {
                // "(Gulf of" and "America)"
                let fill = self.replacement.fill();
                fill_clamped(buf, open, self.pattern.anchor_offset(), fill);
                fill_clamped(buf, anchor, self.replacement.width() + 1, fill);
            }
            Layout::Bare => {
                for (dst, src) in buf[anchor..].iter_mut().zip(self.replacement.bytes()) {
                    *dst = src;
                }
            }
        }
        debug!(
            "rewrote {layout:?} label matched at {}..{}: {:?}",
            found.start,
            found.end(),
            BStr::new(&*buf)
        );
        Some(layout)
    }
}

impl Default for BytePatternRewriter<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Overwrite up to `len` bytes from `start` with `byte`, stopping at the end
/// of `buf`.
fn fill_clamped(buf: &mut [u8], start: usize, len: usize, byte: u8) {
    let end = start.saturating_add(len).min(buf.len());
    if let Some(span) = buf.get_mut(start..end) {
        span.fill(byte);
    }
}

/// Rewrite `buf` in place with [`BytePatternRewriter::DEFAULT`].
pub fn rewrite_label_buffer(buf: &mut [u8]) {
    BytePatternRewriter::DEFAULT.rewrite(buf);
}
