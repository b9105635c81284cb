use thiserror::Error;

/// Rejected search or replacement pattern.
///
/// Patterns are validated once, at construction, so the rewrite pass itself
/// never has a failure mode.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// The search pattern has no bytes.
    #[error("search pattern is empty")]
    Empty,
    /// The search pattern has no space, so there is no distinguishing word.
    #[error("search pattern has no space-delimited distinguishing word")]
    SingleWord,
    /// A wildcard sits at the very start or end of the search pattern.
    #[error("wildcard at index {index} cannot start or end the pattern")]
    EdgeWildcard {
        /// Pattern index of the wildcard.
        index: usize,
    },
    /// A wildcard is followed by something other than an ASCII letter, which
    /// the greedy filler run would swallow.
    #[error("wildcard at index {index} must be followed by an alphabetic byte")]
    AmbiguousWildcard {
        /// Pattern index of the wildcard.
        index: usize,
    },
    /// The canonical word does not fit over the distinguishing word.
    #[error("replacement word is {replacement} bytes but only {available} bytes are available")]
    ReplacementTooLong {
        /// Length of the canonical word.
        replacement: usize,
        /// Length of the distinguishing word it overwrites.
        available: usize,
    },
    /// The canonical lead is not an ASCII letter, so the parenthetical
    /// marker `(` + lead could never be blanked into filler.
    #[error("canonical lead 0x{lead:02x} is not alphabetic")]
    LeadNotAlphabetic {
        /// The rejected lead byte.
        lead: u8,
    },
    /// The zero-width fill byte is an ASCII letter and would read as text.
    #[error("fill byte 0x{fill:02x} is alphabetic")]
    FillIsAlphabetic {
        /// The rejected fill byte.
        fill: u8,
    },
}

/// Failure on the JSON text path.
#[cfg(feature = "json")]
#[derive(Debug, Error)]
pub enum TextError {
    /// The payload is not a JSON array; the parser's error is passed through
    /// as is.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
