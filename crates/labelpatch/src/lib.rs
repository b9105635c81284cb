//! In-place rewriting of the name "Gulf of America" back to "Gulf of Mexico"
//! in the two channels a host application pushes map labels through:
//!
//! - JSON text payloads, handled by a plain substring substitution
//!   ([`TextSubstitutor`]).
//! - Binary label buffers, where the label text may be split by arbitrary
//!   non-alphabetic filler bytes and the buffer must keep its exact length
//!   ([`BytePatternRewriter`]).
//!
//! ```rust
//! let mut label = *b"Gulf of\x01\n America";
//! labelpatch::rewrite_label_buffer(&mut label);
//! assert_eq!(&label, b"Gulf of\x01\n Mexico\0");
//! ```
//!
//! Hooking the host's functions is left to the embedder; [`intercept`]
//! exposes the typed entry points the hooks forward to.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
pub mod intercept;
mod options;
mod pattern;
mod rewriter;
mod text;

#[cfg(test)]
mod tests;

#[cfg(feature = "json")]
pub use error::TextError;
pub use error::PatternError;
pub use intercept::{
    LabelBufferSource, LabelResult, invoke_first_with_callback, rewrite_result, rewriting_callback,
};
pub use options::{CANONICAL_NAME, RewriteOptions, SOURCE_NAME};
pub use pattern::{Match, Matches, ReplacementPattern, SearchPattern, WILDCARD, is_filler};
pub use rewriter::{BytePatternRewriter, Layout, RewriteStats, rewrite_label_buffer};
pub use text::TextSubstitutor;
