/// The name as the host renders it before rewriting.
pub const SOURCE_NAME: &str = "Gulf of America";

/// The name the rewrite restores.
pub const CANONICAL_NAME: &str = "Gulf of Mexico";

/// Configuration for a [`BytePatternRewriter`](crate::BytePatternRewriter).
///
/// The defaults describe the one source/target pair this crate exists for;
/// other pairs are accepted as long as they pass the checks in
/// [`BytePatternRewriter::new`](crate::BytePatternRewriter::new).
///
/// # Examples
///
/// ```rust
/// use labelpatch::{BytePatternRewriter, RewriteOptions};
///
/// let rewriter = BytePatternRewriter::new(RewriteOptions {
///     zero_width_fill: 0x7f,
///     ..Default::default()
/// })
/// .unwrap();
/// let mut label = *b"Gulf of America";
/// rewriter.rewrite(&mut label);
/// assert_eq!(&label, b"Gulf of Mexico\x7f");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions<'a> {
    /// The phrase to find, in its canonical ASCII spelling.
    ///
    /// Each space is a wildcard matching one or more non-alphabetic bytes.
    /// The last space-delimited word is the distinguishing word, the part
    /// that gets rewritten in the bare layout.
    ///
    /// # Default
    ///
    /// `b"Gulf of America"`
    pub phrase: &'a [u8],

    /// The word written over the distinguishing word in the bare layout.
    ///
    /// Must not be longer than the distinguishing word; shorter words are
    /// padded with [`zero_width_fill`](Self::zero_width_fill).
    ///
    /// # Default
    ///
    /// `b"Mexico"`
    pub canonical_word: &'a [u8],

    /// Leading letter of the canonical name. A `(` directly followed by this
    /// byte anywhere in a buffer marks the parenthetical layout,
    /// `"Gulf of Mexico (Gulf of America)"`.
    ///
    /// # Default
    ///
    /// `b'G'`
    pub canonical_lead: u8,

    /// Invisible placeholder used to blank text and pad short replacements.
    ///
    /// # Default
    ///
    /// `0x00`
    pub zero_width_fill: u8,
}

impl RewriteOptions<'static> {
    /// Options for rewriting [`SOURCE_NAME`] to [`CANONICAL_NAME`].
    pub const DEFAULT: Self = Self {
        phrase: SOURCE_NAME.as_bytes(),
        canonical_word: b"Mexico",
        canonical_lead: b'G',
        zero_width_fill: 0x00,
    };
}

impl Default for RewriteOptions<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
