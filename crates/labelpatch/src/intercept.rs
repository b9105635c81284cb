//! Typed entry points for host hooks.
//!
//! Locating and patching the host's functions is the embedder's job. What
//! the hooks forward to lives here: the host calls
//! `invokeFirstWithCallback(fns, callback)` and the callback receives a result
//! object that may carry a `labelGroupBytes` buffer. Wrapping the callback
//! with [`rewriting_callback`] rewrites that buffer in place before the host
//! sees it.

use alloc::vec::Vec;

use crate::rewriter::BytePatternRewriter;

/// A host result that may carry a label buffer.
pub trait LabelBufferSource {
    /// The `labelGroupBytes` buffer, if this result has one.
    fn label_group_bytes(&mut self) -> Option<&mut [u8]>;
}

impl<T: LabelBufferSource + ?Sized> LabelBufferSource for &mut T {
    fn label_group_bytes(&mut self) -> Option<&mut [u8]> {
        (**self).label_group_bytes()
    }
}

impl LabelBufferSource for Option<Vec<u8>> {
    fn label_group_bytes(&mut self) -> Option<&mut [u8]> {
        self.as_deref_mut()
    }
}

/// Minimal owned result object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelResult {
    /// Fixed-length label buffer, when the result carries one.
    pub label_group_bytes: Option<Vec<u8>>,
}

impl LabelBufferSource for LabelResult {
    fn label_group_bytes(&mut self) -> Option<&mut [u8]> {
        self.label_group_bytes.as_deref_mut()
    }
}

/// Call `callback` with the first element of `fns`, if there is one.
///
/// ```rust
/// use labelpatch::invoke_first_with_callback;
///
/// assert_eq!(invoke_first_with_callback(&[2, 3], |n| n * 10), Some(20));
/// assert_eq!(invoke_first_with_callback(&[] as &[i32], |n| n * 10), None);
/// ```
pub fn invoke_first_with_callback<T, R>(fns: &[T], callback: impl FnOnce(&T) -> R) -> Option<R> {
    fns.first().map(callback)
}

/// Rewrite the label buffer of `result`, if it has one.
///
/// Returns whether a buffer was present.
pub fn rewrite_result<S>(rewriter: &BytePatternRewriter<'_>, result: &mut S) -> bool
where
    S: LabelBufferSource + ?Sized,
{
    match result.label_group_bytes() {
        Some(buf) => {
            rewriter.rewrite(buf);
            true
        }
        None => false,
    }
}

/// Wrap a host callback so every result it receives has its label buffer
/// rewritten first. Results without a buffer pass through unchanged.
pub fn rewriting_callback<'r, S, R, F>(
    rewriter: &'r BytePatternRewriter<'r>,
    inner: F,
) -> impl FnOnce(S) -> R
where
    S: LabelBufferSource,
    F: FnOnce(S) -> R,
{
    move |mut result| {
        rewrite_result(rewriter, &mut result);
        inner(result)
    }
}
