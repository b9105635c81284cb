use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};
use quickcheck_macros::quickcheck;

use super::fixtures::{LabelFixture, NoisyLabel};
use crate::{BytePatternRewriter, rewrite_label_buffer};

fn rewritten(input: &[u8]) -> Vec<u8> {
    let mut buf = input.to_vec();
    rewrite_label_buffer(&mut buf);
    buf
}

#[quickcheck]
fn filler_runs_still_match(fixture: LabelFixture) -> bool {
    let bytes = fixture.bytes();
    let starts: Vec<_> = BytePatternRewriter::DEFAULT
        .pattern()
        .find_iter(&bytes)
        .map(|m| m.start)
        .collect();
    starts == [fixture.phrase_start()]
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn length_is_invariant(label: NoisyLabel) -> bool {
    rewritten(&label.0).len() == label.0.len()
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn unmatched_input_is_untouched(bytes: Vec<u8>) -> TestResult {
    if BytePatternRewriter::DEFAULT.pattern().find_iter(&bytes).next().is_some() {
        return TestResult::discard();
    }
    TestResult::from_bool(rewritten(&bytes) == bytes)
}

#[quickcheck]
fn wrong_case_is_untouched(fixture: LabelFixture) -> bool {
    let mut bytes = fixture.bytes();
    let start = fixture.phrase_start();
    bytes[start] = b'g';
    rewritten(&bytes) == bytes
}

#[quickcheck]
fn bare_form_gets_padded_canonical_word(fixture: LabelFixture) -> TestResult {
    if fixture.parenthetical {
        return TestResult::discard();
    }
    let bytes = fixture.bytes();
    let out = rewritten(&bytes);
    let anchor = fixture.anchor();
    TestResult::from_bool(
        out[..anchor] == bytes[..anchor]
            && out[anchor..anchor + 7] == *b"Mexico\0"
            && out[anchor + 7..] == bytes[anchor + 7..],
    )
}

#[quickcheck]
fn parenthetical_form_keeps_canonical_name(fixture: LabelFixture) -> TestResult {
    if !fixture.parenthetical {
        return TestResult::discard();
    }
    let bytes = fixture.bytes();
    let out = rewritten(&bytes);
    let open = fixture.phrase_start() - 1;
    let anchor = fixture.anchor();
    TestResult::from_bool(
        out[..open] == bytes[..open]
            && out[open..open + 8].iter().all(|&b| b == 0)
            && out[anchor..anchor + 8].iter().all(|&b| b == 0)
            && out[anchor + 8..] == bytes[anchor + 8..],
    )
}

fn settles_after_one_call(input: &[u8]) -> bool {
    let once = rewritten(input);
    let mut twice = once.clone();
    let stats = BytePatternRewriter::DEFAULT.rewrite_counted(&mut twice);
    stats.rewritten() == 0 && once == twice
}

/// Property: a second call over a rewritten buffer finds nothing left to do.
#[test]
fn rewrite_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn clean(fixture: LabelFixture) -> bool {
        settles_after_one_call(&fixture.bytes())
    }

    #[allow(clippy::needless_pass_by_value)]
    fn noisy(label: NoisyLabel) -> bool {
        settles_after_one_call(&label.0)
    }

    QuickCheck::new()
        .tests(1000)
        .quickcheck(clean as fn(LabelFixture) -> bool);
    QuickCheck::new()
        .tests(2000)
        .quickcheck(noisy as fn(NoisyLabel) -> bool);
}

#[test]
fn stray_marker_before_the_phrase_settles_in_one_call() {
    assert!(settles_after_one_call(b"Gulf (Gabcdefof America Gulf of America"));
    assert!(settles_after_one_call(b"Gulf (G\x01\x02\x03\x04\x05\x06of America Gulf of America"));
}
