#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use labelpatch::{BytePatternRewriter, RewriteOptions, TextSubstitutor};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const HEADER: usize = 2; // fill byte + flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Filler runs seen between label words.
static FILLER_TABLE: &[&[u8]] = &[
    b" ",
    b"\n",
    b"\x01",
    b"\x01\n ",
    b"\r\n",
    b"\x00\x00",
    b"-",
    b"\xe2\x80\x8b", // U+200B
];

static WORDS: &[&[u8]] = &[b"Gulf", b"of", b"America", b"Mexico", b"gulf", b"AMERICA", b"Americ"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(4) {
        if max_size < HEADER {
            return fuzzer_mutate(data, size, max_size);
        }
        data[0] = with_rng(|rng| rng.random());
        data[1] = with_rng(|rng| rng.random());
        let mut written = HEADER;
        while written < max_size && with_rng(|rng| rng.random_bool(0.9)) {
            written += append_label(&mut data[written..], max_size - written);
        }
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append a near-miss or exact label: "Gulf of America", possibly preceded by
/// "Gulf of Mexico (" and with random filler runs between words.
fn append_label(buf: &mut [u8], limit: usize) -> usize {
    let mut out: Vec<u8> = Vec::new();
    with_rng(|rng| {
        if rng.random_bool(0.3) {
            out.extend_from_slice(b"Gulf of Mexico (");
        }
        for i in 0..3 {
            let word = if rng.random_bool(0.8) {
                [b"Gulf".as_slice(), b"of", b"America"][i]
            } else {
                WORDS[rng.random_range(0..WORDS.len())]
            };
            out.extend_from_slice(word);
            if i < 2 {
                for _ in 0..rng.random_range(1..=3) {
                    out.extend_from_slice(FILLER_TABLE[rng.random_range(0..FILLER_TABLE.len())]);
                }
            }
        }
        if rng.random_bool(0.5) {
            out.push(b')');
        }
    });
    let len = out.len().min(limit);
    buf[..len].copy_from_slice(&out[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn rewrite(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(fill) = u8::arbitrary(&mut u) else {
        return;
    };
    let Ok(flags) = u8::arbitrary(&mut u) else {
        return;
    };
    let body = u.take_rest();

    let rewriter = if flags & 1 == 0 {
        BytePatternRewriter::DEFAULT
    } else {
        match BytePatternRewriter::new(RewriteOptions {
            zero_width_fill: fill,
            ..RewriteOptions::DEFAULT
        }) {
            Ok(rewriter) => rewriter,
            Err(_) => return,
        }
    };

    let mut buf = body.to_vec();
    let stats = rewriter.rewrite_counted(&mut buf);
    assert_eq!(buf.len(), body.len(), "rewrite changed the buffer length");
    assert!(stats.rewritten() + stats.skipped <= body.len());
    if stats.rewritten() == 0 {
        assert_eq!(buf, body, "buffer changed without a rewrite");
    }

    let once = buf.clone();
    assert_eq!(rewriter.rewrite_counted(&mut buf).rewritten(), 0);
    assert_eq!(buf, once, "second call changed the buffer");

    let text = String::from_utf8_lossy(body);
    let substituted = TextSubstitutor::DEFAULT.substitute(&text);
    assert!(!substituted.contains(labelpatch::SOURCE_NAME));
    let _ = TextSubstitutor::DEFAULT.parse_and_wrap(&text, |items| items.len());
}

fuzz_target!(|data: &[u8]| rewrite(data));
