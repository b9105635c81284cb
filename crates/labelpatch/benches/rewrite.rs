//! Benchmark – `labelpatch::BytePatternRewriter`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use labelpatch::BytePatternRewriter;

/// A buffer of `target_len` bytes made of framed labels, one in every
/// `every` carrying the phrase split by filler bytes.
fn make_label_buffer(target_len: usize, every: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(target_len);
    let mut i = 0usize;
    while out.len() < target_len {
        out.extend_from_slice(b"\x12\x18");
        if i % every == 0 {
            out.extend_from_slice(b"Gulf of\x01\n America");
        } else {
            out.extend_from_slice(b"Gulf of Guinea\x01\x02\x03");
        }
        out.push(0x1a);
        i += 1;
    }
    out.truncate(target_len);
    out
}

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");
    let rewriter = BytePatternRewriter::DEFAULT;

    for &size in &[256usize, 4 * 1024, 64 * 1024] {
        let template = make_label_buffer(size, 8);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bare", size), &template, |b, template| {
            b.iter_batched_ref(
                || template.clone(),
                |buf| rewriter.rewrite(black_box(buf)),
                criterion::BatchSize::SmallInput,
            );
        });
        // Steady state: every label already rewritten.
        let mut settled = template.clone();
        rewriter.rewrite(&mut settled);
        group.bench_with_input(BenchmarkId::new("settled", size), &settled, |b, settled| {
            let mut buf = settled.clone();
            b.iter(|| rewriter.rewrite(black_box(&mut buf)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rewrite);
criterion_main!(benches);
