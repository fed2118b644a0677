// Copyright (c) 2026 the stepline developers.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use stepline_core::step::{StepRange, countdown, range_step};

#[derive(Clone, Copy)]
struct Params {
    start: i64,
    end: i64,
    step: i64,
    include_end: bool,
}

fn gen_params(n: usize, rng: &mut impl Rng) -> Vec<Params> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(Params {
            start: rng.random_range(-1_000_000..=1_000_000),
            end: rng.random_range(-1_000_000..=1_000_000),
            // Includes zero and wrong-direction steps so the degenerate
            // normalization paths are part of the measurement.
            step: rng.random_range(-9..=9),
            include_end: rng.random_bool(0.5),
        });
    }
    out
}

fn register_count(c: &mut Criterion, params_n: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let params = gen_params(params_n, &mut rng);

    let mut group = c.benchmark_group("step_range");
    group.throughput(Throughput::Elements(params_n as u64));
    group.bench_function(BenchmarkId::new("count_precompute", params_n), |b| {
        b.iter(|| {
            let mut acc = 0u128;
            for &Params {
                start,
                end,
                step,
                include_end,
            } in &params
            {
                acc = acc.wrapping_add(StepRange::new(start, end, step, include_end).len());
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn register_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_range_iterate");
    for &n in &[1_000i64, 100_000] {
        group.throughput(Throughput::Elements(n as u64 / 3));
        group.bench_with_input(BenchmarkId::new("ascending_by_3", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0i64;
                for i in range_step(0, n, 3) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("countdown", n), &n, |b, &n| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in countdown(n as u64) {
                    acc = acc.wrapping_add(i);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn range_benches(c: &mut Criterion) {
    register_count(c, 4_096);
    register_iterate(c);
}

criterion_group!(benches, range_benches);
criterion_main!(benches);
