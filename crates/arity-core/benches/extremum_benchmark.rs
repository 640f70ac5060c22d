// Copyright (c) 2025 Felix Kahle.
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

use arity_core::num::{Number, index_of_max, index_of_max_numeric, index_of_min};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_floats(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len)
        .map(|_| {
            // Roughly one in sixteen entries is NaN.
            if rng.random_range(0..16) == 0 {
                f64::NAN
            } else {
                rng.random_range(-1e6..1e6)
            }
        })
        .collect()
}

fn random_numbers(rng: &mut StdRng, len: usize) -> Vec<Option<Number>> {
    (0..len)
        .map(|i| match i % 4 {
            0 => Some(Number::from(rng.random::<i64>())),
            1 => Some(Number::from(rng.random_range(-1e12..1e12f64))),
            2 => Some(Number::from(rng.random::<f32>())),
            _ => None,
        })
        .collect()
}

fn bench_primitive_slices(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("extremum_primitive");

    for len in SIZES {
        let ints: Vec<i32> = (0..len).map(|_| rng.random()).collect();
        let floats = random_floats(&mut rng, len);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("i32_max", len), &ints, |b, xs| {
            b.iter(|| index_of_max(black_box(xs.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("f64_min_with_nan", len), &floats, |b, xs| {
            b.iter(|| index_of_min(black_box(xs.as_slice())))
        });
    }
    group.finish();
}

fn bench_heterogeneous(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xdec1);
    let mut group = c.benchmark_group("extremum_numeric");

    // Exact decimal conversion dominates, so stay on the smaller sizes.
    for len in &SIZES[..2] {
        let numbers = random_numbers(&mut rng, *len);

        group.throughput(Throughput::Elements(*len as u64));
        group.bench_with_input(BenchmarkId::new("mixed_max", len), &numbers, |b, xs| {
            b.iter(|| index_of_max_numeric(black_box(xs).iter().map(Option::as_ref)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_primitive_slices, bench_heterogeneous);
criterion_main!(benches);
