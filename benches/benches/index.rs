// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use roundel_index::{compute_visible_window, resolve_real_index, slot_offset, wrap_offset};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_offset(&mut self) -> f64 {
        // Offsets in roughly [-20_000, 20_000), covering many loop periods.
        f64::from(self.next_u32() % 40_000) - 20_000.0
    }
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundel_index");

    for &slot_count in &[5_usize, 64, 1_024] {
        let offsets: Vec<f64> = {
            let mut rng = Lcg::new(0xCA80_0000_0000_0001);
            (0..1_024).map(|_| rng.next_offset()).collect()
        };

        group.bench_function(format!("wrap_offset(n={slot_count})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &offset in &offsets {
                    acc += wrap_offset(black_box(offset), 100.0, slot_count, true);
                }
                black_box(acc);
            });
        });

        group.bench_function(format!("visible_window(n={slot_count})"), |b| {
            b.iter(|| {
                let mut live = 0_usize;
                for &offset in &offsets {
                    let window =
                        compute_visible_window(black_box(offset), 100.0, slot_count, 2, true);
                    live += window.len();
                }
                black_box(live);
            });
        });

        group.bench_function(format!("slot_offset(n={slot_count})"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &offset in &offsets {
                    acc += slot_offset(black_box(3), offset, 100.0, slot_count, true);
                }
                black_box(acc);
            });
        });
    }

    group.bench_function("resolve_real_index_sweep", |b| {
        b.iter(|| {
            let mut acc = 0_isize;
            for slot in -512_isize..512 {
                acc += resolve_real_index(black_box(slot), 5, true);
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
