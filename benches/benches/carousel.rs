// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use roundel_carousel::{Carousel, CarouselConfig};

fn looping_carousel(raw_len: usize) -> Carousel {
    Carousel::new(CarouselConfig {
        looping: true,
        auto_fill: true,
        window_radius: 2,
        ..CarouselConfig::new(raw_len, 100.0)
    })
}

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundel_carousel");

    for &raw_len in &[5_usize, 64] {
        // A gesture commits many small deltas; every commit is followed by
        // the queries a renderer makes per frame.
        group.bench_function(format!("drag_frame(n={raw_len})"), |b| {
            b.iter_batched(
                || looping_carousel(raw_len),
                |mut carousel| {
                    for step in 0..256_i32 {
                        carousel.set_offset(f64::from(step) * 17.0);
                        let window = carousel.visible_window();
                        let mut live = 0_usize;
                        for slot in window.iter() {
                            if carousel.real_index(slot).is_some() {
                                live += 1;
                            }
                            black_box(carousel.slot_progress(slot));
                        }
                        black_box((carousel.current_index(), live));
                    }
                    black_box(carousel);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("next_and_settle(n={raw_len})"), |b| {
            b.iter_batched(
                || looping_carousel(raw_len),
                |mut carousel| {
                    for _ in 0..256 {
                        if let Some(target) = carousel.next() {
                            carousel.set_offset(target.offset);
                        }
                    }
                    black_box(carousel.offset());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_carousel);
criterion_main!(benches);
