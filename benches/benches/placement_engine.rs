// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_placement::{Origin, PlacementOptions, compute_placement};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over (and slightly past) the viewport so every clamp branch is taken.
fn gen_anchors(count: usize, viewport: Size) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.next_f64() * (viewport.width + 200.0) - 100.0;
        let y0 = rng.next_f64() * (viewport.height + 200.0) - 100.0;
        let w = 8.0 + rng.next_f64() * 120.0;
        let h = 8.0 + rng.next_f64() * 40.0;
        out.push(Rect::new(x0, y0, x0 + w, y0 + h));
    }
    out
}

fn bench_origin_pairs(c: &mut Criterion) {
    let viewport = Size::new(1280.0, 800.0);
    let content = Size::new(240.0, 160.0);
    let anchors = gen_anchors(256, viewport);

    let mut group = c.benchmark_group("compute_placement");
    for (label, constrained) in [("constrained", true), ("unconstrained", false)] {
        group.throughput(Throughput::Elements((anchors.len() * 81) as u64));
        group.bench_function(format!("all_origin_pairs_{label}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for a in Origin::ALL {
                    for t in Origin::ALL {
                        let options = PlacementOptions::default()
                            .with_anchor_origin(a)
                            .with_transform_origin(t)
                            .with_viewport_constraints_disabled(!constrained);
                        for &anchor in &anchors {
                            let p = compute_placement(
                                Some(black_box(anchor)),
                                Some(content),
                                viewport,
                                &options,
                            );
                            acc += p.top + p.left;
                        }
                    }
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_origin_pairs);
criterion_main!(benches);
