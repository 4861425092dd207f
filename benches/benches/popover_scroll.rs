// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scroll storm: many small anchor moves, most of them below the significance threshold.

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_popover::host::{EventHub, Measure, ParentLookup};
use understory_popover::session::Popover;
use understory_popover::types::{HostEvent, Listener, Response};

const ANCHOR: u32 = 1;
const CONTENT: u32 = 2;

struct ScrollingHost {
    scroll_y: f64,
    next: u32,
}

impl Measure<u32> for ScrollingHost {
    fn viewport(&self) -> Size {
        Size::new(1280.0, 800.0)
    }
    fn rect_of(&self, node: &u32) -> Option<Rect> {
        let y = 500.0 - self.scroll_y;
        match *node {
            ANCHOR => Some(Rect::new(400.0, y, 480.0, y + 30.0)),
            CONTENT => Some(Rect::new(0.0, 0.0, 240.0, 160.0)),
            _ => None,
        }
    }
}

impl ParentLookup<u32> for ScrollingHost {
    fn parent_of(&self, _node: &u32) -> Option<u32> {
        None
    }
}

impl EventHub for ScrollingHost {
    type Subscription = u32;
    type Timer = u32;
    fn subscribe(&mut self, _listener: Listener) -> u32 {
        self.next += 1;
        self.next
    }
    fn unsubscribe(&mut self, _subscription: u32) {}
    fn set_timeout(&mut self, _delay: Duration) -> u32 {
        self.next += 1;
        self.next
    }
    fn clear_timeout(&mut self, _timer: u32) {}
}

fn bench_scroll_storm(c: &mut Criterion) {
    let mut group = c.benchmark_group("popover");
    for &step in &[0.25_f64, 4.0] {
        let events = 1_000_u64;
        group.throughput(Throughput::Elements(events));
        group.bench_function(format!("scroll_storm_step_{step}"), |b| {
            b.iter_batched(
                || {
                    let mut host = ScrollingHost {
                        scroll_y: 0.0,
                        next: 0,
                    };
                    let mut popover: Popover<u32, ScrollingHost> = Popover::default();
                    popover.open(&mut host, Some(ANCHOR));
                    popover.mount(&mut host, CONTENT);
                    (host, popover)
                },
                |(mut host, mut popover)| {
                    let mut published = 0_u32;
                    for _ in 0..events {
                        host.scroll_y += step;
                        if let Response::Reposition(_) =
                            popover.handle(&mut host, HostEvent::Scroll)
                        {
                            published += 1;
                        }
                    }
                    popover.close(&mut host);
                    black_box(published)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scroll_storm);
criterion_main!(benches);
