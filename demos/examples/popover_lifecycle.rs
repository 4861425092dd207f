// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover lifecycle against an in-memory host.
//!
//! Opens a popover under a button, mounts its content, scrolls the page in small and large
//! steps, and dismisses with an outside press. Set `RUST_LOG=debug` to see the session's
//! `tracing` output.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example popover_lifecycle`

use std::collections::BTreeMap;
use std::time::Duration;

use kurbo::{Rect, Size};
use understory_popover::host::{EventHub, Measure, ParentLookup};
use understory_popover::session::Popover;
use understory_popover::types::{HostEvent, Listener, Response};

const BODY: u32 = 0;
const BUTTON: u32 = 1;
const MENU: u32 = 2;
const SIDEBAR: u32 = 3;

#[derive(Default)]
struct Page {
    scroll_y: f64,
    next: u32,
    listeners: BTreeMap<u32, Listener>,
    timers: BTreeMap<u32, Duration>,
}

impl Page {
    fn due_timers(&mut self) -> Vec<u32> {
        let due: Vec<u32> = self.timers.keys().copied().collect();
        self.timers.clear();
        due
    }
}

impl Measure<u32> for Page {
    fn viewport(&self) -> Size {
        Size::new(1024.0, 768.0)
    }
    fn rect_of(&self, node: &u32) -> Option<Rect> {
        let y = 400.0 - self.scroll_y;
        match *node {
            BUTTON => Some(Rect::new(700.0, y, 760.0, y + 32.0)),
            MENU => Some(Rect::new(0.0, 0.0, 320.0, 200.0)),
            _ => None,
        }
    }
}

impl ParentLookup<u32> for Page {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        (*node != BODY).then_some(BODY)
    }
}

impl EventHub for Page {
    type Subscription = u32;
    type Timer = u32;
    fn subscribe(&mut self, listener: Listener) -> u32 {
        self.next += 1;
        self.listeners.insert(self.next, listener);
        self.next
    }
    fn unsubscribe(&mut self, subscription: u32) {
        self.listeners.remove(&subscription);
    }
    fn set_timeout(&mut self, delay: Duration) -> u32 {
        self.next += 1;
        self.timers.insert(self.next, delay);
        self.next
    }
    fn clear_timeout(&mut self, timer: u32) {
        self.timers.remove(&timer);
    }
}

fn report(step: &str, response: Response) {
    match response {
        Response::Idle => println!("  {step:<24} idle"),
        Response::Reposition(p) => println!(
            "  {step:<24} top {} left {} max {:?} x {:?}",
            p.top, p.left, p.max_width, p.max_height
        ),
        Response::CloseRequested => println!("  {step:<24} close requested"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut page = Page::default();
    let mut popover: Popover<u32, Page> = Popover::default();

    println!("== Open ==");
    report("open", popover.open(&mut page, Some(BUTTON)));
    report("mount", popover.mount(&mut page, MENU));
    for t in page.due_timers() {
        report("timer", popover.handle(&mut page, HostEvent::Timeout(t)));
    }
    println!("  listeners: {:?}", popover.listeners());

    println!("== Scroll ==");
    let steps = [
        ("scroll 0.5px", 0.5),
        ("scroll 0.4px", 0.4),
        ("scroll 40px", 40.0),
    ];
    for (label, dy) in steps {
        page.scroll_y += dy;
        report(label, popover.handle(&mut page, HostEvent::Scroll));
    }

    println!("== Dismiss ==");
    let press = HostEvent::PointerDown { target: SIDEBAR };
    let response = popover.handle(&mut page, press);
    report("press on sidebar", response);
    if response == Response::CloseRequested {
        popover.close(&mut page);
    }
    assert!(page.listeners.is_empty());
    assert!(page.timers.is_empty());
    println!("  closed; {} listeners remain", page.listeners.len());
}
