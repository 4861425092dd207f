// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: a deterministic, `no_std` session for floating content anchored to a node.
//!
//! ## Overview
//!
//! This crate keeps a popover placed while it is open.
//! It does not paint, measure, or listen for events itself.
//! Instead, your toolkit implements the [`Host`](crate::host::Host) traits — measuring nodes, walking
//! ancestry, registering listeners and timers — and forwards events to a
//! [`Popover`](crate::session::Popover), which answers with a [`Response`](crate::types::Response).
//! Geometry comes from [`understory_placement`].
//!
//! ## Lifecycle
//!
//! - Open: resize and capture-phase scroll listeners are registered, plus a key-down listener
//!   for Escape. Outside-press dismissal arms on the next turn of the event loop.
//! - Mount: once the anchor and content can be measured the popover is placed, then placed again
//!   after [`SETTLE_DELAY`](crate::types::SETTLE_DELAY) to absorb late layout shifts.
//! - Input changes (anchor, origins, margin, constraints) and every resize or scroll recompute
//!   synchronously. Only significant changes are published.
//! - Close: every listener and timer is handed back to the host before `close` returns.
//!
//! ## Dismissal
//!
//! Escape and presses outside both the anchor and the content yield
//! [`Response::CloseRequested`](crate::types::Response::CloseRequested) once per event.
//! The session never closes itself; the host owns that policy.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Rect, Size};
//! use understory_popover::host::{EventHub, Measure, ParentLookup};
//! use understory_popover::session::Popover;
//! use understory_popover::types::{HostEvent, Key, Listener, Response};
//!
//! #[derive(Default)]
//! struct Window {
//!     next: u32,
//!     listeners: Vec<(u32, Listener)>,
//! }
//!
//! impl Measure<u32> for Window {
//!     fn viewport(&self) -> Size { Size::new(1024.0, 768.0) }
//!     fn rect_of(&self, node: &u32) -> Option<Rect> {
//!         match node {
//!             1 => Some(Rect::new(100.0, 100.0, 120.0, 120.0)), // anchor
//!             2 => Some(Rect::new(0.0, 0.0, 80.0, 40.0)),       // content
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl ParentLookup<u32> for Window {
//!     fn parent_of(&self, _node: &u32) -> Option<u32> { None }
//! }
//!
//! impl EventHub for Window {
//!     type Subscription = u32;
//!     type Timer = u32;
//!     fn subscribe(&mut self, l: Listener) -> u32 {
//!         self.next += 1;
//!         self.listeners.push((self.next, l));
//!         self.next
//!     }
//!     fn unsubscribe(&mut self, s: u32) { self.listeners.retain(|(id, _)| *id != s); }
//!     fn set_timeout(&mut self, _delay: Duration) -> u32 { self.next += 1; self.next }
//!     fn clear_timeout(&mut self, _timer: u32) {}
//! }
//!
//! let mut window = Window::default();
//! let mut popover: Popover<u32, Window> = Popover::default();
//!
//! popover.open(&mut window, Some(1));
//! let Response::Reposition(p) = popover.mount(&mut window, 2) else { unreachable!() };
//! assert_eq!((p.top, p.left), (120.0, 100.0));
//! assert_eq!((p.max_width, p.max_height), (Some(888.0), Some(632.0)));
//!
//! assert_eq!(popover.handle(&mut window, HostEvent::KeyDown(Key::Escape)), Response::CloseRequested);
//! popover.close(&mut window);
//! assert!(window.listeners.is_empty());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod dismiss;
pub mod host;
pub mod options;
pub mod session;
pub mod types;
