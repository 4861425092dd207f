// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: everything impure a session needs from the surrounding UI.
//!
//! A session never reads geometry or registers callbacks itself. It asks its host to
//! measure nodes ([`Measure`]), to walk ancestry ([`ParentLookup`]), and to manage listener
//! subscriptions and timers ([`EventHub`]). Implement all three and the blanket [`Host`]
//! impl applies.

use core::fmt::Debug;
use core::time::Duration;

use kurbo::{Rect, Size};

use crate::types::Listener;

/// Sample geometry from the host, in viewport coordinates.
///
/// Values are read fresh on every recompute and never cached by the session.
pub trait Measure<K> {
    /// Current viewport size.
    fn viewport(&self) -> Size;
    /// Bounding rectangle of `node`, or `None` if it is not laid out.
    fn rect_of(&self, node: &K) -> Option<Rect>;
}

/// Look up the parent of a node, to decide whether one node contains another.
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// Listener and timer registration.
///
/// Each session owns the handles it receives and returns every one of them
/// (via [`unsubscribe`](Self::unsubscribe) and [`clear_timeout`](Self::clear_timeout)) when it
/// closes. Timer handles that fire are delivered back as
/// [`HostEvent::Timeout`](crate::types::HostEvent::Timeout) and are then considered spent.
pub trait EventHub {
    /// Handle to a registered listener.
    type Subscription: Copy + Eq + Debug;
    /// Handle to a scheduled timer.
    type Timer: Copy + Eq + Debug;

    /// Register a listener.
    fn subscribe(&mut self, listener: Listener) -> Self::Subscription;
    /// Remove a listener registered with [`subscribe`](Self::subscribe).
    fn unsubscribe(&mut self, subscription: Self::Subscription);
    /// Schedule a one-shot timer.
    fn set_timeout(&mut self, delay: Duration) -> Self::Timer;
    /// Cancel a timer that has not fired yet.
    fn clear_timeout(&mut self, timer: Self::Timer);
}

/// Everything a [`Popover`](crate::session::Popover) needs from its host.
pub trait Host<K>: Measure<K> + ParentLookup<K> + EventHub {}

impl<K, H> Host<K> for H where H: Measure<K> + ParentLookup<K> + EventHub {}
