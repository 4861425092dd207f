// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover session.
//!
//! ## Overview
//!
//! A [`Popover`] owns one open/close cycle at a time: the listeners and timers it registered,
//! the last placement it published, and the reasons its placement may be out of date.
//!
//! ## States
//!
//! - [`Closed`](PopoverState::Closed) → [`Opening`](PopoverState::Opening) on [`Popover::open`].
//! - [`Opening`](PopoverState::Opening) → [`Positioned`](PopoverState::Positioned) once the anchor
//!   and the mounted content can both be measured. A settle pass follows after [`SETTLE_DELAY`].
//! - [`Positioned`](PopoverState::Positioned) → [`Stale`](PopoverState::Stale) when a recompute
//!   cannot re-measure; the last placement is retained. Back to `Positioned` on the next
//!   recompute that can.
//! - Any open state → [`Closed`](PopoverState::Closed) on [`Popover::close`], which returns every
//!   listener and timer to the host before it returns.
//!
//! ## Updates
//!
//! A recompute publishes [`Response::Reposition`] only when the new placement
//! [differs significantly](Placement::differs_significantly) from the last published one.
//! Sub-pixel jitter from scroll storms therefore never reaches the host's layout.

use understory_placement::{InvalidMarginThreshold, Origin, Placement, compute_placement};

use crate::dismiss::{is_dismiss_key, is_outside_press};
use crate::host::{EventHub, Host};
use crate::options::PopoverOptions;
use crate::types::{
    DISMISS_ARM_DELAY, HostEvent, Invalidation, Listener, Listeners, PopoverState, Response, Role,
    SETTLE_DELAY,
};

/// Listener handles held while open, one slot per kind.
#[derive(Clone, Debug)]
struct Subscriptions<S> {
    resize: Option<S>,
    scroll: Option<S>,
    key_down: Option<S>,
    pointer_down: Option<S>,
}

impl<S> Default for Subscriptions<S> {
    fn default() -> Self {
        Self {
            resize: None,
            scroll: None,
            key_down: None,
            pointer_down: None,
        }
    }
}

impl<S: Copy> Subscriptions<S> {
    fn slot(&mut self, listener: Listener) -> &mut Option<S> {
        use crate::types::ListenerKind::*;
        match listener.kind {
            Resize => &mut self.resize,
            Scroll => &mut self.scroll,
            KeyDown => &mut self.key_down,
            PointerDown => &mut self.pointer_down,
        }
    }

    fn held(&self) -> Listeners {
        let mut out = Listeners::empty();
        out.set(Listeners::RESIZE, self.resize.is_some());
        out.set(Listeners::SCROLL, self.scroll.is_some());
        out.set(Listeners::KEY_DOWN, self.key_down.is_some());
        out.set(Listeners::POINTER_DOWN, self.pointer_down.is_some());
        out
    }
}

/// A popover positioned against an anchor node.
///
/// `K` is the host's node key; `H` the host type whose listener and timer handles the
/// session keeps. Several sessions may share one host; each holds only its own handles.
///
/// ## Usage
///
/// 1) [`Popover::open`] with the anchor node, then [`Popover::mount`] once the content node
///    exists and can be measured.
/// 2) Forward every [`HostEvent`] to [`Popover::handle`].
/// 3) Apply [`Response::Reposition`] to the content; on [`Response::CloseRequested`] call
///    [`Popover::close`] if the application agrees.
pub struct Popover<K, H: EventHub> {
    options: PopoverOptions,
    state: PopoverState,
    anchor: Option<K>,
    content: Option<K>,
    placement: Placement,
    pending: Invalidation,
    subscriptions: Subscriptions<H::Subscription>,
    settle_timer: Option<H::Timer>,
    arm_timer: Option<H::Timer>,
}

impl<K: core::fmt::Debug, H: EventHub> core::fmt::Debug for Popover<K, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Popover")
            .field("state", &self.state)
            .field("anchor", &self.anchor)
            .field("content", &self.content)
            .field("placement", &self.placement)
            .field("pending", &self.pending)
            .field("listeners", &self.subscriptions.held())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, H: Host<K>> Default for Popover<K, H> {
    fn default() -> Self {
        Self::new(PopoverOptions::default())
    }
}

impl<K: Copy + Eq, H: Host<K>> Popover<K, H> {
    /// Create a closed popover.
    pub fn new(options: PopoverOptions) -> Self {
        Self {
            options,
            state: PopoverState::Closed,
            anchor: None,
            content: None,
            placement: Placement::UNPOSITIONED,
            pending: Invalidation::empty(),
            subscriptions: Subscriptions::default(),
            settle_timer: None,
            arm_timer: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PopoverState {
        self.state
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The last published placement, or [`Placement::UNPOSITIONED`] before the first one.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Current configuration.
    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// Anchor node, if any.
    pub fn anchor(&self) -> Option<K> {
        self.anchor
    }

    /// Mounted content node, if any.
    pub fn content(&self) -> Option<K> {
        self.content
    }

    /// Reasons the placement is out of date; empty when positioned.
    pub fn pending(&self) -> Invalidation {
        self.pending
    }

    /// Listener kinds currently registered with the host.
    pub fn listeners(&self) -> Listeners {
        self.subscriptions.held()
    }

    /// Whether a settle or dismiss-arm timer is outstanding.
    pub fn has_pending_timers(&self) -> bool {
        self.settle_timer.is_some() || self.arm_timer.is_some()
    }

    /// Accessible role of the content container.
    pub fn role(&self) -> Role {
        Role::Dialog
    }

    /// Whether the content is exposed as modal.
    pub fn is_modal(&self) -> bool {
        true
    }

    /// Open against `anchor` and register listeners.
    ///
    /// Registers resize and capture-phase scroll listeners, a key-down listener unless Escape
    /// is disabled, and arms outside-press dismissal after [`DISMISS_ARM_DELAY`] unless that is
    /// disabled. Nothing is placed until the content is [mounted](Self::mount).
    ///
    /// Opening an open popover only retargets it, as [`set_anchor`](Self::set_anchor) does.
    pub fn open(&mut self, host: &mut H, anchor: Option<K>) -> Response {
        if self.is_open() {
            return self.set_anchor(host, anchor);
        }
        self.anchor = anchor;
        self.transition(PopoverState::Opening);

        self.listen(host, Listener::RESIZE);
        self.listen(host, Listener::SCROLL);
        if !self.options.disable_escape_key {
            self.listen(host, Listener::KEY_DOWN);
        }
        if !self.options.disable_backdrop_click {
            self.arm_timer = Some(host.set_timeout(DISMISS_ARM_DELAY));
        }
        self.invalidate(host, Invalidation::OPEN)
    }

    /// Record the content node and try to place it.
    ///
    /// Call again with the same node to retry when its size was not yet measurable.
    pub fn mount(&mut self, host: &mut H, content: K) -> Response {
        if !self.is_open() {
            return Response::Idle;
        }
        self.content = Some(content);
        self.invalidate(host, Invalidation::MOUNT)
    }

    /// Close: remove every listener, cancel every timer, and forget the last placement.
    pub fn close(&mut self, host: &mut H) {
        if !self.is_open() {
            return;
        }
        for listener in [
            Listener::RESIZE,
            Listener::SCROLL,
            Listener::KEY_DOWN,
            Listener::POINTER_DOWN,
        ] {
            self.unlisten(host, listener);
        }
        if let Some(t) = self.settle_timer.take() {
            host.clear_timeout(t);
        }
        if let Some(t) = self.arm_timer.take() {
            host.clear_timeout(t);
        }
        self.anchor = None;
        self.content = None;
        self.placement = Placement::UNPOSITIONED;
        self.pending = Invalidation::empty();
        self.transition(PopoverState::Closed);
    }

    /// React to an event from the host.
    ///
    /// Events the session holds no listener or timer for are ignored, as is everything
    /// while closed.
    pub fn handle(&mut self, host: &mut H, event: HostEvent<K, H::Timer>) -> Response {
        if !self.is_open() {
            return Response::Idle;
        }
        match event {
            HostEvent::Resize if self.subscriptions.resize.is_some() => {
                self.invalidate(host, Invalidation::RESIZE)
            }
            HostEvent::Scroll if self.subscriptions.scroll.is_some() => {
                self.invalidate(host, Invalidation::SCROLL)
            }
            HostEvent::KeyDown(key)
                if self.subscriptions.key_down.is_some() && is_dismiss_key(key) =>
            {
                #[cfg(feature = "tracing")]
                tracing::debug!("escape pressed; requesting close");
                Response::CloseRequested
            }
            HostEvent::PointerDown { target }
                if self.subscriptions.pointer_down.is_some()
                    && is_outside_press(&*host, self.anchor, self.content, target) =>
            {
                #[cfg(feature = "tracing")]
                tracing::debug!("outside press; requesting close");
                Response::CloseRequested
            }
            HostEvent::Timeout(t) if self.settle_timer == Some(t) => {
                self.settle_timer = None;
                self.invalidate(host, Invalidation::SETTLE)
            }
            HostEvent::Timeout(t) if self.arm_timer == Some(t) => {
                self.arm_timer = None;
                self.listen(host, Listener::POINTER_DOWN);
                Response::Idle
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!("event not for this popover; ignored");
                Response::Idle
            }
        }
    }

    /// Retarget to a different anchor node.
    pub fn set_anchor(&mut self, host: &mut H, anchor: Option<K>) -> Response {
        if self.anchor == anchor {
            return Response::Idle;
        }
        self.anchor = anchor;
        self.invalidate(host, Invalidation::ANCHOR)
    }

    /// Change the anchor origin.
    pub fn set_anchor_origin(&mut self, host: &mut H, origin: Origin) -> Response {
        if self.options.placement.anchor_origin == origin {
            return Response::Idle;
        }
        self.options.placement.anchor_origin = origin;
        self.invalidate(host, Invalidation::ORIGIN)
    }

    /// Change the transform origin.
    pub fn set_transform_origin(&mut self, host: &mut H, origin: Origin) -> Response {
        if self.options.placement.transform_origin == origin {
            return Response::Idle;
        }
        self.options.placement.transform_origin = origin;
        self.invalidate(host, Invalidation::ORIGIN)
    }

    /// Change the margin threshold.
    ///
    /// Rejects a negative or non-finite `margin` and keeps the current one, as
    /// [`PlacementOptions::with_margin_threshold`](understory_placement::PlacementOptions::with_margin_threshold)
    /// does.
    pub fn set_margin_threshold(
        &mut self,
        host: &mut H,
        margin: f64,
    ) -> Result<Response, InvalidMarginThreshold> {
        let placement = self.options.placement.with_margin_threshold(margin)?;
        if self.options.placement == placement {
            return Ok(Response::Idle);
        }
        self.options.placement = placement;
        Ok(self.invalidate(host, Invalidation::MARGIN))
    }

    /// Enable or disable the viewport constraint pass.
    pub fn set_viewport_constraints_disabled(&mut self, host: &mut H, disabled: bool) -> Response {
        if self.options.placement.disable_viewport_constraints == disabled {
            return Response::Idle;
        }
        self.options.placement.disable_viewport_constraints = disabled;
        self.invalidate(host, Invalidation::CONSTRAINTS)
    }

    /// Enable or disable Escape-to-dismiss, updating the key-down listener if open.
    pub fn set_escape_key_disabled(&mut self, host: &mut H, disabled: bool) {
        self.options.disable_escape_key = disabled;
        if !self.is_open() {
            return;
        }
        if disabled {
            self.unlisten(host, Listener::KEY_DOWN);
        } else {
            self.listen(host, Listener::KEY_DOWN);
        }
    }

    /// Enable or disable dismissal by outside presses, updating the listener if open.
    ///
    /// Re-enabling while open arms again after [`DISMISS_ARM_DELAY`].
    pub fn set_backdrop_click_disabled(&mut self, host: &mut H, disabled: bool) {
        self.options.disable_backdrop_click = disabled;
        if !self.is_open() {
            return;
        }
        if disabled {
            self.unlisten(host, Listener::POINTER_DOWN);
            if let Some(t) = self.arm_timer.take() {
                host.clear_timeout(t);
            }
        } else if self.subscriptions.pointer_down.is_none() && self.arm_timer.is_none() {
            self.arm_timer = Some(host.set_timeout(DISMISS_ARM_DELAY));
        }
    }

    /// Record `reason` and recompute synchronously.
    fn invalidate(&mut self, host: &mut H, reason: Invalidation) -> Response {
        if !self.is_open() {
            return Response::Idle;
        }
        self.pending |= reason;

        let anchor = self.anchor.and_then(|a| host.rect_of(&a));
        let content = self.content.and_then(|c| host.rect_of(&c));
        let (Some(anchor), Some(content)) = (anchor, content) else {
            if self.state == PopoverState::Positioned {
                self.transition(PopoverState::Stale);
            }
            return Response::Idle;
        };

        let content = Some(content.size());
        let viewport = host.viewport();
        let next = compute_placement(Some(anchor), content, viewport, &self.options.placement);
        if self.pending.intersects(Invalidation::INPUTS) {
            if let Some(t) = self.settle_timer.take() {
                host.clear_timeout(t);
            }
            self.settle_timer = Some(host.set_timeout(SETTLE_DELAY));
        }
        self.pending = Invalidation::empty();
        self.transition(PopoverState::Positioned);

        if next.differs_significantly(&self.placement) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?reason, ?next, "placement published");
            self.placement = next;
            Response::Reposition(next)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(?next, "sub-threshold change suppressed");
            Response::Idle
        }
    }

    fn listen(&mut self, host: &mut H, listener: Listener) {
        let slot = self.subscriptions.slot(listener);
        if slot.is_none() {
            *slot = Some(host.subscribe(listener));
            #[cfg(feature = "tracing")]
            tracing::debug!(?listener, "listener registered");
        }
    }

    fn unlisten(&mut self, host: &mut H, listener: Listener) {
        if let Some(s) = self.subscriptions.slot(listener).take() {
            host.unsubscribe(s);
            #[cfg(feature = "tracing")]
            tracing::debug!(?listener, "listener removed");
        }
    }

    fn transition(&mut self, next: PopoverState) {
        if self.state != next {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = ?self.state, to = ?next, "popover state");
            self.state = next;
        }
    }
}
