// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the popover session: states, listeners, host events, and responses.
//!
//! ## Overview
//!
//! These types describe the protocol between a [`Popover`](crate::session::Popover) and its host.
//! The host registers [`Listener`]s on the session's behalf, delivers [`HostEvent`]s back to it,
//! and acts on the returned [`Response`].

use core::time::Duration;

use understory_placement::Placement;

/// How long after positioning the session measures once more.
///
/// Late layout shifts (fonts or images finishing) can move the anchor or resize the content
/// shortly after the first measurement; the second pass absorbs them.
///
/// The pass goes through the usual significance filter: a move of at most one pixel is
/// suppressed only when `max_width` and `max_height` come out unchanged. With viewport
/// constraints on, a move along an unclamped axis also changes that axis's budget, so it
/// is published.
pub const SETTLE_DELAY: Duration = Duration::from_millis(10);

/// Delay before outside pointer-downs start dismissing.
///
/// Zero still defers to the next turn of the host's event loop, so the pointer-down that
/// opened the popover is not seen as an outside press.
pub const DISMISS_ARM_DELAY: Duration = Duration::ZERO;

/// Lifecycle state of a [`Popover`](crate::session::Popover).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PopoverState {
    /// Not shown; no listeners, no timers, no retained placement.
    #[default]
    Closed,
    /// Open, but the anchor or content could not be measured yet.
    Opening,
    /// Measured and placed.
    Positioned,
    /// Could not re-measure the anchor or content; the last placement is retained.
    ///
    /// Recomputes run synchronously, so this is the only way to be out of date while open.
    /// The next recompute that can measure returns to [`Positioned`](Self::Positioned).
    Stale,
}

impl PopoverState {
    /// Whether the popover is shown (any state but [`Closed`](Self::Closed)).
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Event propagation phase a listener registers for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Root-to-target traversal; sees events from every descendant, including ones that
    /// do not bubble (e.g. scrolls of nested containers).
    Capture,
    /// Target-to-root traversal.
    Bubble,
}

/// The kind of host event a listener receives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ListenerKind {
    /// Window (viewport) resizes.
    Resize,
    /// Scrolls of the document or of any scroll container.
    Scroll,
    /// Key presses.
    KeyDown,
    /// Pointer presses anywhere in the document.
    PointerDown,
}

/// A listener registration requested from the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Listener {
    /// What to listen for.
    pub kind: ListenerKind,
    /// Which propagation phase to listen in.
    pub phase: Phase,
}

impl Listener {
    /// Window resize, bubbling.
    pub const RESIZE: Self = Self {
        kind: ListenerKind::Resize,
        phase: Phase::Bubble,
    };
    /// Scroll anywhere, in the capture phase so nested scroll containers are seen.
    pub const SCROLL: Self = Self {
        kind: ListenerKind::Scroll,
        phase: Phase::Capture,
    };
    /// Document key-down, bubbling.
    pub const KEY_DOWN: Self = Self {
        kind: ListenerKind::KeyDown,
        phase: Phase::Bubble,
    };
    /// Document pointer-down, bubbling.
    pub const POINTER_DOWN: Self = Self {
        kind: ListenerKind::PointerDown,
        phase: Phase::Bubble,
    };
}

bitflags::bitflags! {
    /// Set of listener kinds a session currently holds.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// [`ListenerKind::Resize`].
        const RESIZE       = 0b0000_0001;
        /// [`ListenerKind::Scroll`].
        const SCROLL       = 0b0000_0010;
        /// [`ListenerKind::KeyDown`].
        const KEY_DOWN     = 0b0000_0100;
        /// [`ListenerKind::PointerDown`].
        const POINTER_DOWN = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Why a placement is out of date.
    ///
    /// Reasons accumulate while the session cannot measure and are cleared by the next
    /// successful recompute.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u16 {
        /// The popover was opened.
        const OPEN        = 0b0000_0000_0001;
        /// The content node was mounted or re-measured.
        const MOUNT       = 0b0000_0000_0010;
        /// The anchor node changed.
        const ANCHOR      = 0b0000_0000_0100;
        /// The anchor or transform origin changed.
        const ORIGIN      = 0b0000_0000_1000;
        /// The margin threshold changed.
        const MARGIN      = 0b0000_0001_0000;
        /// Viewport constraints were enabled or disabled.
        const CONSTRAINTS = 0b0000_0010_0000;
        /// The window was resized.
        const RESIZE      = 0b0000_0100_0000;
        /// Something scrolled.
        const SCROLL      = 0b0000_1000_0000;
        /// The settle timer fired.
        const SETTLE      = 0b0001_0000_0000;

        /// Input changes that are followed by a settle pass.
        const INPUTS = Self::OPEN.bits()
            | Self::MOUNT.bits()
            | Self::ANCHOR.bits()
            | Self::ORIGIN.bits()
            | Self::MARGIN.bits()
            | Self::CONSTRAINTS.bits();
    }
}

/// A key press, as far as dismissal is concerned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// An event delivered by the host to a session.
///
/// `K` is the host's node key and `T` its timer handle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HostEvent<K, T> {
    /// The window was resized.
    Resize,
    /// The document or some scroll container scrolled.
    Scroll,
    /// A key was pressed.
    KeyDown(Key),
    /// A pointer was pressed on `target`.
    PointerDown {
        /// Innermost node under the pointer.
        target: K,
    },
    /// A timer scheduled through [`EventHub::set_timeout`](crate::host::EventHub::set_timeout) fired.
    Timeout(T),
}

/// What the host should do after handing an event or input change to a session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Response {
    /// Nothing visible changed.
    Idle,
    /// Apply this placement to the content.
    Reposition(Placement),
    /// The user asked to dismiss; the host decides whether to call
    /// [`Popover::close`](crate::session::Popover::close).
    CloseRequested,
}

/// Accessible role exposed by the popover's content container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// A dialog.
    Dialog,
}

impl Role {
    /// ARIA role name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
        }
    }
}

impl From<ListenerKind> for Listeners {
    fn from(kind: ListenerKind) -> Self {
        match kind {
            ListenerKind::Resize => Self::RESIZE,
            ListenerKind::Scroll => Self::SCROLL,
            ListenerKind::KeyDown => Self::KEY_DOWN,
            ListenerKind::PointerDown => Self::POINTER_DOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_exclude_event_driven_reasons() {
        let opened = Invalidation::OPEN | Invalidation::ANCHOR;
        assert!(Invalidation::INPUTS.contains(opened));
        let events = Invalidation::RESIZE | Invalidation::SCROLL | Invalidation::SETTLE;
        assert!(!Invalidation::INPUTS.intersects(events));
    }

    #[test]
    fn scroll_listens_in_capture_phase() {
        assert_eq!(Listener::SCROLL.phase, Phase::Capture);
        assert_eq!(Listener::RESIZE.phase, Phase::Bubble);
    }

    #[test]
    fn listener_kinds_map_to_distinct_flags() {
        let all = [
            ListenerKind::Resize,
            ListenerKind::Scroll,
            ListenerKind::KeyDown,
            ListenerKind::PointerDown,
        ];
        let mut seen = Listeners::empty();
        for kind in all {
            let flag = Listeners::from(kind);
            assert!(!seen.intersects(flag), "{kind:?} overlaps");
            seen |= flag;
        }
        assert_eq!(seen, Listeners::all());
    }

    #[test]
    fn only_closed_is_not_open() {
        assert!(!PopoverState::Closed.is_open());
        assert!(PopoverState::Opening.is_open());
        assert!(PopoverState::Positioned.is_open());
        assert!(PopoverState::Stale.is_open());
        assert_eq!(Role::Dialog.as_str(), "dialog");
    }
}
