// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

use understory_placement::PlacementOptions;

/// Configuration of a [`Popover`](crate::session::Popover).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PopoverOptions {
    /// Origins, margin threshold, and the constraint switch.
    pub placement: PlacementOptions,
    /// Do not request dismissal on Escape.
    pub disable_escape_key: bool,
    /// Do not request dismissal on presses outside the anchor and content.
    pub disable_backdrop_click: bool,
}

impl PopoverOptions {
    /// Replace the placement options.
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementOptions) -> Self {
        self.placement = placement;
        self
    }

    /// Enable or disable Escape-to-dismiss.
    #[must_use]
    pub fn with_escape_key_disabled(mut self, disabled: bool) -> Self {
        self.disable_escape_key = disabled;
        self
    }

    /// Enable or disable dismissal by outside presses.
    #[must_use]
    pub fn with_backdrop_click_disabled(mut self, disabled: bool) -> Self {
        self.disable_backdrop_click = disabled;
        self
    }
}
