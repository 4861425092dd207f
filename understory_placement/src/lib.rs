// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: viewport-aware positioning of floating content.
//!
//! Given an anchor rectangle, the size of some floating content (a popover, menu, or
//! tooltip), a pair of attachment points, and the viewport size, compute where the content
//! goes and how large it may grow before it crosses the viewport's margins.
//!
//! ## Origins
//!
//! An [`Origin`] pairs a [`Vertical`] and a [`Horizontal`] alignment.
//! The *anchor origin* picks the point on the anchor rectangle; the *transform origin*
//! picks the point on the content that lands on it.
//! Any of the nine origins may be combined with any other.
//!
//! ## Constraints
//!
//! With constraints enabled (the default), each axis is handled independently:
//! - a coordinate below the margin threshold snaps to it, and the content may then fill
//!   everything between the two margins;
//! - otherwise the coordinate is kept and the content may fill up to the far margin.
//!   The width budget additionally withholds [`FAR_EDGE_WIDTH_BUFFER`].
//!
//! Setting [`PlacementOptions::disable_viewport_constraints`] returns the raw position with
//! no max dimensions.
//!
//! ## Not a session
//!
//! This crate only computes. Sampling the geometry, reacting to resizes and scrolls,
//! and suppressing sub-pixel updates with [`Placement::differs_significantly`] are left to
//! the caller (see `understory_popover`).
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_placement::{Origin, PlacementOptions, compute_placement};
//!
//! let options = PlacementOptions::default()
//!     .with_anchor_origin(Origin::BOTTOM_CENTER)
//!     .with_transform_origin(Origin::TOP_CENTER);
//!
//! let button = Rect::new(0.0, 0.0, 40.0, 20.0);
//! let p = compute_placement(Some(button), Some(Size::new(200.0, 100.0)), Size::new(800.0, 600.0), &options);
//!
//! // Centered under the button would start at x = -80, so it clamps to the margin.
//! assert_eq!(p.left, 16.0);
//! assert_eq!(p.max_width, Some(800.0 - 32.0));
//! assert_eq!(p.top, 20.0);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod engine;
mod options;
mod origin;
mod placement;

pub use engine::{FAR_EDGE_WIDTH_BUFFER, compute_placement, raw_position};
pub use options::{DEFAULT_MARGIN_THRESHOLD, InvalidMarginThreshold, PlacementOptions};
pub use origin::{Horizontal, Origin, ParseOriginError, Vertical};
pub use placement::{Placement, SIGNIFICANCE_THRESHOLD};
