// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement computation.
//!
//! ## Algorithm
//!
//! 1. Resolve the anchor point: the anchor origin applied to the anchor rectangle.
//! 2. Resolve the transform offset: the transform origin applied to the content size.
//! 3. The raw position is the anchor point minus the transform offset, per axis.
//! 4. Unless constraints are disabled, clamp each axis to the margin threshold and bound
//!    the content's size by the space left toward the far viewport edge.
//!
//! Everything here is pure: the caller samples the anchor rectangle, the content size,
//! and the viewport, and gets back the same [`Placement`] for the same inputs.

use kurbo::{Point, Rect, Size};

use crate::options::PlacementOptions;
use crate::placement::Placement;

/// Extra pixels withheld from the width budget when the content is not clamped horizontally.
///
/// Only the horizontal axis carries this buffer; the vertical budget stops at the margin.
pub const FAR_EDGE_WIDTH_BUFFER: f64 = 20.0;

/// Top-left corner of the content before any viewport constraint is applied.
pub fn raw_position(anchor: Rect, content: Size, options: &PlacementOptions) -> Point {
    options.anchor_origin.anchor_point(anchor) - options.transform_origin.offset_in(content)
}

/// Compute where floating content goes.
///
/// `anchor` is the anchor's rectangle and `content` the content's measured size, both
/// sampled by the caller in viewport coordinates. If either is missing the result is
/// [`Placement::UNPOSITIONED`]. `viewport` is only consulted when constraints are enabled.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{Placement, PlacementOptions, compute_placement};
///
/// let anchor = Rect::new(100.0, 100.0, 120.0, 120.0);
/// let p = compute_placement(
///     Some(anchor),
///     Some(Size::new(80.0, 40.0)),
///     Size::new(1024.0, 768.0),
///     &PlacementOptions::default(),
/// );
/// assert_eq!(
///     p,
///     Placement { top: 120.0, left: 100.0, max_width: Some(888.0), max_height: Some(632.0) },
/// );
/// ```
pub fn compute_placement(
    anchor: Option<Rect>,
    content: Option<Size>,
    viewport: Size,
    options: &PlacementOptions,
) -> Placement {
    let (Some(anchor), Some(content)) = (anchor, content) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            has_anchor = anchor.is_some(),
            has_content = content.is_some(),
            "placement inputs missing; unpositioned"
        );
        return Placement::UNPOSITIONED;
    };

    let raw = raw_position(anchor, content, options);
    if options.disable_viewport_constraints {
        return Placement {
            top: raw.y,
            left: raw.x,
            max_width: None,
            max_height: None,
        };
    }

    let margin = options.margin_threshold;
    let (left, max_width) = constrain_axis(raw.x, viewport.width, margin, FAR_EDGE_WIDTH_BUFFER);
    let (top, max_height) = constrain_axis(raw.y, viewport.height, margin, 0.0);
    Placement {
        top,
        left,
        max_width: Some(max_width),
        max_height: Some(max_height),
    }
}

/// Clamp one axis and derive its max extent.
///
/// Below the margin the coordinate snaps to it and may fill everything between the two
/// margins; otherwise it stays put and may fill up to the far margin, less `buffer`.
fn constrain_axis(start: f64, extent: f64, margin: f64, buffer: f64) -> (f64, f64) {
    if start < margin {
        (margin, extent - margin * 2.0)
    } else {
        (start, extent - start - margin - buffer)
    }
}
