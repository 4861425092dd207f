// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The computed placement of floating content, and the rule for when a new one is worth applying.

use kurbo::{Point, Rect, Size};

/// Largest change in `top` or `left`, in pixels, that does not count as a visible update.
pub const SIGNIFICANCE_THRESHOLD: f64 = 1.0;

/// Where floating content goes, in viewport coordinates.
///
/// `max_width` and `max_height` are present only when viewport constraints were applied;
/// `None` means unconstrained.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Distance of the content's top edge from the top of the viewport.
    pub top: f64,
    /// Distance of the content's left edge from the left of the viewport.
    pub left: f64,
    /// Upper bound on the content's width.
    pub max_width: Option<f64>,
    /// Upper bound on the content's height.
    pub max_height: Option<f64>,
}

impl Placement {
    /// The placement used before anything could be measured.
    ///
    /// Callers treat this as "not yet positioned", not as an error.
    pub const UNPOSITIONED: Self = Self {
        top: 0.0,
        left: 0.0,
        max_width: None,
        max_height: None,
    };

    /// Top-left corner of the content.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Size of content of natural size `content` once the max dimensions are applied.
    ///
    /// Negative budgets (a viewport smaller than its margins) clamp to zero.
    pub fn clamp_size(&self, content: Size) -> Size {
        let clamp = |natural: f64, max: Option<f64>| match max {
            Some(max) => natural.min(max.max(0.0)),
            None => natural,
        };
        Size::new(
            clamp(content.width, self.max_width),
            clamp(content.height, self.max_height),
        )
    }

    /// The box the content occupies once placed, given its natural size.
    pub fn rect(&self, content: Size) -> Rect {
        Rect::from_origin_size(self.origin(), self.clamp_size(content))
    }

    /// Whether replacing `previous` with `self` is a visible update.
    ///
    /// True when `top` or `left` moved by more than [`SIGNIFICANCE_THRESHOLD`], or when
    /// either max dimension changed at all (including appearing or disappearing).
    pub fn differs_significantly(&self, previous: &Self) -> bool {
        (self.top - previous.top).abs() > SIGNIFICANCE_THRESHOLD
            || (self.left - previous.left).abs() > SIGNIFICANCE_THRESHOLD
            || self.max_width != previous.max_width
            || self.max_height != previous.max_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(top: f64, left: f64) -> Placement {
        Placement {
            top,
            left,
            max_width: Some(888.0),
            max_height: Some(632.0),
        }
    }

    #[test]
    fn sub_pixel_jitter_is_not_significant() {
        let prev = at(120.0, 100.0);
        assert!(!at(120.5, 99.5).differs_significantly(&prev));
        assert!(!at(121.0, 99.0).differs_significantly(&prev));
        assert!(!prev.differs_significantly(&prev));
    }

    #[test]
    fn movement_past_one_pixel_is_significant() {
        let prev = at(120.0, 100.0);
        assert!(at(121.5, 100.0).differs_significantly(&prev));
        assert!(at(120.0, 98.9).differs_significantly(&prev));
    }

    #[test]
    fn any_max_dimension_change_is_significant() {
        let prev = at(120.0, 100.0);
        let mut next = prev;
        next.max_width = Some(887.5);
        assert!(next.differs_significantly(&prev));

        let mut next = prev;
        next.max_height = None;
        assert!(next.differs_significantly(&prev));
    }

    #[test]
    fn unpositioned_is_the_default() {
        assert_eq!(Placement::default(), Placement::UNPOSITIONED);
        assert_eq!(Placement::UNPOSITIONED.origin(), Point::ZERO);
    }

    #[test]
    fn rect_applies_max_dimensions() {
        let p = Placement {
            top: 16.0,
            left: 16.0,
            max_width: Some(50.0),
            max_height: None,
        };
        assert_eq!(
            p.rect(Size::new(80.0, 40.0)),
            Rect::new(16.0, 16.0, 66.0, 56.0)
        );

        let squeezed = Placement {
            max_height: Some(-4.0),
            ..p
        };
        assert_eq!(squeezed.clamp_size(Size::new(80.0, 40.0)).height, 0.0);
    }
}
