// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement configuration.

use crate::origin::Origin;

/// Default distance, in pixels, that floating content keeps from every viewport edge.
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 16.0;

/// Inputs to [`compute_placement`](crate::compute_placement) that the caller chooses,
/// as opposed to the geometry sampled from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlacementOptions {
    /// Point on the anchor that the content attaches to. Defaults to [`Origin::BOTTOM_LEFT`].
    pub anchor_origin: Origin,
    /// Point on the content aligned with the anchor point. Defaults to [`Origin::TOP_LEFT`].
    pub transform_origin: Origin,
    /// Minimum distance from any viewport edge, in pixels.
    ///
    /// Must be finite and non-negative; use [`PlacementOptions::with_margin_threshold`]
    /// to have that checked.
    pub margin_threshold: f64,
    /// Skip the constraint pass and return the raw anchor-derived position.
    pub disable_viewport_constraints: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            anchor_origin: Origin::BOTTOM_LEFT,
            transform_origin: Origin::TOP_LEFT,
            margin_threshold: DEFAULT_MARGIN_THRESHOLD,
            disable_viewport_constraints: false,
        }
    }
}

/// A margin threshold that is negative, infinite, or NaN.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
#[error("margin threshold must be finite and non-negative, got {0}")]
pub struct InvalidMarginThreshold(pub f64);

impl PlacementOptions {
    /// Set the anchor origin.
    #[must_use]
    pub fn with_anchor_origin(mut self, origin: Origin) -> Self {
        self.anchor_origin = origin;
        self
    }

    /// Set the transform origin.
    #[must_use]
    pub fn with_transform_origin(mut self, origin: Origin) -> Self {
        self.transform_origin = origin;
        self
    }

    /// Set the margin threshold, rejecting values outside `0.0..=f64::MAX`.
    pub fn with_margin_threshold(mut self, margin: f64) -> Result<Self, InvalidMarginThreshold> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(InvalidMarginThreshold(margin));
        }
        self.margin_threshold = margin;
        Ok(self)
    }

    /// Enable or disable the viewport constraint pass.
    #[must_use]
    pub fn with_viewport_constraints_disabled(mut self, disabled: bool) -> Self {
        self.disable_viewport_constraints = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let o = PlacementOptions::default();
        assert_eq!(o.anchor_origin, Origin::BOTTOM_LEFT);
        assert_eq!(o.transform_origin, Origin::TOP_LEFT);
        assert_eq!(o.margin_threshold, 16.0);
        assert!(!o.disable_viewport_constraints);
    }

    #[test]
    fn margin_threshold_is_validated() {
        let o = PlacementOptions::default();
        let margin = |m: f64| o.with_margin_threshold(m).map(|o| o.margin_threshold);
        assert_eq!(margin(0.0), Ok(0.0));
        assert_eq!(margin(8.5), Ok(8.5));
        assert_eq!(
            o.with_margin_threshold(-1.0),
            Err(InvalidMarginThreshold(-1.0))
        );
        assert!(o.with_margin_threshold(f64::NAN).is_err());
        assert!(o.with_margin_threshold(f64::INFINITY).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_options_with_defaults() {
        let o: PlacementOptions = serde_json::from_str(
            r#"{ "anchor_origin": { "vertical": "center", "horizontal": "right" }, "margin_threshold": 8.0 }"#,
        )
        .unwrap();
        assert_eq!(o.anchor_origin, Origin::CENTER_RIGHT);
        assert_eq!(o.transform_origin, Origin::TOP_LEFT);
        assert_eq!(o.margin_threshold, 8.0);
        assert!(!o.disable_viewport_constraints);
    }
}
