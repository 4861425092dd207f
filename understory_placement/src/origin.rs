// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attachment points on a rectangle: vertical and horizontal alignment, and their pairing.
//!
//! An [`Origin`] plays two roles in placement: as the *anchor origin* it names the point on
//! the anchor's rectangle that floating content attaches to, and as the *transform origin*
//! it names the point on the content's own rectangle that is aligned with that anchor point.
//! The two roles are independent; any of the nine origins can be paired with any other.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

/// Vertical alignment of an attachment point.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Vertical {
    /// Top edge; no shift.
    #[default]
    Top,
    /// Vertical midpoint; shifted by half the height.
    Center,
    /// Bottom edge; shifted by the full height.
    Bottom,
}

/// Horizontal alignment of an attachment point.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Horizontal {
    /// Left edge; no shift.
    #[default]
    Left,
    /// Horizontal midpoint; shifted by half the width.
    Center,
    /// Right edge; shifted by the full width.
    Right,
}

impl Vertical {
    /// All vertical alignments, top to bottom.
    pub const ALL: [Self; 3] = [Self::Top, Self::Center, Self::Bottom];

    /// Distance from the top edge of a box of the given `height`.
    #[inline]
    pub fn shift(self, height: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => height / 2.0,
            Self::Bottom => height,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl Horizontal {
    /// All horizontal alignments, left to right.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Distance from the left edge of a box of the given `width`.
    #[inline]
    pub fn shift(self, width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => width / 2.0,
            Self::Right => width,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// An attachment point on a rectangle.
///
/// Defaults to the top-left corner, which is also the default transform origin.
/// The default anchor origin is [`Origin::BOTTOM_LEFT`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    /// Vertical alignment.
    pub vertical: Vertical,
    /// Horizontal alignment.
    pub horizontal: Horizontal,
}

impl Origin {
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self::new(Vertical::Top, Horizontal::Left);
    /// Midpoint of the top edge.
    pub const TOP_CENTER: Self = Self::new(Vertical::Top, Horizontal::Center);
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self::new(Vertical::Top, Horizontal::Right);
    /// Midpoint of the left edge.
    pub const CENTER_LEFT: Self = Self::new(Vertical::Center, Horizontal::Left);
    /// Center of the box.
    pub const CENTER: Self = Self::new(Vertical::Center, Horizontal::Center);
    /// Midpoint of the right edge.
    pub const CENTER_RIGHT: Self = Self::new(Vertical::Center, Horizontal::Right);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self::new(Vertical::Bottom, Horizontal::Left);
    /// Midpoint of the bottom edge.
    pub const BOTTOM_CENTER: Self = Self::new(Vertical::Bottom, Horizontal::Center);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self::new(Vertical::Bottom, Horizontal::Right);

    /// All nine origins in row-major order (top row first).
    pub const ALL: [Self; 9] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::CENTER_LEFT,
        Self::CENTER,
        Self::CENTER_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    /// Create an origin from its two alignments.
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Offset of this point from the top-left corner of a box of the given size.
    ///
    /// Used with the content's own size to resolve the transform offset.
    #[inline]
    pub fn offset_in(self, size: Size) -> Vec2 {
        Vec2::new(
            self.horizontal.shift(size.width),
            self.vertical.shift(size.height),
        )
    }

    /// This point on `rect`, in the same coordinate space as `rect`.
    #[inline]
    pub fn anchor_point(self, rect: Rect) -> Point {
        Point::new(rect.x0, rect.y0) + self.offset_in(rect.size())
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertical, self.horizontal)
    }
}

/// Error returned when parsing an origin from text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseOriginError {
    /// The text named no vertical alignment (`top`, `center`, `bottom`).
    #[error("expected `top`, `center`, or `bottom`")]
    Vertical,
    /// The text named no horizontal alignment (`left`, `center`, `right`).
    #[error("expected `left`, `center`, or `right`")]
    Horizontal,
    /// An origin must be written as `<vertical> <horizontal>`.
    #[error("expected `<vertical> <horizontal>`, e.g. `bottom left`")]
    Shape,
}

impl FromStr for Vertical {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseOriginError::Vertical),
        }
    }
}

impl FromStr for Horizontal {
    type Err = ParseOriginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(ParseOriginError::Horizontal),
        }
    }
}

impl FromStr for Origin {
    type Err = ParseOriginError;

    /// Parse `"<vertical> <horizontal>"`, e.g. `"bottom left"` or `"center center"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(v), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseOriginError::Shape);
        };
        Ok(Self::new(v.parse()?, h.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_follow_alignment() {
        assert_eq!(Vertical::Top.shift(40.0), 0.0);
        assert_eq!(Vertical::Center.shift(40.0), 20.0);
        assert_eq!(Vertical::Bottom.shift(40.0), 40.0);
        assert_eq!(Horizontal::Left.shift(80.0), 0.0);
        assert_eq!(Horizontal::Center.shift(80.0), 40.0);
        assert_eq!(Horizontal::Right.shift(80.0), 80.0);
    }

    #[test]
    fn anchor_point_of_default_anchor_origin() {
        let rect = Rect::new(100.0, 100.0, 120.0, 120.0);
        assert_eq!(
            Origin::BOTTOM_LEFT.anchor_point(rect),
            Point::new(100.0, 120.0)
        );
        assert_eq!(Origin::CENTER.anchor_point(rect), Point::new(110.0, 110.0));
        assert_eq!(
            Origin::TOP_RIGHT.anchor_point(rect),
            Point::new(120.0, 100.0)
        );
    }

    #[test]
    fn offset_is_independent_per_axis() {
        let size = Size::new(80.0, 40.0);
        for o in Origin::ALL {
            let off = o.offset_in(size);
            assert_eq!(off.x, o.horizontal.shift(80.0), "x for {o}");
            assert_eq!(off.y, o.vertical.shift(40.0), "y for {o}");
        }
    }

    #[test]
    fn all_lists_nine_distinct_origins() {
        for (i, a) in Origin::ALL.iter().enumerate() {
            for b in &Origin::ALL[i + 1..] {
                assert_ne!(a, b, "duplicate origin in ALL");
            }
        }
        assert_eq!(Origin::default(), Origin::TOP_LEFT);
    }

    #[test]
    fn parse_accepts_every_origin_it_displays() {
        for o in Origin::ALL {
            let text = alloc_free_display(o);
            assert_eq!(text.as_str().parse::<Origin>(), Ok(o));
        }
        let spaced = "  bottom   right ".parse::<Origin>();
        assert_eq!(spaced, Ok(Origin::BOTTOM_RIGHT));
    }

    #[test]
    fn parse_rejects_out_of_domain_values() {
        use ParseOriginError::{Horizontal as NoHorizontal, Shape, Vertical as NoVertical};
        assert_eq!("middle".parse::<Vertical>(), Err(NoVertical));
        assert_eq!("top".parse::<Horizontal>(), Err(NoHorizontal));
        assert_eq!("left top".parse::<Origin>(), Err(NoVertical));
        assert_eq!("top middle".parse::<Origin>(), Err(NoHorizontal));
        assert_eq!("top".parse::<Origin>(), Err(Shape));
        assert_eq!("top left x".parse::<Origin>(), Err(Shape));
    }

    // Small fixed buffer so the test runs without `alloc`.
    struct Buf {
        bytes: [u8; 32],
        len: usize,
    }

    impl Buf {
        fn as_str(&self) -> &str {
            core::str::from_utf8(&self.bytes[..self.len]).unwrap()
        }
    }

    impl fmt::Write for Buf {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let end = self.len + s.len();
            self.bytes
                .get_mut(self.len..end)
                .ok_or(fmt::Error)?
                .copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    fn alloc_free_display(o: Origin) -> Buf {
        use fmt::Write as _;
        let mut buf = Buf {
            bytes: [0; 32],
            len: 0,
        };
        write!(buf, "{o}").unwrap();
        buf
    }
}
