// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public value types: placements, bound targets, space budgets, and results.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

use crate::error::{ParseBoundTargetError, ParsePlacementError};

/// Side of the reference box a popover is placed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the reference.
    Top,
    /// To the right of the reference.
    Right,
    /// Below the reference.
    Bottom,
    /// To the left of the reference.
    Left,
}

/// Alignment of a popover along the side it is placed against.
///
/// For [`Side::Top`] and [`Side::Bottom`] the start corner is the left edge;
/// for [`Side::Left`] and [`Side::Right`] it is the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Left or top corner.
    Start,
    /// Centered on the reference.
    Center,
    /// Right or bottom corner.
    End,
}

/// A named side + alignment combination.
///
/// The textual form is `<side>-<alignment>`, for example `top-center` or
/// `right-bottom`. See [`Placement::ALL`] for the complete, closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Placement {
    /// Above, aligned to the reference's left edge.
    TopLeft,
    /// Above, centered.
    TopCenter,
    /// Above, aligned to the reference's right edge.
    TopRight,
    /// Right, aligned to the reference's top edge.
    RightTop,
    /// Right, centered.
    RightCenter,
    /// Right, aligned to the reference's bottom edge.
    RightBottom,
    /// Below, aligned to the reference's left edge.
    BottomLeft,
    /// Below, centered.
    BottomCenter,
    /// Below, aligned to the reference's right edge.
    BottomRight,
    /// Left, aligned to the reference's top edge.
    LeftTop,
    /// Left, centered.
    LeftCenter,
    /// Left, aligned to the reference's bottom edge.
    LeftBottom,
}

impl Placement {
    /// Every placement, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::RightTop,
        Self::RightCenter,
        Self::RightBottom,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftCenter,
        Self::LeftBottom,
    ];

    /// Placements used when the caller configures none: `top-center`, then `bottom-center`.
    pub const DEFAULT: [Self; 2] = [Self::TopCenter, Self::BottomCenter];

    /// The side of the reference this placement sits against.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => Side::Top,
            Self::RightTop | Self::RightCenter | Self::RightBottom => Side::Right,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => Side::Bottom,
            Self::LeftTop | Self::LeftCenter | Self::LeftBottom => Side::Left,
        }
    }

    /// The alignment along [`Placement::side`].
    #[must_use]
    pub const fn align(self) -> Align {
        match self {
            Self::TopLeft | Self::RightTop | Self::BottomLeft | Self::LeftTop => Align::Start,
            Self::TopCenter | Self::RightCenter | Self::BottomCenter | Self::LeftCenter => {
                Align::Center
            }
            Self::TopRight | Self::RightBottom | Self::BottomRight | Self::LeftBottom => Align::End,
        }
    }

    /// The `<side>-<alignment>` name of this placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::RightTop => "right-top",
            Self::RightCenter => "right-center",
            Self::RightBottom => "right-bottom",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftCenter => "left-center",
            Self::LeftBottom => "left-bottom",
        }
    }

    /// Largest height a popover can take in this placement.
    ///
    /// Placements above or below get the space on that side. Placements to
    /// the left or right may extend past the reference vertically, away from
    /// their aligned corner; centered ones grow symmetrically and are limited
    /// by the tighter of the two vertical budgets.
    #[must_use]
    pub fn max_height(self, space: &Space, reference: Size) -> f64 {
        match (self.side(), self.align()) {
            (Side::Top, _) => space.top,
            (Side::Bottom, _) => space.bottom,
            (Side::Left | Side::Right, Align::Start) => reference.height + space.bottom,
            (Side::Left | Side::Right, Align::Center) => {
                reference.height + space.top.min(space.bottom) * 2.0
            }
            (Side::Left | Side::Right, Align::End) => reference.height + space.top,
        }
    }

    /// Largest width a popover can take in this placement.
    ///
    /// Mirror of [`Placement::max_height`] with the axes swapped.
    #[must_use]
    pub fn max_width(self, space: &Space, reference: Size) -> f64 {
        match (self.side(), self.align()) {
            (Side::Right, _) => space.right,
            (Side::Left, _) => space.left,
            (Side::Top | Side::Bottom, Align::Start) => reference.width + space.right,
            (Side::Top | Side::Bottom, Align::Center) => {
                reference.width + space.left.min(space.right) * 2.0
            }
            (Side::Top | Side::Bottom, Align::End) => reference.width + space.left,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(ParsePlacementError)
    }
}

/// Which extent constrains the space available around the reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BoundTarget {
    /// Measure against the full scrollable extent of the reference's scroll
    /// context, so popovers may extend into overflow that is scrolled away.
    #[default]
    Window,
    /// Measure against the visible viewport only.
    Viewport,
}

impl BoundTarget {
    /// Both bound targets.
    pub const ALL: [Self; 2] = [Self::Window, Self::Viewport];

    /// The lowercase name of this bound target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Viewport => "viewport",
        }
    }
}

impl fmt::Display for BoundTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundTarget {
    type Err = ParseBoundTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(ParseBoundTargetError)
    }
}

/// Positioning mode the caller should give the popover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PositionMode {
    /// The reference lives in a fixed subtree; coordinates are viewport-relative.
    Fixed,
    /// Coordinates are relative to the popover's positioned ancestor.
    #[default]
    Absolute,
}

impl PositionMode {
    /// The lowercase name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Absolute => "absolute",
        }
    }
}

impl fmt::Display for PositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distances from each edge of the reference to the matching edge of the
/// bounding context.
///
/// Values are not clamped: a reference overflowing its context yields
/// negative budgets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Space {
    /// Space above the reference.
    pub top: f64,
    /// Space left of the reference.
    pub left: f64,
    /// Space right of the reference.
    pub right: f64,
    /// Space below the reference.
    pub bottom: f64,
}

impl Space {
    /// Space around `reference` (viewport coordinates) within a viewport of
    /// size `viewport`, whose origin is `(0, 0)`.
    #[must_use]
    pub fn in_viewport(reference: Rect, viewport: Size) -> Self {
        Self::within(reference, Vec2::ZERO, viewport)
    }

    /// Space around `reference` within a scroll context whose content is
    /// scrolled by `scroll` and has a total scrollable size of `extent`.
    ///
    /// The reference is moved into content coordinates by adding the scroll
    /// offset to its viewport position.
    #[must_use]
    pub fn in_scroll_context(reference: Rect, scroll: Vec2, extent: Size) -> Self {
        Self::within(reference, scroll, extent)
    }

    fn within(reference: Rect, shift: Vec2, extent: Size) -> Self {
        let top = reference.y0 + shift.y;
        let left = reference.x0 + shift.x;
        Self {
            top,
            left,
            right: extent.width - (left + reference.width()),
            bottom: extent.height - (top + reference.height()),
        }
    }
}

/// A placement under consideration, with the size it could offer and the
/// score it accumulated against the other candidates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// The placement being scored.
    pub placement: Placement,
    /// See [`Placement::max_width`].
    pub max_width: f64,
    /// See [`Placement::max_height`].
    pub max_height: f64,
    /// Points won in pairwise comparisons.
    pub score: u32,
}

impl Candidate {
    /// Measure `placement` against `space` for a reference of size `reference`.
    ///
    /// The score starts at zero.
    #[must_use]
    pub fn measure(placement: Placement, space: &Space, reference: Size) -> Self {
        Self {
            placement,
            max_width: placement.max_width(space, reference),
            max_height: placement.max_height(space, reference),
            score: 0,
        }
    }
}

/// Where to put the popover, and how much room it has there.
///
/// `top`/`left` is the anchor point: the reference corner (or edge midpoint)
/// matching the chosen placement, in the coordinate space implied by
/// [`PlacementResult::position`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PlacementResult {
    /// Positioning mode to apply to the popover.
    pub position: PositionMode,
    /// The winning placement.
    pub placement: Placement,
    /// Vertical anchor coordinate.
    pub top: f64,
    /// Horizontal anchor coordinate.
    pub left: f64,
    /// Width of the reference box.
    pub reference_width: f64,
    /// Height of the reference box.
    pub reference_height: f64,
    /// Largest width available in the winning placement.
    pub max_width: f64,
    /// Largest height available in the winning placement.
    pub max_height: f64,
}

impl PlacementResult {
    /// A zeroed, absolutely positioned result for `placement`.
    ///
    /// Returned when the host has no window to measure against.
    #[must_use]
    pub const fn fallback(placement: Placement) -> Self {
        Self {
            position: PositionMode::Absolute,
            placement,
            top: 0.0,
            left: 0.0,
            reference_width: 0.0,
            reference_height: 0.0,
            max_width: 0.0,
            max_height: 0.0,
        }
    }

    /// The anchor as a point (`x = left`, `y = top`).
    #[must_use]
    pub fn anchor(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The room available to the popover, as a size.
    #[must_use]
    pub fn max_size(&self) -> Size {
        Size::new(self.max_width, self.max_height)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{Align, BoundTarget, Placement, Side, Space};

    #[test]
    fn names_parse_back() {
        for p in Placement::ALL {
            assert_eq!(p.as_str().parse::<Placement>(), Ok(p), "{p} should parse");
        }
        for t in BoundTarget::ALL {
            assert_eq!(t.as_str().parse::<BoundTarget>(), Ok(t), "{t} should parse");
        }
        assert!("top".parse::<Placement>().is_err(), "bare side is not a placement");
        assert!("TOP_CENTER".parse::<Placement>().is_err(), "names are kebab-case");
        assert!("document".parse::<BoundTarget>().is_err(), "unknown bound target");
    }

    #[test]
    fn side_and_align_decompose_names() {
        assert_eq!(Placement::RightBottom.side(), Side::Right);
        assert_eq!(Placement::RightBottom.align(), Align::End);
        assert_eq!(Placement::TopLeft.align(), Align::Start);
        assert_eq!(Placement::LeftCenter.side(), Side::Left);
        assert_eq!(Placement::LeftCenter.align(), Align::Center);
        for p in Placement::ALL {
            let (side, align) = p.as_str().split_once('-').expect("names have one separator");
            let expect_side = match side {
                "top" => Side::Top,
                "right" => Side::Right,
                "bottom" => Side::Bottom,
                _ => Side::Left,
            };
            assert_eq!(p.side(), expect_side, "side of {p}");
            assert_eq!(align == "center", p.align() == Align::Center, "align of {p}");
        }
    }

    #[test]
    fn viewport_space_is_measured_from_origin() {
        let reference = Rect::new(50.0, 100.0, 250.0, 140.0);
        let space = Space::in_viewport(reference, Size::new(800.0, 600.0));
        assert_eq!(
            space,
            Space {
                top: 100.0,
                left: 50.0,
                right: 550.0,
                bottom: 460.0,
            }
        );
    }

    #[test]
    fn scroll_space_shifts_by_offset_and_is_not_clamped() {
        let reference = Rect::new(-20.0, 10.0, 80.0, 30.0);
        let space = Space::in_scroll_context(
            reference,
            Vec2::new(5.0, 200.0),
            Size::new(60.0, 1_000.0),
        );
        assert_eq!(space.left, -15.0);
        assert_eq!(space.top, 210.0);
        assert_eq!(space.right, 60.0 - (-15.0 + 100.0));
        assert!(space.right < 0.0, "overflowing reference keeps a negative budget");
        assert_eq!(space.bottom, 1_000.0 - (210.0 + 20.0));
    }

    #[test]
    fn max_size_table() {
        let space = Space {
            top: 10.0,
            left: 20.0,
            right: 30.0,
            bottom: 40.0,
        };
        let reference = Size::new(100.0, 50.0);

        assert_eq!(Placement::TopCenter.max_height(&space, reference), 10.0);
        assert_eq!(Placement::BottomLeft.max_height(&space, reference), 40.0);
        assert_eq!(Placement::RightTop.max_height(&space, reference), 90.0);
        assert_eq!(Placement::LeftCenter.max_height(&space, reference), 70.0);
        assert_eq!(Placement::LeftBottom.max_height(&space, reference), 60.0);

        assert_eq!(Placement::RightCenter.max_width(&space, reference), 30.0);
        assert_eq!(Placement::LeftTop.max_width(&space, reference), 20.0);
        assert_eq!(Placement::TopLeft.max_width(&space, reference), 130.0);
        assert_eq!(Placement::BottomCenter.max_width(&space, reference), 140.0);
        assert_eq!(Placement::TopRight.max_width(&space, reference), 120.0);
    }
}
