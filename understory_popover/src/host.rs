// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host environment: live layout state read by the placement computation.
//!
//! A [`Host`] answers the handful of questions a browser-like layout engine
//! can answer about an element: its bounding box, computed `position` and
//! `overflow`, scroll state, and where it sits in the element hierarchy.
//! The computation only reads; it never mutates the host.

use kurbo::{Rect, Size, Vec2};

/// The parent of a node in the host hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parent<E> {
    /// An element parent.
    Element(E),
    /// The document node itself; the parent of the document element.
    Document,
}

/// Computed value of the CSS `position` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CssPosition {
    /// `static`
    #[default]
    Static,
    /// `relative`
    Relative,
    /// `absolute`
    Absolute,
    /// `fixed`
    Fixed,
    /// `sticky`
    Sticky,
}

/// Computed value of a CSS `overflow` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// `visible`
    #[default]
    Visible,
    /// `hidden`
    Hidden,
    /// `clip`
    Clip,
    /// `scroll`
    Scroll,
    /// `auto`
    Auto,
}

impl Overflow {
    /// Whether this value lets the element scroll its own content.
    #[must_use]
    pub const fn scrolls(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// The `overflow`, `overflow-x`, and `overflow-y` values of an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OverflowStyle {
    /// `overflow`
    pub overflow: Overflow,
    /// `overflow-x`
    pub overflow_x: Overflow,
    /// `overflow-y`
    pub overflow_y: Overflow,
}

impl OverflowStyle {
    /// The same value on every property.
    #[must_use]
    pub const fn uniform(overflow: Overflow) -> Self {
        Self {
            overflow,
            overflow_x: overflow,
            overflow_y: overflow,
        }
    }

    /// True if any of the three properties makes the element a scroll context.
    #[must_use]
    pub const fn scrolls(&self) -> bool {
        self.overflow.scrolls() || self.overflow_x.scrolls() || self.overflow_y.scrolls()
    }
}

/// Read-only access to a host's layout state.
///
/// Handles are cheap copies; a handle may refer to a non-element node (for
/// example a text node), which [`Host::is_element`] reports.
///
/// All rectangles are in viewport coordinates, as returned by a browser's
/// `getBoundingClientRect`.
pub trait Host {
    /// Handle to a node.
    type Element: Copy + Eq;

    /// Size of the window's layout viewport, or `None` when there is no window.
    fn inner_size(&self) -> Option<Size>;

    /// The `<body>` element.
    fn body(&self) -> Self::Element;

    /// The root (`<html>`) element.
    fn document_element(&self) -> Self::Element;

    /// Whether `node` is an element.
    fn is_element(&self, node: Self::Element) -> bool;

    /// Parent of `node`, or `None` for a detached subtree root.
    fn parent(&self, node: Self::Element) -> Option<Parent<Self::Element>>;

    /// Border box of `node` in viewport coordinates.
    fn bounding_rect(&self, node: Self::Element) -> Rect;

    /// Computed `position` of `node`.
    fn position(&self, node: Self::Element) -> CssPosition;

    /// Computed overflow properties of `node`.
    fn overflow(&self, node: Self::Element) -> OverflowStyle;

    /// Current scroll offset of `node` (`scrollLeft`, `scrollTop`).
    fn scroll_offset(&self, node: Self::Element) -> Vec2;

    /// Total scrollable size of `node` (`scrollWidth`, `scrollHeight`).
    fn scroll_size(&self, node: Self::Element) -> Size;

    /// Inner size of `node` excluding scrollbars (`clientWidth`, `clientHeight`).
    fn client_size(&self, node: Self::Element) -> Size;

    /// The element `node` is offset-positioned against, if any.
    fn offset_parent(&self, node: Self::Element) -> Option<Self::Element>;
}
