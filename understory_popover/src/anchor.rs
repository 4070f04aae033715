// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate a winning placement into an anchor point.

use kurbo::{Point, Rect, Size, Vec2};

use crate::ancestors;
use crate::host::Host;
use crate::measure;
use crate::types::{Align, Placement, PositionMode, Side};

/// The reference's top-left corner in the popover's coordinate space.
///
/// Fixed popovers use viewport coordinates directly. Otherwise the corner is
/// made relative to the overlay's offset parent, and the overlay's scroll
/// context offset is added back unless that context is the document.
pub(crate) fn origin<H: Host>(
    host: &H,
    overlay: H::Element,
    reference: Rect,
    mode: PositionMode,
) -> Point {
    let corner = reference.origin();
    if mode == PositionMode::Fixed {
        return corner;
    }

    let parent_box = host.bounding_rect(measure::offset_parent(host, overlay));
    let mut origin = corner - parent_box.origin().to_vec2();

    let context = ancestors::scroll_context(host, overlay);
    if context != host.body() && context != host.document_element() {
        origin += measure::scroll_offset(host, context);
    }
    origin
}

/// Offset from the reference's top-left corner to the anchor of `placement`.
pub(crate) fn shift(placement: Placement, reference: Size) -> Vec2 {
    let x = match (placement.side(), placement.align()) {
        (Side::Right, _) => reference.width,
        (Side::Left, _) => 0.0,
        (Side::Top | Side::Bottom, Align::Start) => 0.0,
        (Side::Top | Side::Bottom, Align::Center) => reference.width / 2.0,
        (Side::Top | Side::Bottom, Align::End) => reference.width,
    };
    let y = match (placement.side(), placement.align()) {
        (Side::Bottom, _) => reference.height,
        (Side::Top, _) => 0.0,
        (Side::Left | Side::Right, Align::Start) => 0.0,
        (Side::Left | Side::Right, Align::Center) => reference.height / 2.0,
        (Side::Left | Side::Right, Align::End) => reference.height,
    };
    Vec2::new(x, y)
}
