// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain numeric readings taken from a [`Host`].

use kurbo::{Size, Vec2};

use crate::host::Host;

/// Viewport size: the larger of the root element's client size and the
/// window's inner size, per axis.
pub(crate) fn viewport_size<H: Host>(host: &H, inner: Size) -> Size {
    let client = host.client_size(host.document_element());
    Size::new(client.width.max(inner.width), client.height.max(inner.height))
}

/// Scroll offset of `node`.
///
/// The body and the root element share the document's scroll position, which
/// engines report on one or the other; the larger of the two wins per axis.
pub(crate) fn scroll_offset<H: Host>(host: &H, node: H::Element) -> Vec2 {
    let body = host.body();
    let root = host.document_element();
    if node == body || node == root {
        let a = host.scroll_offset(root);
        let b = host.scroll_offset(body);
        Vec2::new(a.x.max(b.x), a.y.max(b.y))
    } else {
        host.scroll_offset(node)
    }
}

/// The element whose box is the coordinate origin for `node`.
///
/// Falls back to the root element when there is no offset parent or when it
/// is the body.
pub(crate) fn offset_parent<H: Host>(host: &H, node: H::Element) -> H::Element {
    match host.offset_parent(node) {
        Some(parent) if parent != host.body() => parent,
        _ => host.document_element(),
    }
}
