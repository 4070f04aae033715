// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upward walks over the host hierarchy.
//!
//! Both walks stop at a node without a parent, so a detached subtree always
//! terminates. The host hierarchy is assumed to be acyclic.

use kurbo::Vec2;

use crate::host::{CssPosition, Host, Parent};

/// Whether `node` or one of its ancestors below the body is `position: fixed`.
pub(crate) fn is_fixed<H: Host>(host: &H, node: H::Element) -> bool {
    let body = host.body();
    let mut current = node;
    loop {
        if current == body {
            return false;
        }
        if host.position(current) == CssPosition::Fixed {
            return true;
        }
        match host.parent(current) {
            Some(Parent::Element(parent)) => current = parent,
            Some(Parent::Document) | None => return false,
        }
    }
}

/// Nearest ancestor of `node` that scrolls its content.
///
/// Reaching the document yields the body if the body itself is scrolled, and
/// the root element otherwise. A walk that runs out of parents returns the
/// last node it reached.
pub(crate) fn scroll_context<H: Host>(host: &H, node: H::Element) -> H::Element {
    let mut current = node;
    loop {
        match host.parent(current) {
            None => return current,
            Some(Parent::Document) => {
                let body = host.body();
                return if host.scroll_offset(body) == Vec2::ZERO {
                    host.document_element()
                } else {
                    body
                };
            }
            Some(Parent::Element(parent)) => {
                if host.overflow(parent).scrolls() {
                    return parent;
                }
                current = parent;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{is_fixed, scroll_context};
    use crate::host::{CssPosition, Host, Overflow, OverflowStyle};
    use crate::scene::Scene;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn fixed_ancestor_is_found() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let body = scene.body();
        let bar = scene.insert(body, rect());
        let item = scene.insert(bar, rect());
        assert!(!is_fixed(&scene, item), "nothing is fixed yet");

        scene.set_position(bar, CssPosition::Fixed);
        assert!(is_fixed(&scene, item), "fixed parent");
        assert!(is_fixed(&scene, bar), "the node itself counts");
    }

    #[test]
    fn fixed_walk_stops_at_body() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let body = scene.body();
        let root = scene.document_element();
        scene.set_position(body, CssPosition::Fixed);
        scene.set_position(root, CssPosition::Fixed);
        let item = scene.insert(body, rect());
        assert!(!is_fixed(&scene, item), "body and above are never consulted");
    }

    #[test]
    fn fixed_walk_terminates_on_detached_node() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let lone = scene.detached(rect());
        let child = scene.insert(lone, rect());
        assert!(!is_fixed(&scene, child));
    }

    #[test]
    fn scroll_context_picks_nearest_scrolling_ancestor() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let body = scene.body();
        let outer = scene.insert(body, rect());
        let pane = scene.insert(outer, rect());
        let wrapper = scene.insert(pane, rect());
        let item = scene.insert(wrapper, rect());
        scene.set_overflow(outer, OverflowStyle::uniform(Overflow::Scroll));
        scene.set_overflow(
            pane,
            OverflowStyle {
                overflow_y: Overflow::Auto,
                ..OverflowStyle::default()
            },
        );
        assert_eq!(scroll_context(&scene, item), pane);
        assert_eq!(scroll_context(&scene, pane), outer);
    }

    #[test]
    fn hidden_overflow_is_not_a_scroll_context() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let body = scene.body();
        let clip = scene.insert(body, rect());
        scene.set_overflow(clip, OverflowStyle::uniform(Overflow::Hidden));
        let item = scene.insert(clip, rect());
        assert_eq!(scroll_context(&scene, item), scene.document_element());
    }

    #[test]
    fn document_context_prefers_scrolled_body() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let body = scene.body();
        let item = scene.insert(body, rect());
        assert_eq!(scroll_context(&scene, item), scene.document_element());

        scene.set_scroll_offset(body, Vec2::new(0.0, 40.0));
        assert_eq!(scroll_context(&scene, item), body);
    }

    #[test]
    fn detached_walk_returns_last_node() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let lone = scene.detached(rect());
        assert_eq!(scroll_context(&scene, lone), lone);
        let child = scene.insert(lone, rect());
        assert_eq!(scroll_context(&scene, child), lone);
    }
}
