// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Host`] for headless use and tests.
//!
//! [`Scene`] stores each node's viewport-space box and the few computed style
//! values placement depends on. It does no layout: callers write the boxes
//! their own layout produced, and keep them up to date when things scroll.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::host::{CssPosition, Host, OverflowStyle, Parent};

/// Handle to a node in a [`Scene`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SceneElement(u32);

impl SceneElement {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Element,
    Text,
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<Parent<SceneElement>>,
    rect: Rect,
    position: CssPosition,
    overflow: OverflowStyle,
    scroll_offset: Vec2,
    scroll_size: Size,
    client_size: Size,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<Parent<SceneElement>>, rect: Rect) -> Self {
        Self {
            kind,
            parent,
            rect,
            position: CssPosition::Static,
            overflow: OverflowStyle::default(),
            scroll_offset: Vec2::ZERO,
            scroll_size: rect.size(),
            client_size: rect.size(),
        }
    }
}

/// A retained tree of boxes that answers [`Host`] queries.
///
/// A new scene holds a document element sized to the viewport and an empty
/// body inside it.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_popover::{Host, Scene};
///
/// let mut scene = Scene::new(Size::new(800.0, 600.0));
/// let body = scene.body();
/// let button = scene.insert(body, Rect::new(50.0, 100.0, 250.0, 140.0));
/// assert_eq!(scene.bounding_rect(button).width(), 200.0);
/// ```
#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
    root: SceneElement,
    body: SceneElement,
    inner_size: Option<Size>,
}

impl Scene {
    /// Create a scene with a window of size `viewport`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let page = Rect::from_origin_size((0.0, 0.0), viewport);
        let mut scene = Self {
            nodes: Vec::new(),
            root: SceneElement(0),
            body: SceneElement(1),
            inner_size: Some(viewport),
        };
        scene.root = scene.push(Node::new(NodeKind::Element, Some(Parent::Document), page));
        scene.body = scene.push(Node::new(
            NodeKind::Element,
            Some(Parent::Element(scene.root)),
            page,
        ));
        scene
    }

    /// Create a scene without a window, as in a non-browser environment.
    #[must_use]
    pub fn without_window() -> Self {
        let mut scene = Self::new(Size::ZERO);
        scene.inner_size = None;
        scene
    }

    /// Set or clear the window's inner size.
    pub fn set_inner_size(&mut self, size: Option<Size>) {
        self.inner_size = size;
    }

    /// Append an element under `parent` with box `rect` (viewport coordinates).
    ///
    /// The element starts `position: static` with visible overflow, no scroll
    /// offset, and scroll and client sizes equal to its box.
    pub fn insert(&mut self, parent: SceneElement, rect: Rect) -> SceneElement {
        self.push(Node::new(
            NodeKind::Element,
            Some(Parent::Element(parent)),
            rect,
        ))
    }

    /// Create an element with no parent.
    pub fn detached(&mut self, rect: Rect) -> SceneElement {
        self.push(Node::new(NodeKind::Element, None, rect))
    }

    /// Append a text node under `parent`.
    pub fn text_node(&mut self, parent: SceneElement) -> SceneElement {
        self.push(Node::new(
            NodeKind::Text,
            Some(Parent::Element(parent)),
            Rect::ZERO,
        ))
    }

    /// Replace the box of `node`.
    pub fn set_rect(&mut self, node: SceneElement, rect: Rect) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.rect = rect;
        }
    }

    /// Set the computed `position` of `node`.
    pub fn set_position(&mut self, node: SceneElement, position: CssPosition) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.position = position;
        }
    }

    /// Set the computed overflow properties of `node`.
    pub fn set_overflow(&mut self, node: SceneElement, overflow: OverflowStyle) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.overflow = overflow;
        }
    }

    /// Set the scroll offset of `node`.
    ///
    /// Boxes of descendants are not moved; update them with [`Scene::set_rect`].
    pub fn set_scroll_offset(&mut self, node: SceneElement, offset: Vec2) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.scroll_offset = offset;
        }
    }

    /// Set the total scrollable size of `node`.
    pub fn set_scroll_size(&mut self, node: SceneElement, size: Size) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.scroll_size = size;
        }
    }

    /// Set the client size of `node`.
    pub fn set_client_size(&mut self, node: SceneElement, size: Size) {
        if let Some(n) = self.nodes.get_mut(node.idx()) {
            n.client_size = size;
        }
    }

    fn push(&mut self, node: Node) -> SceneElement {
        let id = SceneElement(
            u32::try_from(self.nodes.len()).unwrap_or(u32::MAX),
        );
        self.nodes.push(node);
        id
    }

    fn node(&self, node: SceneElement) -> Option<&Node> {
        self.nodes.get(node.idx())
    }
}

impl Host for Scene {
    type Element = SceneElement;

    fn inner_size(&self) -> Option<Size> {
        self.inner_size
    }

    fn body(&self) -> SceneElement {
        self.body
    }

    fn document_element(&self) -> SceneElement {
        self.root
    }

    fn is_element(&self, node: SceneElement) -> bool {
        self.node(node).is_some_and(|n| n.kind == NodeKind::Element)
    }

    fn parent(&self, node: SceneElement) -> Option<Parent<SceneElement>> {
        self.node(node).and_then(|n| n.parent)
    }

    fn bounding_rect(&self, node: SceneElement) -> Rect {
        self.node(node).map_or(Rect::ZERO, |n| n.rect)
    }

    fn position(&self, node: SceneElement) -> CssPosition {
        self.node(node).map_or(CssPosition::Static, |n| n.position)
    }

    fn overflow(&self, node: SceneElement) -> OverflowStyle {
        self.node(node).map_or(OverflowStyle::default(), |n| n.overflow)
    }

    fn scroll_offset(&self, node: SceneElement) -> Vec2 {
        self.node(node).map_or(Vec2::ZERO, |n| n.scroll_offset)
    }

    fn scroll_size(&self, node: SceneElement) -> Size {
        self.node(node).map_or(Size::ZERO, |n| n.scroll_size)
    }

    fn client_size(&self, node: SceneElement) -> Size {
        self.node(node).map_or(Size::ZERO, |n| n.client_size)
    }

    /// Nearest positioned ancestor, or the body.
    ///
    /// Fixed elements, the body, the root, and detached elements have none.
    fn offset_parent(&self, node: SceneElement) -> Option<SceneElement> {
        let n = self.node(node)?;
        if n.kind != NodeKind::Element
            || n.position == CssPosition::Fixed
            || node == self.body
            || node == self.root
        {
            return None;
        }
        let mut current = n.parent;
        while let Some(Parent::Element(id)) = current {
            if id == self.body {
                return Some(id);
            }
            let ancestor = self.node(id)?;
            if ancestor.position != CssPosition::Static {
                return Some(id);
            }
            current = ancestor.parent;
        }
        None
    }
}
