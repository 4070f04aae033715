// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_popover --heading-base-level=0

//! Understory Popover: choose where a floating element goes around its anchor.
//!
//! Given a popover (the overlay), a reference element, and a list of candidate
//! [`Placement`]s, this crate measures the space around the reference, scores
//! every candidate against that space and the popover's size, and returns the
//! winner as an anchor point plus the room available there.
//!
//! It does not move or draw anything. Callers position the overlay at the
//! returned point using the returned [`PositionMode`], and call again whenever
//! layout changes (resize, scroll, content updates).
//!
//! ## Host
//!
//! Layout state is read through the [`Host`] trait: bounding boxes in viewport
//! coordinates, computed `position` and `overflow`, scroll offsets and sizes,
//! and the element hierarchy. [`Scene`] is a small in-memory host for headless
//! use and tests; a browser binding would implement [`Host`] over the DOM.
//!
//! ## Algorithm
//!
//! 1. The reference is `fixed` if it or an ancestor below the body has
//!    `position: fixed`; otherwise the popover is positioned `absolute`.
//! 2. Space budgets ([`Space`]) are measured against the viewport for fixed
//!    references or [`BoundTarget::Viewport`], and against the full scrollable
//!    extent of the reference's scroll context for [`BoundTarget::Window`].
//! 3. Each candidate gets a maximum width and height
//!    ([`Placement::max_width`], [`Placement::max_height`]).
//! 4. Every pair of candidates is compared per axis and points accumulate
//!    ([`rank_candidates`]). The highest score wins; ties keep the configured
//!    order.
//! 5. The anchor is the reference's top-left corner, moved into the
//!    popover's coordinate space and shifted to the edge or corner the
//!    winning placement names.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_popover::{
//!     BoundTarget, Host, Options, Placement, Scene, compute_placement,
//! };
//!
//! let mut scene = Scene::new(Size::new(800.0, 600.0));
//! let body = scene.body();
//! let button = scene.insert(body, Rect::new(50.0, 100.0, 250.0, 140.0));
//! let tooltip = scene.insert(body, Rect::ZERO);
//!
//! let options = Options::new().with_bound_target(BoundTarget::Viewport);
//! let result = compute_placement(&scene, tooltip, button, &options).unwrap();
//!
//! // More room below than above.
//! assert_eq!(result.placement, Placement::BottomCenter);
//! assert_eq!((result.left, result.top), (150.0, 140.0));
//! assert_eq!(result.max_height, 460.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `serde`: serialize [`Placement`], [`BoundTarget`], [`PositionMode`], and
//!   [`PlacementResult`].
//! - `tracing`: emit a debug span per computation and an event for the winner.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod ancestors;
mod compute;
mod error;
mod host;
mod measure;
mod scene;
mod score;
mod settings;
mod types;

pub use compute::{PlacementDebugInfo, compute_placement, compute_placement_debug};
pub use error::{Argument, ParseBoundTargetError, ParsePlacementError, PlacementError};
pub use host::{CssPosition, Host, Overflow, OverflowStyle, Parent};
pub use scene::{Scene, SceneElement};
pub use score::rank_candidates;
pub use settings::{Options, Settings};
pub use types::{
    Align, BoundTarget, Candidate, Placement, PlacementResult, PositionMode, Side, Space,
};
