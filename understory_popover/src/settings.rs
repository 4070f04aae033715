// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller options and the settings resolved from them.

use alloc::vec::Vec;

use kurbo::Size;
use smallvec::SmallVec;

use crate::types::{BoundTarget, Placement};

/// Caller configuration for [`compute_placement`](crate::compute_placement).
///
/// Every field is optional. [`Settings::resolve`] fills in the defaults.
///
/// ```
/// use kurbo::Size;
/// use understory_popover::{BoundTarget, Options, Placement};
///
/// let options = Options::new()
///     .with_bound_target(BoundTarget::Viewport)
///     .with_placements([Placement::RightCenter, Placement::LeftCenter])
///     .with_popover_size(Size::new(240.0, 120.0));
/// assert_eq!(options.placements.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Options {
    /// Extent used to measure available space. Defaults to [`BoundTarget::Window`].
    pub bound_target: Option<BoundTarget>,
    /// Candidate placements in priority order. Empty means [`Placement::DEFAULT`].
    pub placements: Vec<Placement>,
    /// Size of the popover. When absent it is measured from the overlay's box.
    pub popover_size: Option<Size>,
}

impl Options {
    /// Options with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bound target.
    #[must_use]
    pub fn with_bound_target(mut self, target: BoundTarget) -> Self {
        self.bound_target = Some(target);
        self
    }

    /// Set the bound target by name.
    ///
    /// Unknown names clear the setting so the default applies.
    #[must_use]
    pub fn with_bound_target_name(mut self, name: &str) -> Self {
        self.bound_target = name.parse().ok();
        #[cfg(feature = "tracing")]
        if self.bound_target.is_none() {
            tracing::trace!(name, "ignoring unknown bound target");
        }
        self
    }

    /// Use a single placement.
    #[must_use]
    pub fn with_placement(self, placement: Placement) -> Self {
        self.with_placements([placement])
    }

    /// Use these placements, in priority order.
    #[must_use]
    pub fn with_placements(mut self, placements: impl IntoIterator<Item = Placement>) -> Self {
        self.placements = placements.into_iter().collect();
        self
    }

    /// Use the placements named in `names`, in order.
    ///
    /// Unknown names are dropped. If none are recognized, the list is left
    /// empty and the default placements apply.
    #[must_use]
    pub fn with_placement_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.placements = names
            .into_iter()
            .filter_map(|name| match name.parse() {
                Ok(placement) => Some(placement),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(name, "ignoring unknown placement");
                    None
                }
            })
            .collect();
        self
    }

    /// Use an explicit popover size instead of measuring the overlay.
    #[must_use]
    pub fn with_popover_size(mut self, size: Size) -> Self {
        self.popover_size = Some(size);
        self
    }
}

/// Fully resolved configuration.
///
/// `placements` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Extent used to measure available space.
    pub bound_target: BoundTarget,
    /// Candidate placements in priority order.
    pub placements: SmallVec<[Placement; 4]>,
}

impl Settings {
    /// Apply defaults to `options`.
    #[must_use]
    pub fn resolve(options: &Options) -> Self {
        let placements = if options.placements.is_empty() {
            SmallVec::from_slice(&Placement::DEFAULT)
        } else {
            SmallVec::from_slice(&options.placements)
        };
        Self {
            bound_target: options.bound_target.unwrap_or_default(),
            placements,
        }
    }

    /// The highest-priority placement.
    #[must_use]
    pub fn primary(&self) -> Placement {
        self.placements
            .first()
            .copied()
            .unwrap_or(Placement::DEFAULT[0])
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Options::default())
    }
}
