// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Which argument of [`compute_placement`](crate::compute_placement) was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Argument {
    /// The popover being placed.
    Overlay,
    /// The element the popover is placed against.
    Reference,
}

/// Error returned by [`compute_placement`](crate::compute_placement).
///
/// Unknown configuration names and a missing window are not errors; they
/// fall back to defaults instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementError {
    /// The host reported that the handle is not an element.
    InvalidArgument(Argument),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(Argument::Overlay) => {
                f.write_str("overlay argument should be an element")
            }
            Self::InvalidArgument(Argument::Reference) => {
                f.write_str("reference argument should be an element")
            }
        }
    }
}

impl core::error::Error for PlacementError {}

/// Error returned when parsing an unknown [`Placement`](crate::Placement) name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParsePlacementError;

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown placement name")
    }
}

impl core::error::Error for ParsePlacementError {}

/// Error returned when parsing an unknown [`BoundTarget`](crate::BoundTarget) name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseBoundTargetError;

impl fmt::Display for ParseBoundTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown bound target name")
    }
}

impl core::error::Error for ParseBoundTargetError {}
