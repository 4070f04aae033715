// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement entry points.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::anchor;
use crate::ancestors;
use crate::error::{Argument, PlacementError};
use crate::host::Host;
use crate::measure;
use crate::score::rank_candidates;
use crate::settings::{Options, Settings};
use crate::types::{BoundTarget, Candidate, PlacementResult, PositionMode, Space};

/// Everything computed while placing a popover.
///
/// Returned by [`compute_placement_debug`].
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementDebugInfo {
    /// The result [`compute_placement`] would return.
    pub result: PlacementResult,
    /// Space around the reference, or `None` when the host had no window.
    pub space: Option<Space>,
    /// All candidates with their scores, winner first.
    pub candidates: Vec<Candidate>,
}

/// Compute where to place `overlay` relative to `reference`.
///
/// Reads the live state of `host` once and does not retain anything; calling
/// again with an unchanged host returns an identical result.
///
/// # Errors
///
/// Returns [`PlacementError::InvalidArgument`] if either handle is not an
/// element. A host without a window is not an error: the result is zeroed
/// and uses the first configured placement.
pub fn compute_placement<H: Host>(
    host: &H,
    overlay: H::Element,
    reference: H::Element,
    options: &Options,
) -> Result<PlacementResult, PlacementError> {
    compute_placement_debug(host, overlay, reference, options).map(|info| info.result)
}

/// Like [`compute_placement`], but also returns the space budget and the
/// ranked candidate list.
///
/// # Errors
///
/// See [`compute_placement`].
pub fn compute_placement_debug<H: Host>(
    host: &H,
    overlay: H::Element,
    reference: H::Element,
    options: &Options,
) -> Result<PlacementDebugInfo, PlacementError> {
    if !host.is_element(overlay) {
        return Err(PlacementError::InvalidArgument(Argument::Overlay));
    }
    if !host.is_element(reference) {
        return Err(PlacementError::InvalidArgument(Argument::Reference));
    }

    let settings = Settings::resolve(options);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "popover.compute",
        bound_target = %settings.bound_target,
        candidates = settings.placements.len()
    )
    .entered();

    let Some(inner) = host.inner_size() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("no window; returning zeroed placement");
        return Ok(PlacementDebugInfo {
            result: PlacementResult::fallback(settings.primary()),
            space: None,
            candidates: Vec::new(),
        });
    };

    let mode = if ancestors::is_fixed(host, reference) {
        PositionMode::Fixed
    } else {
        PositionMode::Absolute
    };

    let reference_box = host.bounding_rect(reference);
    let reference_size = reference_box.size();
    let origin = anchor::origin(host, overlay, reference_box, mode);

    let space = match (mode, settings.bound_target) {
        (PositionMode::Fixed, _) | (_, BoundTarget::Viewport) => {
            Space::in_viewport(reference_box, measure::viewport_size(host, inner))
        }
        (PositionMode::Absolute, BoundTarget::Window) => {
            let context = ancestors::scroll_context(host, reference);
            Space::in_scroll_context(
                reference_box,
                measure::scroll_offset(host, context),
                host.scroll_size(context),
            )
        }
    };

    let popover = options
        .popover_size
        .unwrap_or_else(|| host.bounding_rect(overlay).size());

    let mut candidates: SmallVec<[Candidate; 4]> = settings
        .placements
        .iter()
        .map(|&placement| Candidate::measure(placement, &space, reference_size))
        .collect();
    rank_candidates(&mut candidates, popover);

    let winner = candidates
        .first()
        .copied()
        .unwrap_or_else(|| Candidate::measure(settings.primary(), &space, reference_size));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        placement = %winner.placement,
        score = winner.score,
        position = %mode,
        "popover placement selected"
    );

    let anchor = origin + anchor::shift(winner.placement, reference_size);
    Ok(PlacementDebugInfo {
        result: PlacementResult {
            position: mode,
            placement: winner.placement,
            top: anchor.y,
            left: anchor.x,
            reference_width: reference_size.width,
            reference_height: reference_size.height,
            max_width: winner.max_width,
            max_height: winner.max_height,
        },
        space: Some(space),
        candidates: candidates.into_vec(),
    })
}
