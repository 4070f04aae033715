// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise scoring of candidate placements.

use core::cmp::Ordering;

use kurbo::Size;

use crate::types::Candidate;

/// Run the pairwise tournament over `candidates` and sort them by score.
///
/// Every unordered pair is compared once, per axis:
/// - If the popover's extent on that axis is known (non-zero), each candidate
///   whose maximum meets it gains a point.
/// - Otherwise, or when neither candidate meets it, the larger maximum gains a
///   point and an exact tie gives both a point.
///
/// Afterwards the slice is sorted by descending score. The sort is stable, so
/// candidates with equal scores keep their configured order and the first
/// element is the winner.
pub fn rank_candidates(candidates: &mut [Candidate], popover: Size) {
    for i in 0..candidates.len() {
        let (head, tail) = candidates.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail {
            compare(a, b, popover);
        }
    }
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

fn compare(a: &mut Candidate, b: &mut Candidate, popover: Size) {
    let (wa, wb) = axis_points(a.max_width, b.max_width, popover.width);
    let (ha, hb) = axis_points(a.max_height, b.max_height, popover.height);
    a.score += wa + ha;
    b.score += wb + hb;
}

fn axis_points(a: f64, b: f64, required: f64) -> (u32, u32) {
    if is_known(required) {
        let (fits_a, fits_b) = (a >= required, b >= required);
        if fits_a || fits_b {
            return (u32::from(fits_a), u32::from(fits_b));
        }
    }
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => (1, 0),
        Some(Ordering::Less) => (0, 1),
        // Equal, or incomparable.
        _ => (1, 1),
    }
}

fn is_known(extent: f64) -> bool {
    extent != 0.0 && !extent.is_nan()
}
