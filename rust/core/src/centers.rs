// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bearer centerline derivation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::{FrameSpec, BEARER_THICKNESS, FASCIA_THICKNESS};

/// Evenly spaced bearer centerlines along L
///
/// The outer bearers sit hard against the fascias, so the first and last
/// centers are mirror images of each other about the middle of L.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterSet {
    /// Center positions, first to last
    pub centers: Vec<f64>,
    /// Center-to-center distance
    pub spacing: f64,
    /// Clear space between adjacent bearer faces (negative when they overlap)
    pub gap: f64,
}

impl CenterSet {
    #[inline]
    pub fn first(&self) -> f64 {
        self.centers[0]
    }

    #[inline]
    pub fn last(&self) -> f64 {
        self.centers[self.centers.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// False when bearers touch or overlap their neighbours
    pub fn has_clearance(&self) -> bool {
        self.gap >= 0.0
    }

    /// Reject a set that was not derived from `frame`
    pub fn ensure_matches(&self, frame: &FrameSpec) -> Result<()> {
        if self.centers.is_empty() || self.centers.len() != frame.bearer_count as usize {
            return Err(Error::InvalidFrame(format!(
                "{} centers given for {} bearers",
                self.centers.len(),
                frame.bearer_count
            )));
        }
        let first = edge_to_first_center();
        let last = frame.length_axis - first;
        let tolerance = 1e-6 * frame.length_axis.max(1.0);
        let spacing = (last - first) / (self.centers.len() - 1).max(1) as f64;
        if (self.first() - first).abs() > tolerance
            || (self.last() - last).abs() > tolerance
            || (self.spacing - spacing).abs() > tolerance
        {
            return Err(Error::InvalidFrame(format!(
                "centers {:.1}..{:.1} do not fit a {} mm frame",
                self.first(),
                self.last(),
                frame.length_axis
            )));
        }
        Ok(())
    }

    /// Largest center strictly after `after` and no further than `limit`,
    /// with its 0-based bearer index.
    pub fn last_within(&self, after: f64, limit: f64) -> Option<(usize, f64)> {
        self.centers
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, c)| c > after && c <= limit)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Distance from the frame edge to the outermost bearer centerline
#[inline]
pub fn edge_to_first_center() -> f64 {
    FASCIA_THICKNESS + BEARER_THICKNESS / 2.0
}

/// Derive bearer centerlines for a frame
///
/// Spacing is reported as computed, even when it is zero or negative.
pub fn derive_centers(frame: &FrameSpec) -> Result<CenterSet> {
    frame.validate()?;

    let first = edge_to_first_center();
    let last = frame.length_axis - edge_to_first_center();
    let spacing = (last - first) / f64::from(frame.bearer_count - 1);
    let gap = spacing - BEARER_THICKNESS;

    let centers = (0..frame.bearer_count)
        .map(|i| first + f64::from(i) * spacing)
        .collect();

    tracing::debug!(
        bearers = frame.bearer_count,
        spacing,
        gap,
        "derived bearer centers"
    );

    Ok(CenterSet {
        centers,
        spacing,
        gap,
    })
}
