// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame description and fixed timber/stock dimensions
//!
//! All dimensions are millimetres. The length axis (L) is the pod span that
//! bearers subdivide; the width axis (W) is the bearer length, which every
//! panel spans completely.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Thickness of each edge fascia
pub const FASCIA_THICKNESS: f64 = 45.0;

/// Thickness of each bearer
pub const BEARER_THICKNESS: f64 = 90.0;

/// Longest single piece a stock sheet can supply along W
pub const STOCK_MAX_RUN: f64 = 2400.0;

/// Most stock pieces a single run along W may be built from
pub const MAX_PIECES_PER_RUN: u32 = 100;

/// Long edge of a stock sheet
pub const STOCK_LONG_EDGE: f64 = 2400.0;

/// Short edge of a stock sheet
pub const STOCK_SHORT_EDGE: f64 = 1200.0;

/// Which sheet edge runs along L when covering the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SheetOrientation {
    /// W fits within the short edge, so the sheet is turned and its long
    /// edge spans along L.
    Rotated,
    /// W exceeds the short edge; the short edge spans along L.
    Standard,
}

impl SheetOrientation {
    /// Sheet dimension available along L in this orientation.
    pub fn reach(self) -> f64 {
        match self {
            SheetOrientation::Rotated => STOCK_LONG_EDGE,
            SheetOrientation::Standard => STOCK_SHORT_EDGE,
        }
    }
}

/// Immutable frame input
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameSpec {
    /// Dimension subdivided by bearers (L)
    pub length_axis: f64,
    /// Dimension each panel fully spans (W)
    pub width_axis: f64,
    /// Number of bearers, fascias excluded
    pub bearer_count: u32,
}

impl FrameSpec {
    pub fn new(length_axis: f64, width_axis: f64, bearer_count: u32) -> Self {
        Self {
            length_axis,
            width_axis,
            bearer_count,
        }
    }

    /// Reject dimensions and counts that cannot describe a frame
    pub fn validate(&self) -> Result<()> {
        if !self.length_axis.is_finite() || self.length_axis <= 0.0 {
            return Err(Error::InvalidFrame(format!(
                "length axis must be positive, got {}",
                self.length_axis
            )));
        }
        if !self.width_axis.is_finite() || self.width_axis <= 0.0 {
            return Err(Error::InvalidFrame(format!(
                "width axis must be positive, got {}",
                self.width_axis
            )));
        }
        if (self.width_axis / STOCK_MAX_RUN).ceil() > f64::from(MAX_PIECES_PER_RUN) {
            return Err(Error::InvalidFrame(format!(
                "width axis of {} mm needs more than {} stock pieces per run",
                self.width_axis, MAX_PIECES_PER_RUN
            )));
        }
        if self.bearer_count < 2 {
            return Err(Error::InvalidFrame(format!(
                "at least 2 bearers are required, got {}",
                self.bearer_count
            )));
        }
        Ok(())
    }

    /// Sheet orientation is decided by W alone
    pub fn sheet_orientation(&self) -> SheetOrientation {
        if self.width_axis <= STOCK_SHORT_EDGE {
            SheetOrientation::Rotated
        } else {
            SheetOrientation::Standard
        }
    }

    /// Widest strip one stock sheet covers along L before a join is needed
    #[inline]
    pub fn stock_reach(&self) -> f64 {
        self.sheet_orientation().reach()
    }
}
