// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Complete cutting plan for one frame
//!
//! Derives centers once and runs both strategies on them independently.
//! An infeasible optimized layout does not prevent the modular one.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::centers::{derive_centers, CenterSet};
use crate::error::{Error, Result};
use crate::frame::FrameSpec;
use crate::modular::partition_modular;
use crate::optimized::partition_optimized;
use crate::panel::Panel;

/// Partitioning policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Fewest distinct sizes, every join on a bearer centerline
    Modular,
    /// Widest strips a stock sheet allows
    Optimized,
}

/// Non-fatal conditions a caller should surface
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Warning {
    /// Adjacent bearers touch or overlap
    NegativeGap { gap: f64 },
}

/// Panels for one strategy with their bill of materials
#[derive(Debug, Clone)]
pub struct Layout {
    pub strategy: Strategy,
    pub panels: Vec<Panel>,
    pub catalog: Catalog,
}

impl Layout {
    pub fn new(strategy: Strategy, panels: Vec<Panel>) -> Self {
        let catalog = Catalog::build(&panels);
        Self {
            strategy,
            panels,
            catalog,
        }
    }

    /// Sum of panel areas in mm²
    pub fn covered_area(&self) -> f64 {
        self.panels.iter().map(Panel::area).sum()
    }
}

/// Everything a presentation layer needs for one frame
#[derive(Debug, Clone)]
pub struct PlanOutput {
    pub frame: FrameSpec,
    pub centers: CenterSet,
    pub modular: Layout,
    /// Fails on its own when bearers are too far apart for a sheet
    pub optimized: Result<Layout>,
}

impl PlanOutput {
    pub fn spacing(&self) -> f64 {
        self.centers.spacing
    }

    pub fn gap(&self) -> f64 {
        self.centers.gap
    }

    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        if !self.centers.has_clearance() {
            warnings.push(Warning::NegativeGap {
                gap: self.centers.gap,
            });
        }
        warnings
    }
}

/// Compute both cutting strategies for a frame
///
/// Rejects frames that are invalid or too short to space their bearers.
pub fn compute_plan(frame: &FrameSpec) -> Result<PlanOutput> {
    let centers = derive_centers(frame)?;
    if centers.spacing <= 0.0 {
        return Err(Error::InvalidFrame(format!(
            "frame of {} mm is too short for {} bearers (spacing {:.1} mm)",
            frame.length_axis, frame.bearer_count, centers.spacing
        )));
    }

    let modular = Layout::new(Strategy::Modular, partition_modular(frame, &centers)?);
    let optimized =
        partition_optimized(frame, &centers).map(|panels| Layout::new(Strategy::Optimized, panels));

    if let Err(e) = &optimized {
        tracing::debug!(error = %e, "optimized layout unavailable");
    }
    if !centers.has_clearance() {
        tracing::warn!(gap = centers.gap, "bearers overlap");
    }

    Ok(PlanOutput {
        frame: *frame,
        centers,
        modular,
        optimized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_bearer_plan() {
        let plan = compute_plan(&FrameSpec::new(3504.0, 3114.0, 7)).unwrap();
        assert_eq!(plan.spacing(), 554.0);
        assert_eq!(plan.gap(), 464.0);
        assert!(plan.warnings().is_empty());

        let modular = &plan.modular;
        assert_eq!(modular.strategy, Strategy::Modular);
        assert_eq!(modular.catalog.len(), 4);
        assert_eq!(modular.catalog.total_pieces(), 12);

        let optimized = plan.optimized.as_ref().unwrap();
        assert_eq!(optimized.catalog.len(), 4);
        assert_eq!(optimized.catalog.entries()[0].label, "A");
        assert_eq!(optimized.catalog.entries()[0].width, 1198.0);
        assert_eq!(optimized.catalog.entries()[0].quantity, 2);
    }

    #[test]
    fn both_layouts_cover_the_same_area() {
        let plan = compute_plan(&FrameSpec::new(5200.0, 2750.0, 9)).unwrap();
        let expected = 5200.0 * 2750.0;
        assert!((plan.modular.covered_area() - expected).abs() < 1e-3);
        let optimized = plan.optimized.as_ref().unwrap();
        assert!((optimized.covered_area() - expected).abs() < 1e-3);
    }

    #[test]
    fn infeasible_optimized_keeps_modular() {
        let plan = compute_plan(&FrameSpec::new(10_000.0, 900.0, 2)).unwrap();
        assert_eq!(plan.modular.panels.len(), 1);
        assert!(matches!(plan.optimized, Err(Error::SpacingTooWide { .. })));
    }

    #[test]
    fn overlapping_bearers_warn() {
        let plan = compute_plan(&FrameSpec::new(600.0, 900.0, 6)).unwrap();
        assert_eq!(plan.warnings(), vec![Warning::NegativeGap { gap: -6.0 }]);
    }

    #[test]
    fn too_short_frame_is_rejected() {
        assert!(matches!(
            compute_plan(&FrameSpec::new(180.0, 900.0, 4)),
            Err(Error::InvalidFrame(_))
        ));
        assert!(matches!(
            compute_plan(&FrameSpec::new(3504.0, 3114.0, 0)),
            Err(Error::InvalidFrame(_))
        ));
    }
}
