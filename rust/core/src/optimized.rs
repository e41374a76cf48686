// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optimized layout: widest strips a stock sheet allows
//!
//! Works left to right along L. Each strip reaches as far as the sheet
//! allows and then falls back to the last bearer centerline inside that
//! reach, so every join is supported. The final strip runs to the frame
//! edge. Greedy, so it is not guaranteed to minimise the sheet count.

use crate::centers::CenterSet;
use crate::error::{Error, Result};
use crate::frame::FrameSpec;
use crate::panel::{Joint, Panel, PanelKind};
use crate::split::Run;

/// Round to 2 decimal places (0.01 mm)
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Partition L into full-sheet strips snapped to bearer centerlines
pub fn partition_optimized(frame: &FrameSpec, centers: &CenterSet) -> Result<Vec<Panel>> {
    frame.validate()?;
    centers.ensure_matches(frame)?;

    let span = frame.length_axis;
    let reach = frame.stock_reach();
    let mut panels = Vec::new();
    let mut position = 0.0;
    let mut strip = 1u32;

    while position < span {
        let target = round2(position + reach);

        let (width, joint, next) = if target >= span {
            (span - position, Joint::Edge, span)
        } else {
            let (index, snap) = centers
                .last_within(position, target)
                .ok_or(Error::SpacingTooWide { position, reach })?;
            (snap - position, Joint::Bearer(index + 1), snap)
        };

        Run {
            strip,
            position,
            width,
            kind: PanelKind::Strip,
            joint,
        }
        .emit(frame.width_axis, &mut panels)?;

        if joint == Joint::Edge {
            break;
        }
        // Land exactly on the snapped centerline so it can't be chosen again
        position = next;
        strip += 1;
    }

    tracing::debug!(
        reach,
        strips = strip,
        panels = panels.len(),
        "optimized layout"
    );

    Ok(panels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centers::derive_centers;
    use approx::assert_relative_eq;

    fn layout(l: f64, w: f64, n: u32) -> Result<Vec<Panel>> {
        let frame = FrameSpec::new(l, w, n);
        let centers = derive_centers(&frame).unwrap();
        partition_optimized(&frame, &centers)
    }

    #[test]
    fn seven_bearer_pod_snaps_to_bearers_three_and_five() {
        let panels = layout(3504.0, 3114.0, 7).unwrap();
        let strips: Vec<&Panel> = panels.iter().filter(|p| p.part == 1).collect();

        assert_eq!(strips.len(), 3);
        assert_eq!(strips[0].width, 1198.0);
        assert_eq!(strips[0].joint, Joint::Bearer(3));
        assert_eq!(strips[1].position, 1198.0);
        assert_eq!(strips[1].width, 1108.0);
        assert_eq!(strips[1].joint, Joint::Bearer(5));
        assert_eq!(strips[2].width, 1198.0);
        assert_eq!(strips[2].joint, Joint::Edge);

        assert_eq!(panels.len(), 6);
        assert!(panels
            .iter()
            .filter(|p| p.part == 2)
            .all(|p| p.length == 714.0 && p.joint == Joint::Extension));
    }

    #[test]
    fn narrow_width_rotates_the_sheet() {
        let panels = layout(3504.0, 1000.0, 7).unwrap();
        let widths: Vec<f64> = panels.iter().map(|p| p.width).collect();
        // reach 2400: snap at 2306, then 1198 to the edge
        assert_eq!(widths, vec![2306.0, 1198.0]);
        assert!(panels.iter().all(|p| p.length == 1000.0));
    }

    #[test]
    fn frame_within_reach_is_one_strip() {
        let panels = layout(1100.0, 2000.0, 3).unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].width, 1100.0);
        assert_eq!(panels[0].joint, Joint::Edge);
    }

    #[test]
    fn sparse_bearers_are_infeasible() {
        let err = layout(10_000.0, 900.0, 2).unwrap_err();
        assert!(matches!(err, Error::SpacingTooWide { .. }));
        assert!(err.to_string().contains("Add more bearers"));
    }

    #[test]
    fn rejects_mismatched_or_empty_centers() {
        let frame = FrameSpec::new(3504.0, 3114.0, 7);
        let other = derive_centers(&FrameSpec::new(4000.0, 3114.0, 7)).unwrap();
        assert!(matches!(
            partition_optimized(&frame, &other),
            Err(Error::InvalidFrame(_))
        ));

        let empty = CenterSet {
            centers: Vec::new(),
            spacing: 554.0,
            gap: 464.0,
        };
        assert!(matches!(
            partition_optimized(&frame, &empty),
            Err(Error::InvalidFrame(_))
        ));
    }

    #[test]
    fn fractional_spacing_does_not_stall() {
        // spacing 4000/6 leaves centers off the 0.01 mm grid
        let panels = layout(4180.0, 900.0, 7).unwrap();
        let total: f64 = panels.iter().map(|p| p.width).sum();
        assert_relative_eq!(total, 4180.0, epsilon = 1e-9);
        assert!(panels.iter().all(|p| p.width > 1.0));
    }

    #[test]
    fn strips_cover_the_span_with_legal_joins() {
        for n in 8..20 {
            let frame = FrameSpec::new(7777.0, 1500.0, n);
            let centers = derive_centers(&frame).unwrap();
            let panels = partition_optimized(&frame, &centers).unwrap();
            let strips: Vec<&Panel> = panels.iter().filter(|p| p.part == 1).collect();

            let total: f64 = strips.iter().map(|p| p.width).sum();
            assert_relative_eq!(total, 7777.0, epsilon = 1e-6);

            for strip in &strips[..strips.len() - 1] {
                assert!(strip.width <= frame.stock_reach() + 0.01);
                assert!(centers
                    .centers
                    .iter()
                    .any(|c| (c - strip.end_position()).abs() < 1e-6));
            }
        }
    }
}
