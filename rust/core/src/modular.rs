// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Modular layout: every join on a bearer centerline
//!
//! The end panels cover a fascia, the outer bearer and the run to the next
//! centerline; everything in between is one spacing wide. This keeps the
//! number of distinct sizes to at most two per stock piece length, which
//! suits cutting from offcuts.

use crate::centers::CenterSet;
use crate::error::{Error, Result};
use crate::frame::FrameSpec;
use crate::panel::{Joint, Panel, PanelKind};
use crate::split::Run;

/// Logical (unsplit) modular panels along L, with their widths
fn logical_runs(frame: &FrameSpec, centers: &CenterSet) -> Vec<Run> {
    let n = frame.bearer_count;

    if n == 2 {
        return vec![Run {
            strip: 1,
            position: 0.0,
            width: frame.length_axis,
            kind: PanelKind::FullSpan,
            joint: Joint::Edge,
        }];
    }

    let end_width = centers.first() + centers.spacing;
    let mid_qty = n.saturating_sub(3);
    let (start_kind, end_kind) = if n == 3 {
        (PanelKind::Half, PanelKind::Half)
    } else {
        (PanelKind::Start, PanelKind::End)
    };

    let mut runs = Vec::with_capacity(mid_qty as usize + 2);
    let mut position = 0.0;

    runs.push(Run {
        strip: 1,
        position,
        width: end_width,
        kind: start_kind,
        joint: Joint::Bearer(2),
    });
    position += end_width;

    for i in 0..mid_qty {
        runs.push(Run {
            strip: i + 2,
            position,
            width: centers.spacing,
            kind: PanelKind::Mid,
            joint: Joint::Bearer(i as usize + 3),
        });
        position += centers.spacing;
    }

    runs.push(Run {
        strip: mid_qty + 2,
        position,
        width: end_width,
        kind: end_kind,
        joint: Joint::Edge,
    });

    runs
}

/// Partition L into modular panels, each split into stock lengths along W
pub fn partition_modular(frame: &FrameSpec, centers: &CenterSet) -> Result<Vec<Panel>> {
    frame.validate()?;
    centers.ensure_matches(frame)?;
    if frame.bearer_count > 2 && centers.spacing <= 0.0 {
        return Err(Error::InvalidFrame(format!(
            "bearer spacing must be positive for {} bearers, got {:.1}",
            frame.bearer_count, centers.spacing
        )));
    }

    let runs = logical_runs(frame, centers);
    let mut panels = Vec::with_capacity(runs.len() * 2);
    for run in runs {
        run.emit(frame.width_axis, &mut panels)?;
    }

    tracing::debug!(
        bearers = frame.bearer_count,
        panels = panels.len(),
        "modular layout"
    );

    Ok(panels)
}
