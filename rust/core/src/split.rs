// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stock-length splitting along W
//!
//! A run longer than one stock sheet is built from several full-width
//! pieces stacked end to end. Only the first piece carries the strip's
//! joint along L; the others are extensions.

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::frame::{MAX_PIECES_PER_RUN, STOCK_MAX_RUN};
use crate::panel::{Joint, Panel, PanelKind};

/// Segment lengths for a run of `length`, each at most one stock run
///
/// Fails when the run needs more than [`MAX_PIECES_PER_RUN`] pieces.
pub fn split_run(length: f64) -> Result<SmallVec<[f64; 4]>> {
    if !length.is_finite() || length <= 0.0 {
        return Ok(SmallVec::new());
    }
    let count = (length / STOCK_MAX_RUN).ceil();
    if count > MAX_PIECES_PER_RUN as f64 {
        return Err(Error::InvalidFrame(format!(
            "a {} mm run needs more than {} stock pieces",
            length, MAX_PIECES_PER_RUN
        )));
    }

    let count = count as usize;
    let whole = (count - 1) as f64;
    let mut segments = SmallVec::with_capacity(count);
    segments.extend(std::iter::repeat(STOCK_MAX_RUN).take(count - 1));
    segments.push(length - whole * STOCK_MAX_RUN);
    Ok(segments)
}

/// A logical panel before it is split into stock pieces
#[derive(Debug, Clone, Copy)]
pub(crate) struct Run {
    pub strip: u32,
    pub position: f64,
    pub width: f64,
    pub kind: PanelKind,
    pub joint: Joint,
}

impl Run {
    /// Split this run across `length` and append the pieces
    pub(crate) fn emit(self, length: f64, panels: &mut Vec<Panel>) -> Result<()> {
        let mut offset = 0.0;
        for (i, cut) in split_run(length)?.into_iter().enumerate() {
            panels.push(Panel {
                strip: self.strip,
                part: i as u32 + 1,
                position: self.position,
                offset,
                width: self.width,
                length: cut,
                kind: self.kind,
                joint: if i == 0 { self.joint } else { Joint::Extension },
            });
            offset += cut;
        }
        Ok(())
    }
}
