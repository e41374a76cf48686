// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use podply_core::FrameSpec;
use serde::Deserialize;

/// Frame dimensions as entered on site.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlanRequest {
    /// Bearer length in mm; every panel spans this fully.
    pub length: f64,
    /// Total pod span in mm, subdivided by the bearers.
    pub span: f64,
    /// Total number of bearers.
    pub bearers: u32,
}

impl PlanRequest {
    pub fn frame(&self) -> FrameSpec {
        FrameSpec::new(self.span, self.length, self.bearers)
    }
}
