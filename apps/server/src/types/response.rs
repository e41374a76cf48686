// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use podply_core::{FrameSpec, Joint, PanelKind, SheetOrientation, Strategy, Warning};
use serde::Serialize;

use crate::error::ErrorResponse;

/// Full cutting plan for one frame.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Frame the plan was computed for.
    pub frame: FrameSpec,
    /// Bearer center-to-center distance (mm).
    pub spacing: f64,
    /// Clear gap between bearer faces (mm); negative when bearers overlap.
    pub gap: f64,
    /// Bearer centerlines along the span (mm).
    pub centers: Vec<f64>,
    /// Sheet dimension spanning along the pod (mm).
    pub sheet_reach: f64,
    /// Which way stock sheets are laid.
    pub sheet_orientation: SheetOrientation,
    /// Non-fatal frame problems.
    pub warnings: Vec<Warning>,
    /// Modular layout (always available for a valid frame).
    pub modular: LayoutResponse,
    /// Optimized layout, absent when bearers are too far apart.
    pub optimized: Option<LayoutResponse>,
    /// Why the optimized layout is absent.
    pub optimized_error: Option<ErrorResponse>,
}

/// Panels and bill of materials for one strategy.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub strategy: Strategy,
    /// Every piece to cut, in laying order.
    pub panels: Vec<PanelRow>,
    /// Pieces grouped by size.
    pub catalog: Vec<CatalogRow>,
    /// Number of pieces to cut.
    pub total_pieces: u32,
}

/// One piece to cut and where it goes.
#[derive(Debug, Serialize)]
pub struct PanelRow {
    /// e.g. "Cut 2.1".
    pub cut_id: String,
    pub kind: PanelKind,
    /// Size label from the catalog.
    pub label: String,
    /// Start along the span (mm).
    pub position: f64,
    /// Start along the bearers (mm).
    pub offset: f64,
    /// Extent along the span (mm).
    pub width: f64,
    /// Extent along the bearers (mm).
    pub length: f64,
    pub joint: Joint,
    /// Joint description, e.g. "Joint on Bearer #3".
    pub joint_note: String,
    /// Install location for modular panels.
    pub location: Option<String>,
}

/// One row of the bill of materials.
#[derive(Debug, Serialize)]
pub struct CatalogRow {
    pub label: String,
    pub quantity: u32,
    /// "length x width" as printed on cut sheets.
    pub size: String,
    pub width: f64,
    pub length: f64,
}
