// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placed panel rectangles produced by the partitioners

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of a panel within its layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PanelKind {
    /// Single panel from fascia to fascia (two bearers)
    FullSpan,
    /// First modular panel, frame edge to bearer #2
    Start,
    /// Modular panel between two adjacent bearer centers
    Mid,
    /// Last modular panel, bearer #(n-1) to frame edge
    End,
    /// One of two modular panels meeting on the middle of three bearers
    Half,
    /// Optimized full-sheet strip
    Strip,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::FullSpan => "Full Span Panel",
            PanelKind::Start => "Start Panel",
            PanelKind::Mid => "Mid Panel",
            PanelKind::End => "End Panel",
            PanelKind::Half => "Half Panel",
            PanelKind::Strip => "Sheet Strip",
        }
    }

    /// Where a modular panel of this kind is installed
    pub fn install_location(&self, bearer_count: u32) -> String {
        match self {
            PanelKind::FullSpan => "Fascia to Fascia".to_string(),
            PanelKind::Start => "Start -> Bearer #2 Center".to_string(),
            PanelKind::Mid => "Between Bearer Centers".to_string(),
            PanelKind::End => format!("Bearer #{} Center -> End", bearer_count - 1),
            PanelKind::Half => "Meets at Center Bearer (#2)".to_string(),
            PanelKind::Strip => "Full Sheet Coverage".to_string(),
        }
    }
}

/// What a panel segment's far edge meets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Joint {
    /// Join along L lands on this bearer's centerline (1-based)
    Bearer(usize),
    /// Panel runs out to the frame edge
    Edge,
    /// Continuation piece along W; the join between sheets needs noggings
    Extension,
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Joint::Bearer(n) => write!(f, "Joint on Bearer #{}", n),
            Joint::Edge => f.write_str("Ends at Pod Edge"),
            Joint::Extension => f.write_str("Extension Joint (Requires Nogs)"),
        }
    }
}

/// A placed rectangle of sheet material
///
/// Created once by a partitioner and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    /// Logical panel or strip number along L (1-based)
    pub strip: u32,
    /// Segment number along W within the strip (1-based)
    pub part: u32,
    /// Start position along L
    pub position: f64,
    /// Start position along W
    pub offset: f64,
    /// Extent along L
    pub width: f64,
    /// Extent along W
    pub length: f64,
    pub kind: PanelKind,
    pub joint: Joint,
}

impl Panel {
    /// Identifier used on cut sheets, e.g. `Cut 2.1`
    pub fn cut_id(&self) -> String {
        format!("Cut {}.{}", self.strip, self.part)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Far edge along L
    #[inline]
    pub fn end_position(&self) -> f64 {
        self.position + self.width
    }
}
