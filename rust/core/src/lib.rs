// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # PodPly Core
//!
//! Plywood cutting plans for pod floor frames: parallel bearers between two
//! fascias, covered by sheets that span the full bearer length.
//!
//! ## Overview
//!
//! - **Centers**: bearer centerlines derived from frame length and count
//! - **Modular layout**: every join on a centerline, fewest distinct sizes
//! - **Optimized layout**: widest strips a stock sheet allows, snapped back
//!   to the last reachable centerline
//! - **Catalog**: panels grouped by size and labelled A, B, C, ...
//!
//! Runs longer than a stock sheet are split into stacked pieces along the
//! bearer length in both layouts.
//!
//! ## Quick Start
//!
//! ```rust
//! use podply_core::{compute_plan, FrameSpec};
//!
//! let plan = compute_plan(&FrameSpec::new(3504.0, 3114.0, 7)).unwrap();
//! assert_eq!(plan.spacing(), 554.0);
//!
//! for entry in plan.modular.catalog.entries() {
//!     println!("{} x{}  {}", entry.label, entry.quantity, entry.size_string());
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for plan data

pub mod catalog;
pub mod centers;
pub mod error;
pub mod frame;
pub mod modular;
pub mod optimized;
pub mod panel;
pub mod plan;
pub mod split;

pub use catalog::{catalog, size_label, Catalog, CatalogEntry, SizeKey};
pub use centers::{derive_centers, CenterSet};
pub use error::{Error, Result};
pub use frame::{
    FrameSpec, SheetOrientation, BEARER_THICKNESS, FASCIA_THICKNESS, MAX_PIECES_PER_RUN,
    STOCK_MAX_RUN,
};
pub use modular::partition_modular;
pub use optimized::partition_optimized;
pub use panel::{Joint, Panel, PanelKind};
pub use plan::{compute_plan, Layout, PlanOutput, Strategy, Warning};
pub use split::split_run;
