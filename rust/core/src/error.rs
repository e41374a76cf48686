// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for cutting plan computation.

use thiserror::Error;

/// Result type for plan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out a cutting plan
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Frame dimensions or bearer count cannot describe a real frame.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// No bearer centerline falls inside a stock sheet's reach.
    #[error(
        "Bearer spacing is too wide for standard plywood: no bearer within {reach} mm of {position:.1} mm. Add more bearers."
    )]
    SpacingTooWide { position: f64, reach: f64 },
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidFrame(_) => "INVALID_FRAME",
            Error::SpacingTooWide { .. } => "SPACING_TOO_WIDE",
        }
    }
}
