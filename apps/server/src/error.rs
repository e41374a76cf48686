// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Plan(#[from] podply_core::Error),

    #[error("Too many bearers: maximum is {max}")]
    TooManyBearers { max: u32 },

    #[error("{field} of {value} mm exceeds the maximum of {max} mm")]
    DimensionTooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn from_plan_error(err: &podply_core::Error) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Plan(e @ podply_core::Error::InvalidFrame(_)) => {
                (StatusCode::BAD_REQUEST, e.code())
            }
            ApiError::Plan(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.code()),
            ApiError::TooManyBearers { .. } => (StatusCode::BAD_REQUEST, "TOO_MANY_BEARERS"),
            ApiError::DimensionTooLarge { .. } => {
                (StatusCode::BAD_REQUEST, "DIMENSION_TOO_LARGE")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
        };

        if status.is_client_error() {
            tracing::debug!(code, error = %self, "Rejected request");
        } else if status.is_server_error() {
            tracing::error!(code, error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
