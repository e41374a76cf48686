// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan computation and conversion to API responses.

use crate::config::Config;
use crate::error::{ApiError, ErrorResponse};
use crate::types::{CatalogRow, LayoutResponse, PanelRow, PlanRequest, PlanResponse};
use podply_core::{compute_plan, Joint, Layout, Strategy};

/// Reject requests beyond the configured bearer and dimension limits.
fn check_limits(request: &PlanRequest, config: &Config) -> Result<(), ApiError> {
    if request.bearers > config.max_bearers {
        return Err(ApiError::TooManyBearers {
            max: config.max_bearers,
        });
    }
    for (field, value) in [("length", request.length), ("span", request.span)] {
        // NaN falls through to frame validation
        if value > config.max_dimension_mm {
            return Err(ApiError::DimensionTooLarge {
                field,
                value,
                max: config.max_dimension_mm,
            });
        }
    }
    Ok(())
}

/// Compute both layouts for a request.
///
/// CPU-bound; async callers should run it on the blocking pool.
pub fn plan_frame(request: &PlanRequest, config: &Config) -> Result<PlanResponse, ApiError> {
    check_limits(request, config)?;

    let frame = request.frame();
    let start = std::time::Instant::now();
    let plan = compute_plan(&frame)?;

    let modular = layout_response(&plan.modular, frame.bearer_count);
    let (optimized, optimized_error) = match &plan.optimized {
        Ok(layout) => (Some(layout_response(layout, frame.bearer_count)), None),
        Err(e) => {
            tracing::info!(error = %e, "Optimized layout not possible");
            (None, Some(ErrorResponse::from_plan_error(e)))
        }
    };

    tracing::debug!(
        span = frame.length_axis,
        length = frame.width_axis,
        bearers = frame.bearer_count,
        modular_pieces = modular.total_pieces,
        optimized_pieces = optimized.as_ref().map(|o| o.total_pieces),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Computed plan"
    );

    Ok(PlanResponse {
        frame,
        spacing: plan.spacing(),
        gap: plan.gap(),
        centers: plan.centers.centers.clone(),
        sheet_reach: frame.stock_reach(),
        sheet_orientation: frame.sheet_orientation(),
        warnings: plan.warnings(),
        modular,
        optimized,
        optimized_error,
    })
}

fn layout_response(layout: &Layout, bearer_count: u32) -> LayoutResponse {
    let panels = layout
        .panels
        .iter()
        .map(|panel| PanelRow {
            cut_id: panel.cut_id(),
            kind: panel.kind,
            label: layout
                .catalog
                .label_for(panel)
                .unwrap_or_default()
                .to_string(),
            position: panel.position,
            offset: panel.offset,
            width: panel.width,
            length: panel.length,
            joint: panel.joint,
            joint_note: panel.joint.to_string(),
            location: match (layout.strategy, panel.joint) {
                (Strategy::Modular, Joint::Extension) => None,
                (Strategy::Modular, _) => Some(panel.kind.install_location(bearer_count)),
                (Strategy::Optimized, _) => None,
            },
        })
        .collect();

    let catalog = layout
        .catalog
        .entries()
        .iter()
        .map(|entry| CatalogRow {
            label: entry.label.clone(),
            quantity: entry.quantity,
            size: entry.size_string(),
            width: entry.width,
            length: entry.length,
        })
        .collect();

    LayoutResponse {
        strategy: layout.strategy,
        panels,
        catalog,
        total_pieces: layout.catalog.total_pieces(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(length: f64, span: f64, bearers: u32) -> PlanRequest {
        PlanRequest {
            length,
            span,
            bearers,
        }
    }

    #[test]
    fn request_maps_span_to_the_bearer_axis() {
        let frame = request(3114.0, 3504.0, 7).frame();
        assert_eq!(frame.length_axis, 3504.0);
        assert_eq!(frame.width_axis, 3114.0);
    }

    #[test]
    fn reference_pod_response() {
        let response = plan_frame(&request(3114.0, 3504.0, 7), &Config::default()).unwrap();
        assert_eq!(response.spacing, 554.0);
        assert_eq!(response.sheet_reach, 1200.0);
        assert_eq!(response.centers.len(), 7);
        assert!(response.optimized_error.is_none());

        let modular = &response.modular;
        assert_eq!(modular.panels.len(), 12);
        assert_eq!(
            modular.panels[0].location.as_deref(),
            Some("Start -> Bearer #2 Center")
        );
        assert_eq!(modular.panels[1].location, None);
        assert_eq!(modular.panels[1].joint_note, "Extension Joint (Requires Nogs)");
        assert_eq!(modular.catalog[0].size, "2400 x 644.0");
        assert_eq!(modular.panels[0].label, "A");

        let optimized = response.optimized.unwrap();
        assert_eq!(optimized.panels[2].cut_id, "Cut 2.1");
        assert_eq!(optimized.panels[2].joint_note, "Joint on Bearer #5");
        assert_eq!(optimized.total_pieces, 6);
    }

    #[test]
    fn infeasible_optimized_is_reported_not_fatal() {
        let response = plan_frame(&request(2000.0, 10_000.0, 2), &Config::default()).unwrap();
        assert!(response.optimized.is_none());
        let error = response.optimized_error.unwrap();
        assert_eq!(error.code, "SPACING_TOO_WIDE");
        assert_eq!(response.modular.panels.len(), 1);
    }

    #[test]
    fn bearer_limit_is_enforced() {
        assert!(matches!(
            plan_frame(&request(2000.0, 40_000.0, 501), &Config::default()),
            Err(ApiError::TooManyBearers { max: 500 })
        ));
    }

    #[test]
    fn dimension_limit_is_enforced() {
        let config = Config::default();
        assert!(matches!(
            plan_frame(&request(1e20, 3504.0, 7), &config),
            Err(ApiError::DimensionTooLarge { field: "length", .. })
        ));
        assert!(matches!(
            plan_frame(&request(3114.0, f64::INFINITY, 7), &config),
            Err(ApiError::DimensionTooLarge { field: "span", .. })
        ));

        let tight = Config {
            max_dimension_mm: 3000.0,
            ..Config::default()
        };
        assert!(plan_frame(&request(3114.0, 2000.0, 4), &tight).is_err());
        assert!(plan_frame(&request(3000.0, 2000.0, 4), &tight).is_ok());
    }
}
