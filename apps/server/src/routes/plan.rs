// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cutting plan endpoints.

use crate::error::ApiError;
use crate::services::plan_frame;
use crate::types::{PlanRequest, PlanResponse};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// POST /api/v1/plan - Plan from a JSON body.
pub async fn plan_json(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    tracing::info!(
        length = request.length,
        span = request.span,
        bearers = request.bearers,
        "Plan request"
    );
    run_plan(state, request).await
}

/// GET /api/v1/plan - Plan from query parameters.
pub async fn plan_query(
    State(state): State<AppState>,
    Query(request): Query<PlanRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    tracing::info!(
        length = request.length,
        span = request.span,
        bearers = request.bearers,
        "Plan query"
    );
    run_plan(state, request).await
}

async fn run_plan(
    state: AppState,
    request: PlanRequest,
) -> Result<Json<PlanResponse>, ApiError> {
    let config = state.config.clone();

    // Process on blocking thread pool (CPU-intensive)
    let response = tokio::task::spawn_blocking(move || plan_frame(&request, &config)).await??;
    Ok(Json(response))
}

/// Unknown routes.
pub async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::{build_router, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> axum::Router {
        build_router(AppState {
            config: Arc::new(Config::default()),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/plan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn post_returns_both_layouts() {
        let (status, body) =
            send(post_json(json!({ "length": 3114, "span": 3504, "bearers": 7 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["spacing"], json!(554.0));
        assert_eq!(body["gap"], json!(464.0));
        assert_eq!(body["sheet_orientation"], json!("standard"));
        assert_eq!(body["modular"]["strategy"], json!("modular"));
        assert_eq!(body["modular"]["panels"][0]["kind"], json!("start"));
        assert_eq!(body["optimized"]["panels"][0]["cut_id"], json!("Cut 1.1"));
        assert_eq!(body["optimized"]["panels"][0]["joint"], json!({ "bearer": 3 }));
        assert_eq!(body["optimized_error"], Value::Null);
    }

    #[tokio::test]
    async fn query_matches_post() {
        let request = Request::builder()
            .uri("/api/v1/plan?length=1000&span=3504&bearers=7")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sheet_reach"], json!(2400.0));
        assert_eq!(body["optimized"]["panels"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_frame_is_bad_request() {
        let (status, body) =
            send(post_json(json!({ "length": 3114, "span": 3504, "bearers": 1 }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("INVALID_FRAME"));
    }

    #[tokio::test]
    async fn wide_spacing_still_returns_modular() {
        let (status, body) =
            send(post_json(json!({ "length": 2000, "span": 10000, "bearers": 2 }))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["optimized"], Value::Null);
        assert_eq!(body["optimized_error"]["code"], json!("SPACING_TOO_WIDE"));
        assert_eq!(body["modular"]["panels"][0]["kind"], json!("full_span"));
    }

    #[tokio::test]
    async fn oversized_dimensions_are_rejected() {
        let (status, body) =
            send(post_json(json!({ "length": 1e20, "span": 3504, "bearers": 7 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("DIMENSION_TOO_LARGE"));

        let request = Request::builder()
            .uri("/api/v1/plan?length=3114&span=1e9&bearers=7")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("DIMENSION_TOO_LARGE"));
    }

    #[tokio::test]
    async fn largest_accepted_frame_still_plans() {
        let (status, body) =
            send(post_json(json!({ "length": 50000, "span": 3504, "bearers": 7 }))).await;
        assert_eq!(status, StatusCode::OK);
        // 21 stock pieces for each of the 6 modular strips
        assert_eq!(body["modular"]["panels"].as_array().unwrap().len(), 126);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/v1/nope")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NOT_FOUND"));
    }
}
