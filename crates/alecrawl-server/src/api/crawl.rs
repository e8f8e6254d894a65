use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use alecrawl_core::CrawlStop;
use alecrawl_openbrewery::{plan_crawl, PlanError, PlanRequest};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Raw query parameters for `GET /api/v1/crawl`.
///
/// Everything is optional at the serde layer so that missing or
/// out-of-range values surface as `validation_error` responses instead of
/// opaque extractor rejections.
#[derive(Debug, Deserialize)]
pub(super) struct CrawlQuery {
    city: Option<String>,
    state: Option<String>,
    max_distance: Option<f64>,
    stops: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct CrawlData {
    pub stops: Vec<CrawlStop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

fn parse_query(query: CrawlQuery, per_page: u32) -> Result<PlanRequest, String> {
    let city = query
        .city
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "city is required".to_string())?;

    let max_distance_miles = query
        .max_distance
        .ok_or_else(|| "max_distance is required".to_string())?;
    if !max_distance_miles.is_finite() || max_distance_miles <= 0.0 {
        return Err("max_distance must be a positive number of miles".to_string());
    }

    let target_stops = query.stops.ok_or_else(|| "stops is required".to_string())?;
    if target_stops == 0 {
        return Err("stops must be a positive integer".to_string());
    }

    Ok(PlanRequest {
        city,
        state: query.state.filter(|s| !s.trim().is_empty()),
        max_distance_miles,
        target_stops,
        per_page,
    })
}

pub(super) async fn get_crawl(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CrawlQuery>,
) -> Result<Json<ApiResponse<CrawlData>>, ApiError> {
    let request = parse_query(query, state.per_page)
        .map_err(|message| ApiError::new(req_id.0.clone(), "validation_error", message))?;

    match plan_crawl(state.client.as_ref(), &request).await {
        Ok(plan) => Ok(Json(ApiResponse {
            data: CrawlData {
                stops: plan.crawl.stops,
                warning: plan.warning,
            },
            meta: ResponseMeta::new(req_id.0),
        })),
        Err(PlanError::Fetch(e)) => {
            tracing::error!(error = %e, city = %request.city, "brewery fetch failed");
            Err(ApiError::new(
                req_id.0,
                "upstream_error",
                "failed to fetch breweries",
            ))
        }
        Err(e @ (PlanError::NoCandidates | PlanError::NoCrawl)) => {
            Err(ApiError::new(req_id.0, "not_found", e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        city: Option<&str>,
        max_distance: Option<f64>,
        stops: Option<usize>,
    ) -> CrawlQuery {
        CrawlQuery {
            city: city.map(str::to_string),
            state: None,
            max_distance,
            stops,
        }
    }

    #[test]
    fn parse_query_accepts_complete_input() {
        let request =
            parse_query(query(Some("Portland"), Some(1.5), Some(4)), 50).expect("valid query");
        assert_eq!(request.city, "Portland");
        assert!((request.max_distance_miles - 1.5).abs() < 1e-9);
        assert_eq!(request.target_stops, 4);
        assert_eq!(request.per_page, 50);
    }

    #[test]
    fn parse_query_rejects_blank_city() {
        let result = parse_query(query(Some("   "), Some(1.5), Some(4)), 50);
        assert_eq!(result.unwrap_err(), "city is required");
    }

    #[test]
    fn parse_query_rejects_negative_distance() {
        let result = parse_query(query(Some("Portland"), Some(-2.0), Some(4)), 50);
        assert_eq!(
            result.unwrap_err(),
            "max_distance must be a positive number of miles"
        );
    }

    #[test]
    fn parse_query_rejects_missing_stops() {
        let result = parse_query(query(Some("Portland"), Some(1.5), None), 50);
        assert_eq!(result.unwrap_err(), "stops is required");
    }

    #[test]
    fn parse_query_drops_blank_state() {
        let mut raw = query(Some("Portland"), Some(1.5), Some(4));
        raw.state = Some("  ".to_string());
        let request = parse_query(raw, 50).expect("valid query");
        assert!(request.state.is_none());
    }
}
