//! Candidate filtering and the crawl-planning pipeline.
//!
//! Bridges the HTTP client and the pure planner: raw brewery records are
//! filtered down to geolocated candidate stops, the multi-start search
//! runs, and the result is translated into a tagged outcome. The planner
//! itself never sees a closed brewery or an unparseable coordinate.

use alecrawl_core::{find_best_crawl, Crawl, CrawlParams, Stop};
use thiserror::Error;

use crate::client::OpenBreweryClient;
use crate::error::OpenBreweryError;
use crate::types::BreweryRecord;

/// Parameters for one crawl-planning request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub city: String,
    pub state: Option<String>,
    pub max_distance_miles: f64,
    pub target_stops: usize,
    /// Page size for the upstream brewery list request.
    pub per_page: u32,
}

/// A successfully planned crawl.
///
/// `warning` is an advisory, set when fewer stops were found than
/// requested; a partial crawl is a success, not an error.
#[derive(Debug, Clone)]
pub struct CrawlPlan {
    pub crawl: Crawl,
    pub warning: Option<String>,
}

/// Hard failures from the planning pipeline.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The upstream brewery fetch failed.
    #[error("failed to fetch breweries: {0}")]
    Fetch(#[from] OpenBreweryError),

    /// The city returned no breweries with usable coordinates.
    #[error("no breweries found with valid coordinates")]
    NoCandidates,

    /// The search produced an empty crawl, so no crawl could be started.
    #[error("could not find any breweries to start the crawl")]
    NoCrawl,
}

/// Filters raw brewery records down to candidate stops.
///
/// Drops closed breweries and any record whose latitude or longitude is
/// missing or does not parse as a finite number. Everything else passes
/// through with its display fields intact.
#[must_use]
pub fn candidate_stops(records: Vec<BreweryRecord>) -> Vec<Stop> {
    records.into_iter().filter_map(candidate_stop).collect()
}

fn candidate_stop(record: BreweryRecord) -> Option<Stop> {
    if record.brewery_type.as_deref() == Some("closed") {
        return None;
    }
    let latitude = parse_coordinate(record.latitude.as_deref())?;
    let longitude = parse_coordinate(record.longitude.as_deref())?;
    Some(Stop {
        id: record.id,
        name: record.name,
        latitude,
        longitude,
        street: record.street,
        city: record.city,
        state: record.state,
        phone: record.phone,
        website_url: record.website_url,
    })
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Fetches candidates and plans the best crawl for `request`.
///
/// # Errors
///
/// - [`PlanError::Fetch`] if the upstream request fails.
/// - [`PlanError::NoCandidates`] if no fetched brewery has usable coordinates.
/// - [`PlanError::NoCrawl`] if the search comes back empty.
pub async fn plan_crawl(
    client: &OpenBreweryClient,
    request: &PlanRequest,
) -> Result<CrawlPlan, PlanError> {
    let records = client
        .list_by_city(&request.city, request.state.as_deref(), request.per_page)
        .await?;
    let fetched = records.len();

    let stops = candidate_stops(records);
    if stops.is_empty() {
        return Err(PlanError::NoCandidates);
    }
    tracing::debug!(
        city = %request.city,
        fetched,
        candidates = stops.len(),
        "planning crawl"
    );

    let params = CrawlParams {
        max_distance_miles: request.max_distance_miles,
        target_stops: request.target_stops,
    };
    let crawl = find_best_crawl(&stops, &params);
    if crawl.is_empty() {
        return Err(PlanError::NoCrawl);
    }

    let warning = (crawl.len() < request.target_stops).then(|| {
        format!(
            "only found {} breweries within {} miles of each other",
            crawl.len(),
            request.max_distance_miles
        )
    });

    Ok(CrawlPlan { crawl, warning })
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn record(id: &str, latitude: Option<&str>, longitude: Option<&str>) -> BreweryRecord {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": format!("Brewery {id}"),
            "brewery_type": "micro",
            "latitude": latitude,
            "longitude": longitude,
        }))
        .expect("test record")
    }

    #[test]
    fn filter_drops_records_without_coordinates() {
        let records = vec![
            record("keep", Some("45.0"), Some("-122.0")),
            record("no-lat", None, Some("-122.0")),
            record("no-lon", Some("45.0"), None),
        ];
        let stops = candidate_stops(records);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].id, "keep");
    }

    #[test]
    fn filter_drops_unparseable_and_non_finite_coordinates() {
        let records = vec![
            record("garbage", Some("not-a-number"), Some("-122.0")),
            record("infinite", Some("inf"), Some("-122.0")),
            record("keep", Some(" 45.5231 "), Some("-122.6765")),
        ];
        let stops = candidate_stops(records);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].id, "keep");
        assert!((stops[0].latitude - 45.5231).abs() < 1e-9);
    }

    #[test]
    fn filter_drops_closed_breweries() {
        let mut closed = record("shut", Some("45.0"), Some("-122.0"));
        closed.brewery_type = Some("closed".to_string());
        let records = vec![closed, record("open", Some("45.0"), Some("-122.0"))];
        let stops = candidate_stops(records);
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].id, "open");
    }

    #[test]
    fn filter_keeps_display_fields() {
        let records: Vec<BreweryRecord> = serde_json::from_value(serde_json::json!([{
            "id": "b-1",
            "name": "Barrel Works",
            "brewery_type": "micro",
            "latitude": "45.5231",
            "longitude": "-122.6765",
            "street": "1234 NW Flanders St",
            "city": "Portland",
            "state": "Oregon",
            "phone": "5035551234",
            "website_url": "https://barrelworks.example.com"
        }]))
        .expect("test records");
        let stops = candidate_stops(records);
        assert_eq!(stops[0].street.as_deref(), Some("1234 NW Flanders St"));
        assert_eq!(
            stops[0].website_url.as_deref(),
            Some("https://barrelworks.example.com")
        );
    }

    fn near_equator_body() -> serde_json::Value {
        // Three stops ~0.69 miles apart in a chain.
        serde_json::json!([
            {"id": "a", "name": "Brewery A", "latitude": "0.0", "longitude": "0.0"},
            {"id": "b", "name": "Brewery B", "latitude": "0.0", "longitude": "0.01"},
            {"id": "c", "name": "Brewery C", "latitude": "0.0", "longitude": "0.02"}
        ])
    }

    async fn mock_city(server: &MockServer, city: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/breweries"))
            .and(query_param("by_city", city))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    fn request(city: &str, max_distance_miles: f64, target_stops: usize) -> PlanRequest {
        PlanRequest {
            city: city.to_string(),
            state: None,
            max_distance_miles,
            target_stops,
            per_page: 50,
        }
    }

    fn test_client(server: &MockServer) -> OpenBreweryClient {
        OpenBreweryClient::with_base_url(&server.uri(), 5, "alecrawl-test")
            .expect("client construction should not fail")
            .with_retry_policy(0, 0)
    }

    #[tokio::test]
    async fn plan_returns_full_crawl_without_warning() {
        let server = MockServer::start().await;
        mock_city(&server, "equatorville", near_equator_body()).await;

        let client = test_client(&server);
        let plan = plan_crawl(&client, &request("equatorville", 1.0, 3))
            .await
            .expect("plan should succeed");

        assert_eq!(plan.crawl.len(), 3);
        assert!(plan.warning.is_none());
        let ids: Vec<&str> = plan
            .crawl
            .stops
            .iter()
            .map(|s| s.stop.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn plan_flags_partial_crawl_with_warning() {
        let server = MockServer::start().await;
        mock_city(&server, "equatorville", near_equator_body()).await;

        let client = test_client(&server);
        let plan = plan_crawl(&client, &request("equatorville", 1.0, 5))
            .await
            .expect("partial crawl is still a success");

        assert_eq!(plan.crawl.len(), 3);
        assert_eq!(
            plan.warning.as_deref(),
            Some("only found 3 breweries within 1 miles of each other")
        );
    }

    #[tokio::test]
    async fn plan_fails_when_no_candidate_has_coordinates() {
        let server = MockServer::start().await;
        mock_city(
            &server,
            "nowhere",
            serde_json::json!([
                {"id": "x", "name": "Mystery Brewing", "latitude": null, "longitude": null}
            ]),
        )
        .await;

        let client = test_client(&server);
        let result = plan_crawl(&client, &request("nowhere", 1.0, 3)).await;
        assert!(matches!(result, Err(PlanError::NoCandidates)));
    }

    #[tokio::test]
    async fn plan_propagates_fetch_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/breweries"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = plan_crawl(&client, &request("anywhere", 1.0, 3)).await;
        assert!(matches!(result, Err(PlanError::Fetch(_))));
    }

    #[tokio::test]
    async fn isolated_stops_still_yield_a_single_stop_crawl() {
        let server = MockServer::start().await;
        mock_city(
            &server,
            "sparse",
            serde_json::json!([
                {"id": "a", "name": "Brewery A", "latitude": "0.0", "longitude": "0.0"},
                {"id": "b", "name": "Brewery B", "latitude": "0.0", "longitude": "0.5"}
            ]),
        )
        .await;

        let client = test_client(&server);
        let plan = plan_crawl(&client, &request("sparse", 1.0, 2))
            .await
            .expect("single-stop crawl is still a success");
        assert_eq!(plan.crawl.len(), 1);
        assert!(plan.warning.is_some());
    }
}
