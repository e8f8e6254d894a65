//! Domain types for crawl planning.
//!
//! A [`Stop`] is a geolocated candidate; a [`Crawl`] is an ordered walk
//! through stops where every hop after the first carries the distance from
//! its predecessor. The planner treats everything beyond `id` and the
//! coordinates as opaque passthrough for the presentation layers.

use serde::{Serialize, Serializer};

/// A candidate stop, already validated upstream: coordinates are parsed,
/// finite decimal degrees by the time a `Stop` exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website_url: Option<String>,
}

/// One entry in a planned crawl.
///
/// `distance_from_previous` is miles walked from the preceding stop,
/// rounded to two decimal places and serialized as a two-decimal numeric
/// string (`"0.69"`). The first stop of a crawl carries `None` and the
/// field is omitted from its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlStop {
    #[serde(flatten)]
    pub stop: Stop,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "two_decimal_string"
    )]
    pub distance_from_previous: Option<f64>,
}

/// An ordered walk through stops.
///
/// Invariants upheld by the builder: no stop id appears twice, and every
/// consecutive pair lies within the `max_distance_miles` supplied to the
/// call that produced it. Crawls are per-request values, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Crawl {
    pub stops: Vec<CrawlStop>,
}

impl Crawl {
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// Caller-supplied constraints for one crawl search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrawlParams {
    /// Longest walk allowed between consecutive stops, in miles.
    pub max_distance_miles: f64,
    /// Desired number of stops in the finished crawl.
    pub target_stops: usize,
}

fn two_decimal_string<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(miles) => serializer.serialize_str(&format!("{miles:.2}")),
        None => serializer.serialize_none(),
    }
}
