//! Greedy crawl construction.
//!
//! [`build_crawl`] performs a forward-only nearest-neighbour walk from one
//! chosen starting stop; [`find_best_crawl`] retries the walk from every
//! starting stop and keeps the longest crawl found. The walk is a
//! deliberate simplification of shortest-Hamiltonian-path routing: it
//! never backtracks, so it can strand itself early even when a detour
//! would have reached more stops. Worst case the search is O(n² · k) for
//! n stops and a target of k, with an early exit once a full-length crawl
//! turns up.

use crate::distance::distance_miles;
use crate::stop::{Crawl, CrawlParams, CrawlStop, Stop};

/// Builds a crawl starting from `stops[start_index]`.
///
/// The starting stop is moved out of a per-call working pool and each
/// iteration appends the nearest pool member within
/// `params.max_distance_miles` of the crawl's current last stop, until the
/// target count is reached or no pool member is in range. Ties on distance
/// keep the earliest pool entry. Each hop annotation is rounded to two
/// decimal places; comparisons use the unrounded distance.
///
/// An empty input or an out-of-range `start_index` yields an empty crawl.
#[must_use]
pub fn build_crawl(stops: &[Stop], params: &CrawlParams, start_index: usize) -> Crawl {
    if stops.is_empty() || start_index >= stops.len() {
        return Crawl::default();
    }

    let mut pool: Vec<Stop> = stops.to_vec();
    let first = pool.remove(start_index);
    let mut cursor = (first.latitude, first.longitude);
    let mut crawl = Crawl {
        stops: vec![CrawlStop {
            stop: first,
            distance_from_previous: None,
        }],
    };

    while crawl.len() < params.target_stops && !pool.is_empty() {
        let mut nearest: Option<(usize, f64)> = None;
        for (index, candidate) in pool.iter().enumerate() {
            let miles = distance_miles(cursor.0, cursor.1, candidate.latitude, candidate.longitude);
            // Strictly-smaller comparison: the first equidistant candidate
            // in pool order wins.
            if miles <= params.max_distance_miles
                && nearest.map_or(true, |(_, best)| miles < best)
            {
                nearest = Some((index, miles));
            }
        }

        let Some((index, miles)) = nearest else {
            // Nothing in range of the current stop; the crawl ends here.
            break;
        };

        let next = pool.remove(index);
        cursor = (next.latitude, next.longitude);
        crawl.stops.push(CrawlStop {
            stop: next,
            distance_from_previous: Some(round_hop(miles)),
        });
    }

    crawl
}

/// Runs [`build_crawl`] from every starting stop in index order and
/// returns the best result: the first crawl of maximal length, returning
/// early as soon as one reaches `params.target_stops`.
///
/// Only an empty input produces an empty crawl; any non-empty input yields
/// at least a one-stop crawl.
#[must_use]
pub fn find_best_crawl(stops: &[Stop], params: &CrawlParams) -> Crawl {
    let mut best = Crawl::default();

    for start_index in 0..stops.len() {
        let crawl = build_crawl(stops, params, start_index);
        if crawl.len() > best.len() {
            best = crawl;
        }
        if best.len() >= params.target_stops {
            break;
        }
    }

    best
}

fn round_hop(miles: f64) -> f64 {
    (miles * 100.0).round() / 100.0
}
