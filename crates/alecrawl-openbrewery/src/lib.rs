//! Open Brewery DB client and crawl-planning pipeline.
//!
//! This crate is the data-fetch collaborator around the pure planner in
//! `alecrawl-core`: it fetches candidate breweries over HTTP, filters out
//! records the planner must never see (closed breweries, missing or
//! unparseable coordinates), runs the multi-start crawl search, and
//! translates the result into a tagged outcome for the API and CLI
//! boundaries.

mod client;
mod error;
mod pipeline;
mod retry;
mod types;

pub use client::OpenBreweryClient;
pub use error::OpenBreweryError;
pub use pipeline::{candidate_stops, plan_crawl, CrawlPlan, PlanError, PlanRequest};
pub use types::BreweryRecord;
