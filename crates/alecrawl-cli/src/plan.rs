//! The `plan` command: fetch candidates, plan the crawl, print it.

use alecrawl_openbrewery::{plan_crawl, OpenBreweryClient, PlanRequest};

pub(crate) async fn run(
    city: &str,
    state: Option<&str>,
    distance: f64,
    stops: usize,
) -> anyhow::Result<()> {
    if !distance.is_finite() || distance <= 0.0 {
        anyhow::bail!("--distance must be a positive number of miles");
    }
    if stops == 0 {
        anyhow::bail!("--stops must be at least 1");
    }

    let config = alecrawl_core::load_app_config()?;
    let client = OpenBreweryClient::with_base_url(
        &config.openbrewery_base_url,
        config.fetch_timeout_secs,
        &config.fetch_user_agent,
    )?
    .with_retry_policy(config.fetch_max_retries, config.retry_backoff_base_ms);

    let request = PlanRequest {
        city: city.to_owned(),
        state: state.map(ToOwned::to_owned),
        max_distance_miles: distance,
        target_stops: stops,
        per_page: config.fetch_per_page,
    };
    let plan = plan_crawl(&client, &request).await?;

    println!("Brewery crawl for {city}:");
    for (index, crawl_stop) in plan.crawl.stops.iter().enumerate() {
        let mut line = format!("{:>2}. {}", index + 1, crawl_stop.stop.name);
        if let Some(street) = &crawl_stop.stop.street {
            line.push_str(&format!(", {street}"));
        }
        if let Some(miles) = crawl_stop.distance_from_previous {
            line.push_str(&format!(" ({miles:.2} mi from previous)"));
        }
        println!("{line}");
    }
    if let Some(warning) = plan.warning {
        println!("note: {warning}");
    }

    Ok(())
}
