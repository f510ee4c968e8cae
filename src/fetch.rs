use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::debug;

const API_BASE: &str = "https://api.pugetsound.onebusaway.org/api/where";
const API_KEY_VAR: &str = "ONEBUSAWAY_API_KEY";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches one trips-for-route document for a line's route.
pub fn trips_for_route(route_id: &str) -> Result<String> {
    get_document("trips-for-route", route_id)
}

/// Fetches the stops-for-route document used to maintain the station tables.
pub fn stops_for_route(route_id: &str) -> Result<String> {
    get_document("stops-for-route", route_id)
}

fn get_document(endpoint: &str, route_id: &str) -> Result<String> {
    let key = std::env::var(API_KEY_VAR).with_context(|| format!("{API_KEY_VAR} must be set"))?;
    let url = format!("{API_BASE}/{endpoint}/{route_id}.json?key={key}");

    debug!("fetching {endpoint} for route {route_id}");
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response = client
        .get(&url)
        .send()
        .with_context(|| format!("Failed to fetch {endpoint} for route {route_id}"))?;

    if !response.status().is_success() {
        bail!(
            "{endpoint} request for route {route_id} failed ({})",
            response.status()
        );
    }

    response.text().context("Failed to read the response body")
}
