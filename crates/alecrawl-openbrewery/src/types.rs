//! Open Brewery DB response types.
//!
//! The list endpoint returns a flat JSON array of brewery records. The API
//! has served `latitude`/`longitude` both as numeric strings and as raw
//! numbers depending on version, so both forms are accepted and normalised
//! to strings on the wire; parsing to `f64` happens during candidate
//! filtering, where invalid values are dropped rather than failing the
//! whole response.

use serde::{Deserialize, Deserializer};

/// A single brewery as returned by the `/breweries` list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BreweryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brewery_type: Option<String>,
    #[serde(default, deserialize_with = "coordinate_string")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "coordinate_string")]
    pub longitude: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Accepts a JSON string, number, or null and normalises to `Option<String>`.
fn coordinate_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
