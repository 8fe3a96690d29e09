use crate::error::{AppError, Result};
use crate::models::{Coordinates, RadiusMeters};
use crate::services::providers::{PlaceDetails, PlaceSource, RawPlace};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};

const OPENTRIPMAP_BASE_URL: &str = "https://api.opentripmap.com/0.1/en";

/// OpenTripMap client: radius search over rated attractions and per-place details
#[derive(Clone)]
pub struct OpenTripMapClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenTripMapClient {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, OPENTRIPMAP_BASE_URL.to_string())
    }

    pub fn with_config(api_key: String, base_url: String) -> Self {
        OpenTripMapClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::PlaceSearch(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "OpenTripMap HTTP error {}: {}", status, error_text);
            return Err(AppError::PlaceSearch(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::PlaceSearch(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PlaceSource for OpenTripMapClient {
    async fn search_radius(
        &self,
        center: &Coordinates,
        radius: RadiusMeters,
        limit: usize,
    ) -> Result<Vec<RawPlace>> {
        let url = format!("{}/places/radius", self.base_url);
        let query = [
            ("radius", format!("{:.0}", radius.as_meters())),
            ("lon", center.lng.to_string()),
            ("lat", center.lat.to_string()),
            ("rate", "1".to_string()),
            ("format", "json".to_string()),
            ("limit", limit.to_string()),
        ];

        tracing::debug!(
            lat = center.lat,
            lng = center.lng,
            radius = %radius,
            limit,
            "OpenTripMap radius search"
        );

        let features: Vec<RadiusFeature> = self.get_json(&url, &query).await?;
        tracing::debug!(results = features.len(), "OpenTripMap radius search complete");

        Ok(features.into_iter().map(RawPlace::from).collect())
    }

    async fn details(&self, xid: &str) -> Result<PlaceDetails> {
        let url = format!(
            "{}/places/xid/{}",
            self.base_url,
            urlencoding::encode(xid)
        );
        let detail: DetailResponse = self.get_json(&url, &[]).await?;

        Ok(PlaceDetails {
            description: detail
                .wikipedia_extracts
                .map(|extract| extract.text)
                .filter(|text| !text.trim().is_empty()),
            rate: detail.rate,
        })
    }
}

// OpenTripMap API response types

#[derive(Debug, Deserialize)]
struct RadiusFeature {
    #[serde(default)]
    xid: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    kinds: String,
    #[serde(default, deserialize_with = "deserialize_rate")]
    rate: f32,
    #[serde(default)]
    point: Option<Point>,
}

#[derive(Debug, Deserialize)]
struct Point {
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default, deserialize_with = "deserialize_rate")]
    rate: f32,
    #[serde(default)]
    wikipedia_extracts: Option<WikipediaExtract>,
}

#[derive(Debug, Deserialize)]
struct WikipediaExtract {
    #[serde(default)]
    text: String,
}

impl From<RadiusFeature> for RawPlace {
    fn from(feature: RadiusFeature) -> Self {
        RawPlace {
            name: feature.name.filter(|name| !name.trim().is_empty()),
            xid: feature.xid,
            coordinates: feature
                .point
                .and_then(|point| Coordinates::new(point.lat, point.lon).ok()),
            kinds: feature.kinds,
            rate: feature.rate,
        }
    }
}

/// Rates come back as numbers from the radius search and as strings such as
/// "3h" from the detail endpoint; only the leading digits matter.
fn deserialize_rate<'de, D>(deserializer: D) -> std::result::Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0) as f32,
        serde_json::Value::String(s) => {
            let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().unwrap_or(0.0)
        }
        _ => 0.0,
    })
}
