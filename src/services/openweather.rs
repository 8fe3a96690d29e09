use crate::error::{AppError, Result};
use crate::models::WeatherSnapshot;
use crate::services::providers::WeatherProvider;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, OPENWEATHER_BASE_URL.to_string())
    }

    pub fn with_config(api_key: String, base_url: String) -> Self {
        OpenWeatherClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Weather(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, city, "OpenWeatherMap returned {}", status);
            return Err(AppError::Weather(format!("HTTP {}", status)));
        }

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| AppError::Weather(format!("Failed to parse response: {}", e)))?;

        body.try_into()
    }
}

// OpenWeatherMap API response types

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
    #[serde(default)]
    wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    #[serde(default)]
    speed: f64,
}

impl TryFrom<CurrentWeatherResponse> for WeatherSnapshot {
    type Error = AppError;

    fn try_from(body: CurrentWeatherResponse) -> Result<Self> {
        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Weather("Response has no weather conditions".to_string()))?;

        Ok(WeatherSnapshot {
            temperature_c: body.main.temp,
            condition: condition.main,
            description: condition.description,
            humidity_pct: body.main.humidity,
            wind_speed_ms: body.wind.map(|w| w.speed).unwrap_or(0.0),
        })
    }
}
