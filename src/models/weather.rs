use serde::{Deserialize, Serialize};

/// Current conditions at the destination. Informational only: weather never
/// changes which places are selected or their order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    /// Short condition label, e.g. "Rain" or "Clear"
    pub condition: String,
    pub description: String,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
}

impl WeatherSnapshot {
    /// Plain-text hints for the traveller
    pub fn considerations(&self) -> Vec<String> {
        let mut notes = Vec::new();
        let condition = self.condition.to_lowercase();

        if ["rain", "drizzle", "thunderstorm"]
            .iter()
            .any(|c| condition.contains(c))
        {
            notes.push("Rain expected - carry an umbrella and keep indoor options handy".to_string());
        }
        if condition.contains("snow") {
            notes.push("Snow expected - dress warmly and allow extra travel time".to_string());
        }
        if self.temperature_c >= 32.0 {
            notes.push("Hot weather - plan outdoor visits for the morning and stay hydrated".to_string());
        } else if self.temperature_c <= 5.0 {
            notes.push("Cold weather - pack warm layers".to_string());
        }
        if self.wind_speed_ms >= 10.0 {
            notes.push("Strong winds - viewpoints and boat trips may be affected".to_string());
        }

        notes
    }
}
