use crate::constants::*;
use crate::models::BudgetLevel;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// OpenRouteService key, used for geocoding and directions
    pub openroute_api_key: String,
    pub opentripmap_api_key: String,
    /// Weather is optional: without a key the planner skips it
    pub openweather_api_key: Option<String>,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Longest trip (days) a request may ask for
    pub max_duration_days: u32,

    /// Budget level used when a request does not name one
    pub default_budget: BudgetLevel,

    /// Fetch current weather for the destination
    pub include_weather: bool,

    /// Ask the routing provider for real legs between stops.
    /// When false every leg is estimated.
    pub include_routes: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_duration_days: DEFAULT_MAX_DURATION_DAYS,
            default_budget: BudgetLevel::default(),
            include_weather: true,
            include_routes: true,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let max_duration_days: u32 = env::var("PLANNER_MAX_DURATION_DAYS")
            .unwrap_or_else(|_| defaults.max_duration_days.to_string())
            .parse()
            .map_err(|_| "Invalid PLANNER_MAX_DURATION_DAYS")?;

        if max_duration_days < MIN_DURATION_DAYS {
            return Err(format!(
                "PLANNER_MAX_DURATION_DAYS must be at least {}",
                MIN_DURATION_DAYS
            ));
        }

        Ok(Self {
            max_duration_days,

            default_budget: env::var("PLANNER_DEFAULT_BUDGET")
                .unwrap_or_else(|_| defaults.default_budget.to_string())
                .parse()?,

            include_weather: env::var("PLANNER_INCLUDE_WEATHER")
                .unwrap_or_else(|_| defaults.include_weather.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_INCLUDE_WEATHER")?,

            include_routes: env::var("PLANNER_INCLUDE_ROUTES")
                .unwrap_or_else(|_| defaults.include_routes.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_INCLUDE_ROUTES")?,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            openroute_api_key: env::var("OPENROUTE_API_KEY")
                .map_err(|_| "OPENROUTE_API_KEY must be set")?,
            opentripmap_api_key: env::var("OPENTRIPMAP_API_KEY")
                .map_err(|_| "OPENTRIPMAP_API_KEY must be set")?,
            openweather_api_key: env::var("OPENWEATHER_API_KEY").ok(),
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_planner_env() {
        for key in [
            "PLANNER_MAX_DURATION_DAYS",
            "PLANNER_DEFAULT_BUDGET",
            "PLANNER_INCLUDE_WEATHER",
            "PLANNER_INCLUDE_ROUTES",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_planner_config_defaults() {
        clear_planner_env();
        let config = PlannerConfig::from_env().unwrap();
        assert_eq!(config.max_duration_days, DEFAULT_MAX_DURATION_DAYS);
        assert_eq!(config.default_budget, BudgetLevel::Medium);
        assert!(config.include_weather);
        assert!(config.include_routes);
    }

    #[test]
    #[serial]
    fn test_planner_config_overrides() {
        clear_planner_env();
        env::set_var("PLANNER_MAX_DURATION_DAYS", "14");
        env::set_var("PLANNER_DEFAULT_BUDGET", "low");
        env::set_var("PLANNER_INCLUDE_ROUTES", "false");

        let config = PlannerConfig::from_env().unwrap();
        assert_eq!(config.max_duration_days, 14);
        assert_eq!(config.default_budget, BudgetLevel::Low);
        assert!(!config.include_routes);

        clear_planner_env();
    }

    #[test]
    #[serial]
    fn test_planner_config_rejects_bad_values() {
        clear_planner_env();
        env::set_var("PLANNER_MAX_DURATION_DAYS", "0");
        assert!(PlannerConfig::from_env().is_err());

        env::set_var("PLANNER_MAX_DURATION_DAYS", "ten");
        assert!(PlannerConfig::from_env().is_err());

        clear_planner_env();
        env::set_var("PLANNER_DEFAULT_BUDGET", "lavish");
        assert!(PlannerConfig::from_env().is_err());

        clear_planner_env();
    }
}
