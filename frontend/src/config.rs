use crate::models::DEFAULT_PAYMENT_METHOD;

const API_BASE_URL: &str = "http://localhost:8000";
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Runtime settings handed to components through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub refresh_interval_ms: u32,
    pub default_payment_method: String,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            refresh_interval_ms: REFRESH_INTERVAL_MS,
            default_payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Joins `path` onto the base URL, tolerating a trailing slash on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.refresh_interval_ms, 30_000);
        assert_eq!(config.default_payment_method, "Card");
    }

    #[test]
    fn endpoint_joins_cleanly() {
        let mut config = AppConfig::default();
        assert_eq!(config.endpoint("/expenses/"), "http://localhost:8000/expenses/");
        config.api_base_url = "https://api.example.com/".to_string();
        assert_eq!(config.endpoint("insights/"), "https://api.example.com/insights/");
    }
}
