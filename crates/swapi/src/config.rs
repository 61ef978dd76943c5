use std::time::Duration;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.info/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Catalog API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SwapiConfig {
    /// Read settings through `lookup`, usually the process environment.
    ///
    /// | Env Var              | Default                   |
    /// |----------------------|---------------------------|
    /// | `SWAPI_BASE_URL`     | `https://swapi.info/api`  |
    /// | `SWAPI_TIMEOUT_SECS` | `10`                      |
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("SWAPI_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("SWAPI_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "SWAPI_TIMEOUT_SECS is not a number, using default");
                DEFAULT_TIMEOUT_SECS
            }),
        };

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
