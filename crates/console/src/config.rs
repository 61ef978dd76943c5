use std::time::Duration;

use starport_swapi::SwapiConfig;

/// Default delay before the not-found view sends the user home.
pub const DEFAULT_REDIRECT_SECS: u64 = 3;

/// Console configuration loaded from environment variables.
///
/// All fields have defaults suitable for interactive use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Catalog API client settings.
    pub swapi: SwapiConfig,
    /// Fixed seed for the initial craft assignments. `None` draws a fresh
    /// seed per session.
    pub session_seed: Option<u64>,
    /// Delay before the not-found view redirects home.
    pub not_found_redirect: Duration,
}

impl ConsoleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `SWAPI_BASE_URL`          | `https://swapi.info/api` |
    /// | `SWAPI_TIMEOUT_SECS`      | `10`                     |
    /// | `SESSION_SEED`            | random                   |
    /// | `NOT_FOUND_REDIRECT_SECS` | `3`                      |
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let swapi = SwapiConfig::from_lookup(&lookup);

        let session_seed = match lookup("SESSION_SEED") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("SESSION_SEED must be a valid u64"))?,
            ),
            _ => None,
        };

        let redirect_secs: u64 = match lookup("NOT_FOUND_REDIRECT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("NOT_FOUND_REDIRECT_SECS must be a valid u64"))?,
            None => DEFAULT_REDIRECT_SECS,
        };

        Ok(Self {
            swapi,
            session_seed,
            not_found_redirect: Duration::from_secs(redirect_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConsoleConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.session_seed, None);
        assert_eq!(config.not_found_redirect, Duration::from_secs(3));
        assert_eq!(config.swapi, SwapiConfig::default());
    }

    #[test]
    fn reads_seed_and_redirect() {
        let config = ConsoleConfig::from_lookup(|key| match key {
            "SESSION_SEED" => Some("42".into()),
            "NOT_FOUND_REDIRECT_SECS" => Some("1".into()),
            "SWAPI_BASE_URL" => Some("http://127.0.0.1:8080/api".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.session_seed, Some(42));
        assert_eq!(config.not_found_redirect, Duration::from_secs(1));
        assert_eq!(config.swapi.base_url, "http://127.0.0.1:8080/api");
    }

    #[test]
    fn bad_seed_is_an_error() {
        let result = ConsoleConfig::from_lookup(|key| (key == "SESSION_SEED").then(|| "x".into()));
        assert!(result.is_err());
    }
}
