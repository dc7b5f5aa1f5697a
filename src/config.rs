// config.rs
use crate::bcpao::BcpaoError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://www.bcpao.us/api/v1/";
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("property_leads/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Always ends in `/` so endpoint paths can be joined onto it.
    pub api_base: Url,
    pub search_limit: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Reads `BCPAO_API_BASE`, `BCPAO_SEARCH_LIMIT`, `BCPAO_TIMEOUT_SECS` and
    /// `BCPAO_USER_AGENT`, falling back to the defaults for anything unset.
    pub fn from_env() -> Result<Self, BcpaoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, BcpaoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup("BCPAO_API_BASE") {
            config.api_base = parse_api_base(&base)?;
        }

        if let Some(limit) = lookup("BCPAO_SEARCH_LIMIT") {
            config.search_limit = limit
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    BcpaoError::Config(format!(
                        "BCPAO_SEARCH_LIMIT must be a positive integer, got '{limit}'"
                    ))
                })?;
        }

        if let Some(secs) = lookup("BCPAO_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                BcpaoError::Config(format!(
                    "BCPAO_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(agent) = lookup("BCPAO_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// The HTTP client the binary hands to the fetcher.
    pub fn build_client(&self) -> Result<reqwest::Client, BcpaoError> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| BcpaoError::Config(format!("Failed to create HTTP client: {e}")))
    }
}

pub fn parse_api_base(raw: &str) -> Result<Url, BcpaoError> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|e| BcpaoError::Config(format!("Invalid API base '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = FetcherConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied_and_base_gets_trailing_slash() {
        let config = FetcherConfig::from_lookup(lookup_from(&[
            ("BCPAO_API_BASE", "http://localhost:8080/api/v1"),
            ("BCPAO_SEARCH_LIMIT", "25"),
            ("BCPAO_TIMEOUT_SECS", "5"),
            ("BCPAO_USER_AGENT", "leads-test"),
        ]))
        .unwrap();

        assert_eq!(config.api_base.as_str(), "http://localhost:8080/api/v1/");
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "leads-test");
    }

    #[test]
    fn bad_values_are_config_errors() {
        for pairs in [
            [("BCPAO_SEARCH_LIMIT", "0")],
            [("BCPAO_SEARCH_LIMIT", "ten")],
            [("BCPAO_TIMEOUT_SECS", "-1")],
            [("BCPAO_API_BASE", "not a url")],
        ] {
            let err = FetcherConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, BcpaoError::Config(_)), "{pairs:?} -> {err}");
        }
    }
}
