pub const DEFAULT_ECOLETA_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_IBGE_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Upstream endpoints the server functions proxy to.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub ecoleta_api_url: String,
    pub ibge_api_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            ecoleta_api_url: DEFAULT_ECOLETA_API_URL.to_string(),
            ibge_api_url: DEFAULT_IBGE_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Reads `ECOLETA_API_URL`, `IBGE_API_URL` and `HTTP_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let ecoleta_api_url = lookup("ECOLETA_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.ecoleta_api_url);
        let ibge_api_url = lookup("IBGE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.ibge_api_url);
        let timeout_secs = lookup("HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(defaults.timeout_secs);

        Self {
            ecoleta_api_url,
            ibge_api_url,
            timeout_secs,
        }
    }
}
