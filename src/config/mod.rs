#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://viacep.com.br/ws";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Client settings for library callers that don't go through the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConfigProvider for LookupConfig {
    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self).map(|_| ())
    }
}

/// Checks endpoint and timeout of any provider, returning the parsed endpoint.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<Url> {
    let endpoint = validate_url("endpoint", config.api_endpoint())?;
    validate_range("timeout_secs", config.timeout_secs(), 1, MAX_TIMEOUT_SECS)?;
    Ok(endpoint)
}
