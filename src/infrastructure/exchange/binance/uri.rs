use crate::config_loader::BinanceConfig;
use crate::domain::constants::*;
use crate::domain::enums::ApiTier;

/// Builds absolute endpoint URIs: `{base_url}/{api_prefix}/{version}/{path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriBuilder {
    base_url: String,
    api_prefix: String,
    api_version: String,
    private_api_version: String,
}

impl UriBuilder {
    pub fn new(
        base_url: impl Into<String>,
        api_prefix: impl Into<String>,
        api_version: impl Into<String>,
        private_api_version: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_prefix: api_prefix.into().trim_matches('/').to_string(),
            api_version: api_version.into(),
            private_api_version: private_api_version.into(),
        }
    }

    pub fn from_config(config: &BinanceConfig) -> Self {
        Self::new(
            config.base_url.as_str(),
            config.api_prefix.as_str(),
            config.api_version.as_str(),
            config.private_api_version.as_str(),
        )
    }

    pub fn version(&self, tier: ApiTier) -> &str {
        match tier {
            ApiTier::Default => &self.api_version,
            ApiTier::Private => &self.private_api_version,
        }
    }

    pub fn build(&self, path: &str, tier: ApiTier) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            self.api_prefix,
            self.version(tier),
            path.trim_start_matches('/')
        )
    }
}

impl Default for UriBuilder {
    fn default() -> Self {
        Self::new(
            DEFAULT_BASE_URL,
            DEFAULT_API_PREFIX,
            DEFAULT_API_VERSION,
            DEFAULT_PRIVATE_API_VERSION,
        )
    }
}
