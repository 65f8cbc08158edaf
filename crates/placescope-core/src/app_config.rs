use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which scoring slot the catalog provider's detail records fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailRole {
    Primary,
    Secondary,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog_api_key: Option<String>,
    pub catalog_base_url: String,
    pub catalog_locale: String,
    pub search_api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub search_base_url: String,
    pub default_city: String,
    pub region: String,
    pub search_timeout_secs: u64,
    pub details_timeout_secs: u64,
    pub competitor_radius_m: f64,
    pub detail_role: DetailRole,
    pub relay_url: Option<String>,
    pub user_agent: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "catalog_api_key",
                &self.catalog_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("catalog_base_url", &self.catalog_base_url)
            .field("catalog_locale", &self.catalog_locale)
            .field(
                "search_api_key",
                &self.search_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_engine_id", &self.search_engine_id)
            .field("search_base_url", &self.search_base_url)
            .field("default_city", &self.default_city)
            .field("region", &self.region)
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("details_timeout_secs", &self.details_timeout_secs)
            .field("competitor_radius_m", &self.competitor_radius_m)
            .field("detail_role", &self.detail_role)
            .field("relay_url", &self.relay_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
