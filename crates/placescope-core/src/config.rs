use crate::app_config::{AppConfig, DetailRole, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Provider keys that are unset leave the
/// matching adapter in fallback mode rather than failing startup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("radius must be a positive number of meters, got {raw}"),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("PLACESCOPE_ENV", "development"));
    let log_level = or_default("PLACESCOPE_LOG_LEVEL", "info");

    // The map-widget key variable is accepted as a fallback name for the catalog key.
    let catalog_api_key =
        optional("PLACESCOPE_CATALOG_API_KEY").or_else(|| optional("PLACESCOPE_MAP_KEY"));
    let catalog_base_url = or_default(
        "PLACESCOPE_CATALOG_BASE_URL",
        "https://catalog.api.2gis.com",
    );
    let catalog_locale = or_default("PLACESCOPE_CATALOG_LOCALE", "ru_KZ");

    let search_api_key = optional("PLACESCOPE_SEARCH_API_KEY");
    let search_engine_id = optional("PLACESCOPE_SEARCH_ENGINE_ID");
    let search_base_url = or_default("PLACESCOPE_SEARCH_BASE_URL", "https://www.googleapis.com");

    let default_city = or_default("PLACESCOPE_DEFAULT_CITY", "Almaty");
    let region = or_default("PLACESCOPE_REGION", "Kazakhstan");

    let search_timeout_secs = parse_u64("PLACESCOPE_SEARCH_TIMEOUT_SECS", "8")?;
    let details_timeout_secs = parse_u64("PLACESCOPE_DETAILS_TIMEOUT_SECS", "5")?;
    let competitor_radius_m = parse_radius("PLACESCOPE_COMPETITOR_RADIUS_M", "500")?;
    let detail_role = parse_detail_role(&or_default("PLACESCOPE_DETAIL_ROLE", "secondary"))?;

    let relay_url = optional("PLACESCOPE_RELAY_URL");
    let user_agent = or_default("PLACESCOPE_USER_AGENT", "placescope/0.1 (venue-visibility)");

    Ok(AppConfig {
        env,
        log_level,
        catalog_api_key,
        catalog_base_url,
        catalog_locale,
        search_api_key,
        search_engine_id,
        search_base_url,
        default_city,
        region,
        search_timeout_secs,
        details_timeout_secs,
        competitor_radius_m,
        detail_role,
        relay_url,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_detail_role(s: &str) -> Result<DetailRole, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "primary" => Ok(DetailRole::Primary),
        "secondary" => Ok(DetailRole::Secondary),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOPE_DETAIL_ROLE".to_string(),
            reason: format!("expected \"primary\" or \"secondary\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
