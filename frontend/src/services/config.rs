use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Session key holding the administrator identifier written at login
pub const ADMIN_ID_KEY: &str = "userAdminId";

/// Session key holding the cached category list snapshot
pub const CATEGORIES_CACHE_KEY: &str = "cached_categories";

/// One hour
pub const CATEGORIES_CACHE_TTL_MS: i64 = 3_600_000;

/// Runtime configuration, resolved at build time from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
    pub cache_ttl_ms: i64,
}

impl AppConfig {
    /// Reads `CATEGORY_API_URL` and `CATEGORY_LOG_LEVEL` as captured by the compiler
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CATEGORY_API_URL"), option_env!("CATEGORY_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::Info);

        Self {
            api_base_url,
            log_level,
            cache_ttl_ms: CATEGORIES_CACHE_TTL_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
