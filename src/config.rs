//! Application Configuration
//!
//! Backend location and UI constants, resolved at compile time.

/// Default backend when `MYFOOD_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "https://assignment-11-flame.vercel.app";

/// Page sizes offered by the listing's page-size selector
pub const PAGE_SIZES: &[usize] = &[5, 10];

/// Page size used on first render
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Image shown for food items without one
pub const FALLBACK_FOOD_IMAGE: &str = "https://images.unsplash.com/photo-1546069901-ba9599a7e63c";

/// Delay before the anonymous login button appears (ms)
pub const LOGIN_BUTTON_DELAY_MS: u32 = 1_000;

/// Lifetime of a toast notification (ms)
pub const TOAST_LIFETIME_MS: u32 = 3_000;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    pub log_level: log::LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(option_env!("MYFOOD_API_BASE"), option_env!("MYFOOD_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self { api_base_url, log_level }
    }

    /// Absolute URL for a backend path such as `/allFoods`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn default_log_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Process-wide configuration
pub fn app_config() -> &'static AppConfig {
    static CONFIG: std::sync::OnceLock<AppConfig> = std::sync::OnceLock::new();
    CONFIG.get_or_init(AppConfig::from_env)
}
