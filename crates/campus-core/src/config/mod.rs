use std::env;
use std::fmt;
use std::time::Duration;

use crate::content::OrderRange;

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the interaction core.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
    pub rotation: RotationConfig,
    pub wizard: WizardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url =
            env::var("APP_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let timeout_ms = read_u64("APP_API_TIMEOUT_MS", 10_000)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let rotation = RotationConfig {
            hero_interval: Duration::from_millis(read_u64("APP_HERO_INTERVAL_MS", 5_000)?),
            contact_interval: Duration::from_millis(read_u64("APP_CONTACT_INTERVAL_MS", 3_000)?),
            hero_order: read_range("APP_HERO_ORDER", OrderRange::new(1, 10))?,
            team_order: read_range("APP_TEAM_ORDER", OrderRange::new(11, 20))?,
            max_visible: read_u64("APP_MAX_VISIBLE", 3)? as usize,
            ..RotationConfig::default()
        };

        let wizard = WizardConfig {
            success_close_delay: Duration::from_millis(read_u64("APP_SUCCESS_CLOSE_MS", 2_000)?),
            ..WizardConfig::default()
        };

        Ok(Self {
            environment,
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: Duration::from_millis(timeout_ms),
            },
            telemetry: TelemetryConfig {
                log_level,
                ansi: environment == AppEnvironment::Development,
            },
            rotation,
            wizard,
        })
    }
}

fn read_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

fn read_range(key: &'static str, default: OrderRange) -> Result<OrderRange, ConfigError> {
    match env::var(key) {
        Ok(raw) => OrderRange::parse(&raw).ok_or(ConfigError::InvalidRange { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Where the backend lives and how long a single call may take.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Colored output; on only for local development.
    pub ansi: bool,
}

/// Timing, viewport, and banner-role settings for the rotation engine.
#[derive(Debug, Clone)]
pub struct RotationConfig {
    pub hero_interval: Duration,
    pub contact_interval: Duration,
    pub hero_order: OrderRange,
    pub team_order: OrderRange,
    /// Slide count at the wide breakpoint, before clamping to the item count.
    pub max_visible: usize,
    pub medium_breakpoint: u32,
    pub wide_breakpoint: u32,
    pub fade: Duration,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            hero_interval: Duration::from_millis(5_000),
            contact_interval: Duration::from_millis(3_000),
            hero_order: OrderRange::new(1, 10),
            team_order: OrderRange::new(11, 20),
            max_visible: 3,
            medium_breakpoint: 640,
            wide_breakpoint: 1024,
            fade: Duration::from_millis(700),
        }
    }
}

/// Upload limits and post-submission pacing for the application wizard.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    pub max_resume_bytes: u64,
    pub success_close_delay: Duration,
}

pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_resume_bytes: MAX_RESUME_BYTES,
            success_close_delay: Duration::from_millis(2_000),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyBaseUrl,
    InvalidNumber { key: &'static str },
    InvalidRange { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBaseUrl => write!(f, "APP_API_BASE_URL must not be empty"),
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidRange { key, value } => {
                write!(f, "{key} must look like 'START-END' (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_API_BASE_URL",
            "APP_API_TIMEOUT_MS",
            "APP_LOG_LEVEL",
            "APP_HERO_INTERVAL_MS",
            "APP_CONTACT_INTERVAL_MS",
            "APP_HERO_ORDER",
            "APP_TEAM_ORDER",
            "APP_MAX_VISIBLE",
            "APP_SUCCESS_CLOSE_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.ansi);
        assert_eq!(config.rotation.hero_interval, Duration::from_millis(5_000));
        assert_eq!(config.rotation.hero_order, OrderRange::new(1, 10));
        assert_eq!(config.wizard.max_resume_bytes, MAX_RESUME_BYTES);
    }

    #[test]
    fn trims_trailing_slash_and_reads_ranges() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_API_BASE_URL", "https://api.example.edu/");
        env::set_var("APP_TEAM_ORDER", "21-30");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://api.example.edu");
        assert_eq!(config.rotation.team_order, OrderRange::new(21, 30));
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.ansi);
        reset_env();
    }

    #[test]
    fn rejects_malformed_numbers_and_ranges() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HERO_INTERVAL_MS", "soon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidNumber {
                key: "APP_HERO_INTERVAL_MS"
            })
        ));
        reset_env();
        env::set_var("APP_HERO_ORDER", "ten");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRange { .. })
        ));
        reset_env();
    }
}
