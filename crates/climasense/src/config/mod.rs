use crate::risk::{ForecastTuning, RiskEngineConfig};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub engine: EngineSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CLIMASENSE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("CLIMASENSE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("CLIMASENSE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("CLIMASENSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let engine = EngineSettings {
            forecast_drift: optional_f64("CLIMASENSE_FORECAST_DRIFT")?,
            forecast_jitter: optional_f64("CLIMASENSE_FORECAST_JITTER")?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine,
        })
    }
}

fn optional_f64(name: &'static str) -> Result<Option<f64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name }),
        Err(_) => Ok(None),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Environment overrides for the risk engine's tunable knobs. Scoring
/// formulas and thresholds are fixed; only the forecast drift and jitter
/// accept overrides.
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub forecast_drift: Option<f64>,
    pub forecast_jitter: Option<f64>,
}

impl EngineSettings {
    pub fn engine_config(&self) -> RiskEngineConfig {
        let defaults = ForecastTuning::default();
        RiskEngineConfig {
            forecast: ForecastTuning {
                drift_per_day: self.forecast_drift.unwrap_or(defaults.drift_per_day),
                daily_jitter: self.forecast_jitter.unwrap_or(defaults.daily_jitter),
            },
            ..RiskEngineConfig::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "CLIMASENSE_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "CLIMASENSE_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { name } => {
                write!(f, "{name} must be a valid floating point number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

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
        env::remove_var("CLIMASENSE_ENV");
        env::remove_var("CLIMASENSE_HOST");
        env::remove_var("CLIMASENSE_PORT");
        env::remove_var("CLIMASENSE_LOG_LEVEL");
        env::remove_var("CLIMASENSE_FORECAST_DRIFT");
        env::remove_var("CLIMASENSE_FORECAST_JITTER");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.engine.engine_config().forecast,
            ForecastTuning::default()
        );
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CLIMASENSE_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8000));
    }

    #[test]
    fn forecast_overrides_flow_into_engine_config() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CLIMASENSE_FORECAST_DRIFT", "0.5");
        env::set_var("CLIMASENSE_FORECAST_JITTER", "12");
        let config = AppConfig::load().expect("config loads");
        let engine_config = config.engine.engine_config();
        assert_eq!(engine_config.forecast.drift_per_day, 0.5);
        assert_eq!(engine_config.forecast.daily_jitter, 12.0);
    }

    #[test]
    fn rejects_non_numeric_forecast_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CLIMASENSE_FORECAST_DRIFT", "steep");
        let result = AppConfig::load();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                name: "CLIMASENSE_FORECAST_DRIFT"
            })
        ));
    }
}
