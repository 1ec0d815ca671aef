use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_VALIDITY_DAYS: u16 = 90;
const DEFAULT_CURRENCY: &str = "AED";

/// Deployment stage the service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "staging" | "stage" => Self::Staging,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the credit service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub lending: LendingConfig,
}

impl AppConfig {
    /// Read configuration from the process environment, loading `.env` first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let lending = LendingConfig {
            assessment_validity_days: parse_validity_days(
                env::var("APP_ASSESSMENT_VALIDITY_DAYS").ok(),
            )?,
            default_currency: parse_currency(env::var("APP_DEFAULT_CURRENCY").ok())?,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            lending,
        })
    }
}

fn parse_validity_days(raw: Option<String>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_VALIDITY_DAYS);
    };

    match raw.trim().parse::<u16>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(ConfigError::InvalidValidityDays { value: raw }),
    }
}

fn parse_currency(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_CURRENCY.to_string());
    };

    let code = raw.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ConfigError::InvalidCurrency { value: raw })
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

/// Log filter controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Lending policy dials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LendingConfig {
    /// Days a registration credit assessment stays valid.
    pub assessment_validity_days: u16,
    /// ISO 4217 code applied when an application omits its currency.
    pub default_currency: String,
}

impl Default for LendingConfig {
    fn default() -> Self {
        Self {
            assessment_validity_days: DEFAULT_VALIDITY_DAYS,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidValidityDays { value: String },
    InvalidCurrency { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidValidityDays { value } => write!(
                f,
                "APP_ASSESSMENT_VALIDITY_DAYS must be a positive number of days (got '{value}')"
            ),
            ConfigError::InvalidCurrency { value } => write!(
                f,
                "APP_DEFAULT_CURRENCY must be a three letter currency code (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidValidityDays { .. }
            | ConfigError::InvalidCurrency { .. } => None,
        }
    }
}
