// config.rs
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_PROVIDER_URL: &str = "https://api.realworks.nl";

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

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Top-level configuration, loaded once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub provider: UpstreamConfig,
    pub cache: UpstreamConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let max_workers = env::var("APP_MAX_WORKERS")
            .unwrap_or_else(|_| "8".to_string())
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidWorkers)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let provider = UpstreamConfig {
            base_url: env::var("PROVIDER_API_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string()),
            authorization: Some(format!("rwauth {}", required("PROVIDER_AUTH_TOKEN")?)),
        };

        let cache = UpstreamConfig {
            base_url: required("CACHE_API_URL")?,
            authorization: optional("CACHE_AUTH_TOKEN").map(|token| format!("Bearer {token}")),
        };

        let admin = AdminConfig {
            username: required("ADMIN_USERNAME")?,
            password: required("ADMIN_PASSWORD")?,
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                max_workers,
            },
            telemetry: TelemetryConfig { log_level },
            provider,
            cache,
            admin,
        })
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
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

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// One upstream HTTP API: where it lives and the full `Authorization` value.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidWorkers,
    InvalidHost { source: std::net::AddrParseError },
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidWorkers => {
                write!(f, "APP_MAX_WORKERS must be a positive integer")
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::Missing(name) => write!(f, "{name} must be set"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
