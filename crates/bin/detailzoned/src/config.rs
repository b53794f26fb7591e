//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `detailzone.toml` in the working directory (or the path in
//! `DETAILZONE_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use detailzone_domain::city::ServiceCity;
use detailzone_domain::error::ValidationError;
use detailzone_domain::geo::{Coordinate, GeoBounds};
use detailzone_domain::service_area::ServiceArea;

const DEFAULT_PATH: &str = "detailzone.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cities and region bounds the business serves.
    pub service_area: ServiceAreaConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Service-area configuration.
///
/// Replacing `cities` in the file replaces the whole default list.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceAreaConfig {
    pub bounds: GeoBounds,
    pub cities: Vec<CityConfig>,
}

/// One `[[service_area.cities]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CityConfig {
    /// Defaults to `"{city_name}, {state_code}"`.
    pub display_name: Option<String>,
    pub city_name: String,
    pub state_code: String,
    /// `[longitude, latitude]` of the city center.
    pub center: Option<Coordinate>,
}

impl Config {
    /// Load configuration from `detailzone.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("DETAILZONE_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DETAILZONE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("DETAILZONE_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("DETAILZONE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("DETAILZONE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.service_area()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the validated [`ServiceArea`] described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ServiceArea`] when the bounds or a city entry
    /// break a domain invariant.
    pub fn service_area(&self) -> Result<ServiceArea, ConfigError> {
        let cities = self
            .service_area
            .cities
            .iter()
            .cloned()
            .map(CityConfig::into_city)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ServiceArea::new(cities, self.service_area.bounds)?)
    }
}

impl CityConfig {
    fn new(city_name: &str, center: [f64; 2]) -> Self {
        Self {
            display_name: None,
            city_name: city_name.to_string(),
            state_code: "CA".to_string(),
            center: Some(center.into()),
        }
    }

    fn into_city(self) -> Result<ServiceCity, ValidationError> {
        let mut builder = ServiceCity::builder()
            .city_name(self.city_name)
            .state_code(self.state_code);
        if let Some(display_name) = self.display_name {
            builder = builder.display_name(display_name);
        }
        if let Some(center) = self.center {
            builder = builder.center(center);
        }
        builder.build()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "detailzoned=info,detailzone=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ServiceAreaConfig {
    fn default() -> Self {
        Self {
            bounds: GeoBounds {
                north: 38.95,
                south: 38.20,
                west: -122.10,
                east: -121.00,
            },
            cities: vec![
                CityConfig::new("Davis", [-121.7405, 38.5449]),
                CityConfig::new("Woodland", [-121.7733, 38.6785]),
                CityConfig::new("Dixon", [-121.8233, 38.4455]),
                CityConfig::new("Winters", [-121.9700, 38.5249]),
                CityConfig::new("West Sacramento", [-121.5302, 38.5805]),
                CityConfig::new("Sacramento", [-121.4944, 38.5816]),
            ],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// The service area breaks a domain invariant.
    #[error("invalid service area")]
    ServiceArea(#[from] ValidationError),
}
