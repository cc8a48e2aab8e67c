//! Configuration for parsing, routing and serving.

use std::env::VarError;
use std::net::{AddrParseError, SocketAddr};

use chrono::{Local, NaiveDate};

/// Flight id that marks a bag as arriving.
pub const DEFAULT_ARRIVAL_MARKER: &str = "ARRIVAL";

/// Node name the baggage claim terminal must be registered under.
pub const DEFAULT_BAGGAGE_CLAIM: &str = "BaggageClaim";

/// Environment variable holding the HTTP listen address.
pub const ADDR_ENV: &str = "BAGGAGE_ROUTER_ADDR";

/// Reserved tokens and dates used while building the model.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Flight id that routes a bag to baggage claim.
    pub arrival_marker: String,

    /// Registry name of the baggage claim terminal.
    pub baggage_claim: String,

    /// Date departure times are placed on.
    pub service_date: NaiveDate,
}

impl RouterConfig {
    /// Create a configuration with the given reserved tokens and date.
    pub fn new(
        arrival_marker: impl Into<String>,
        baggage_claim: impl Into<String>,
        service_date: NaiveDate,
    ) -> Self {
        Self {
            arrival_marker: arrival_marker.into(),
            baggage_claim: baggage_claim.into(),
            service_date,
        }
    }

    /// Same configuration on a different service date.
    pub fn with_service_date(mut self, service_date: NaiveDate) -> Self {
        self.service_date = service_date;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            arrival_marker: DEFAULT_ARRIVAL_MARKER.to_string(),
            baggage_claim: DEFAULT_BAGGAGE_CLAIM.to_string(),
            service_date: Local::now().date_naive(),
        }
    }
}

/// Problems reading server settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("bad listen address: {0}")]
    Addr(#[from] AddrParseError),

    #[error("{ADDR_ENV} is not valid unicode")]
    NotUnicode,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(ADDR_ENV))
    }

    /// Settings from the result of looking up [`ADDR_ENV`].
    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(addr) => Ok(Self::from_addr(&addr)?),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    /// Parse a listen address such as `0.0.0.0:8080`.
    pub fn from_addr(addr: &str) -> Result<Self, AddrParseError> {
        Ok(Self {
            addr: addr.parse()?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_router_config() {
        let config = RouterConfig::default();

        assert_eq!(config.arrival_marker, "ARRIVAL");
        assert_eq!(config.baggage_claim, "BaggageClaim");
    }

    #[test]
    fn custom_router_config() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let config = RouterConfig::new("LANDED", "Carousel", date);

        assert_eq!(config.arrival_marker, "LANDED");
        assert_eq!(config.baggage_claim, "Carousel");
        assert_eq!(config.service_date, date);
    }

    #[test]
    fn with_service_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let config = RouterConfig::default().with_service_date(date);
        assert_eq!(config.service_date, date);
        assert_eq!(config.arrival_marker, "ARRIVAL");
    }

    #[test]
    fn server_config() {
        assert_eq!(ServerConfig::default().addr.to_string(), "127.0.0.1:3000");

        let config = ServerConfig::from_addr("0.0.0.0:8080").unwrap();
        assert_eq!(config.addr.port(), 8080);

        assert!(ServerConfig::from_addr("not an address").is_err());
    }

    #[test]
    fn server_config_from_var() {
        let unset = ServerConfig::from_var(Err(VarError::NotPresent)).unwrap();
        assert_eq!(unset.addr, ServerConfig::default().addr);

        let set = ServerConfig::from_var(Ok("0.0.0.0:8080".to_string())).unwrap();
        assert_eq!(set.addr.port(), 8080);

        let err = ServerConfig::from_var(Ok("nonsense".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::Addr(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_addr_is_an_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0x30, 0xff, 0x3a, 0x31]);
        let err = ServerConfig::from_var(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode));
        assert_eq!(err.to_string(), "BAGGAGE_ROUTER_ADDR is not valid unicode");
    }
}
