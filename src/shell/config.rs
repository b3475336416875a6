use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PRODUCTS_FILE: &str = "productos.json";
pub const DEFAULT_CARTS_FILE: &str = "carrito.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub products_file: PathBuf,
    pub carts_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            carts_file: PathBuf::from(DEFAULT_CARTS_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `SHOP_HOST`, `SHOP_PORT`, `SHOP_PRODUCTS_FILE` and `SHOP_CARTS_FILE`
    /// through `lookup`, falling back to the defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("SHOP_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "SHOP_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup("SHOP_HOST").unwrap_or(defaults.host),
            port,
            products_file: lookup("SHOP_PRODUCTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.products_file),
            carts_file: lookup("SHOP_CARTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.carts_file),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
