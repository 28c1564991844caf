use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;
use ticklist_config::{
    DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_PORT, PORT, TICKLIST_CORS_ORIGIN,
    TICKLIST_DATABASE_PATH, TICKLIST_HOST, TICKLIST_PORT, TICKLIST_SEED_DEMO_DATA,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(#[from] AddrParseError),
    #[error("Invalid boolean for {name}: {value}")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    pub database_path: PathBuf,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var(TICKLIST_HOST)
            .unwrap_or_else(|_| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()?;

        // TICKLIST_PORT wins over the legacy PORT
        let port = match env::var(TICKLIST_PORT).or_else(|_| env::var(PORT)) {
            Ok(port_str) => port_str.trim().parse::<u16>()?,
            Err(_) => DEFAULT_PORT,
        };

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var(TICKLIST_CORS_ORIGIN).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        let database_path = env::var(TICKLIST_DATABASE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| ticklist_storage::default_database_path());

        let seed_demo_data = parse_bool(TICKLIST_SEED_DEMO_DATA, true)?;

        Ok(Config {
            host,
            port,
            cors_origin,
            database_path,
            seed_demo_data,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidBool { name, value }),
        },
        Err(_) => Ok(default),
    }
}
