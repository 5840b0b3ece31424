// Process configuration, read once from the environment at startup.

use crate::shared::infrastructure::codec::{CodecRegistry, UnknownCodec};
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const ADDR_VAR: &str = "EVENT_COLLECTOR_ADDR";
pub const CODECS_VAR: &str = "EVENT_COLLECTOR_CODECS";

const DEFAULT_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_CODECS: &str = "gzip,zstd";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("EVENT_COLLECTOR_ADDR: invalid listen address {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("EVENT_COLLECTOR_CODECS: {0}")]
    InvalidCodecs(#[from] UnknownCodec),
}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub codecs: CodecRegistry,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr =
            raw_addr
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddr {
                    value: raw_addr.clone(),
                    source,
                })?;

        let codecs = lookup(CODECS_VAR).unwrap_or_else(|| DEFAULT_CODECS.to_string());
        let codecs = CodecRegistry::from_names(codecs.split(','))?;

        Ok(Self { addr, codecs })
    }
}
