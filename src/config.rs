// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATA_DIR` | Directory holding the user database | `./data` |
//! | `STRK_NGN_RATE` | NGN per STRK shown on transfer summaries | `1700` |
//! | `JWT_SECRET` | HS256 secret for access tokens | `defaultSecret` |
//! | `TOKEN_TTL_SECS` | Access token lifetime | `300` |
//! | `PIN_HASH_ITERATIONS` | PBKDF2 work factor | `100000` |
//! | `TLS_CERT_PATH` | PEM certificate chain; enables HTTPS with `TLS_KEY_PATH` | unset |
//! | `TLS_KEY_PATH` | PEM private key | unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::security::DEFAULT_ITERATIONS;
use crate::storage::paths::DATA_ROOT;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the data directory path.
///
/// The user/wallet database (`users.redb`) lives directly under it.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the STRK → NGN rate.
///
/// The rate is fixed for the lifetime of the process; there is no live feed.
pub const RATE_ENV: &str = "STRK_NGN_RATE";

pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";
pub const PIN_HASH_ITERATIONS_ENV: &str = "PIN_HASH_ITERATIONS";
pub const TLS_CERT_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STRK_NGN_RATE: i64 = 1700;

/// Signing secret used when `JWT_SECRET` is unset. Development only.
pub const DEFAULT_JWT_SECRET: &str = "defaultSecret";
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 300;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{TLS_CERT_ENV} and {TLS_KEY_ENV} must be set together")]
    PartialTls,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Certificate and key for HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub strk_ngn_rate: Decimal,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub pin_hash_iterations: u32,
    pub tls: Option<TlsPaths>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            data_dir: PathBuf::from(DATA_ROOT),
            strk_ngn_rate: Decimal::from(DEFAULT_STRK_NGN_RATE),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            pin_hash_iterations: DEFAULT_ITERATIONS,
            tls: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port: u16 = parse_or(&lookup, PORT_ENV, DEFAULT_PORT)?;
        let bind_addr = SocketAddr::from_str(&format!("{host}:{port}")).map_err(|_| {
            ConfigError::Invalid {
                name: HOST_ENV,
                value: host.clone(),
            }
        })?;

        let strk_ngn_rate = match lookup(RATE_ENV) {
            Some(value) => Decimal::from_str(value.trim()).map_err(|_| ConfigError::Invalid {
                name: RATE_ENV,
                value,
            })?,
            None => Decimal::from(DEFAULT_STRK_NGN_RATE),
        };
        if strk_ngn_rate <= Decimal::ZERO {
            return Err(ConfigError::NotPositive(RATE_ENV));
        }

        let token_ttl_secs = parse_or(&lookup, TOKEN_TTL_ENV, DEFAULT_TOKEN_TTL_SECS)?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::NotPositive(TOKEN_TTL_ENV));
        }

        let pin_hash_iterations = parse_or(&lookup, PIN_HASH_ITERATIONS_ENV, DEFAULT_ITERATIONS)?;
        if pin_hash_iterations == 0 {
            return Err(ConfigError::NotPositive(PIN_HASH_ITERATIONS_ENV));
        }

        let tls = match (lookup(TLS_CERT_ENV), lookup(TLS_KEY_ENV)) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialTls),
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref() {
            Some("json") => LogFormat::Json,
            Some("pretty") | None => LogFormat::Pretty,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: LOG_FORMAT_ENV,
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            bind_addr,
            data_dir: lookup(DATA_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DATA_ROOT)),
            strk_ngn_rate,
            jwt_secret: lookup(JWT_SECRET_ENV).unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            token_ttl_secs,
            pin_hash_iterations,
            tls,
            log_format,
        })
    }

    /// Whether the development signing secret is in use.
    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
