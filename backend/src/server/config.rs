//! HTTP server configuration read from the process environment.
//!
//! This module centralises the environment-driven listener settings so they
//! are validated consistently and can be tested in isolation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use mockable::Env;

const BIND_ADDR_ENV: &str = "RECORD_BIND_ADDR";
const WORKERS_ENV: &str = "RECORD_WORKERS";
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);
const BIND_ADDR_EXPECTED: &str = "a socket address such as 127.0.0.1:8080";
const WORKERS_EXPECTED: &str = "a positive integer";

/// Listener settings for the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured worker cap, if any.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(
            dead_code,
            reason = "Exercised by unit tests; retained for fixture access"
        )
    )]
    #[must_use]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }
}

/// Errors raised while validating the server configuration.
#[derive(thiserror::Error, Debug)]
pub enum ServerConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build the server configuration from environment variables.
///
/// `RECORD_BIND_ADDR` selects the listening socket and defaults to
/// `127.0.0.1:8080`; `RECORD_WORKERS` caps the Actix worker count and
/// defaults to one worker per core.
///
/// # Errors
/// Returns [`ServerConfigError::InvalidEnv`] when a variable is set to a
/// value that does not parse.
pub fn server_config_from_env<E: Env>(env: &E) -> Result<ServerConfig, ServerConfigError> {
    let bind_addr = bind_addr_from_env(env)?;
    let workers = workers_from_env(env)?;
    Ok(ServerConfig { bind_addr, workers })
}

fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ServerConfigError> {
    match env.string(BIND_ADDR_ENV) {
        Some(value) => value.parse().map_err(|_| ServerConfigError::InvalidEnv {
            name: BIND_ADDR_ENV,
            value,
            expected: BIND_ADDR_EXPECTED,
        }),
        None => Ok(DEFAULT_BIND_ADDR),
    }
}

fn workers_from_env<E: Env>(env: &E) -> Result<Option<usize>, ServerConfigError> {
    match env.string(WORKERS_ENV) {
        Some(value) => match value.parse::<usize>() {
            Ok(workers) if workers > 0 => Ok(Some(workers)),
            _ => Err(ServerConfigError::InvalidEnv {
                name: WORKERS_ENV,
                value,
                expected: WORKERS_EXPECTED,
            }),
        },
        None => Ok(None),
    }
}
