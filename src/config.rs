use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

use crate::common::ConfigError;

/// Server settings: the Leptos options from `Cargo.toml` plus environment
/// overrides.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Loads `.env` if present, reads `[package.metadata.leptos]` and
    /// applies `BIND_ADDR`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let bind_addr = resolve_bind_addr(
            conf.leptos_options.site_addr,
            std::env::var("BIND_ADDR").ok().as_deref(),
        )?;

        Ok(Self {
            leptos_options: conf.leptos_options,
            bind_addr,
        })
    }

    pub fn site_root(&self) -> String {
        self.leptos_options.site_root.to_string()
    }
}

/// An explicit, non-blank override wins over the configured site address.
pub fn resolve_bind_addr(
    site_addr: SocketAddr,
    override_value: Option<&str>,
) -> Result<SocketAddr, ConfigError> {
    match override_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: value.to_string(),
                source,
            }),
        None => Ok(site_addr),
    }
}
