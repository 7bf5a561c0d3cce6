use std::net::SocketAddr;

use serde::Deserialize;
use hotspot_core::error::{HotspotError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub recommendations: RecommendationsSection,

    #[serde(default)]
    pub catalog: CatalogSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            recommendations: RecommendationsSection::default(),
            catalog: CatalogSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HotspotError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.recommendations.validate()?;
        self.catalog.validate()?;

        Ok(())
    }

    /// Apply `HOTSPOT_HOST` / `HOTSPOT_PORT` style overrides to `server.listen`.
    pub fn apply_listen_overrides(&mut self, host: Option<&str>, port: Option<&str>) -> Result<()> {
        if host.is_none() && port.is_none() {
            return Ok(());
        }

        let current = self.server.listen_addr()?;
        let host = host.map(str::to_owned).unwrap_or_else(|| current.ip().to_string());
        let port: u16 = match port {
            Some(p) => p
                .parse()
                .map_err(|_| HotspotError::BadRequest(format!("invalid port override: {p}")))?,
            None => current.port(),
        };

        // bracket bare IPv6 hosts so "host:port" parses
        let listen = if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{port}")
        } else {
            format!("{host}:{port}")
        };

        self.server.listen = listen;
        self.server.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            HotspotError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8081".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendationsSection {
    #[serde(default = "default_genre")]
    pub default_genre: String,

    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for RecommendationsSection {
    fn default() -> Self {
        Self {
            default_genre: default_genre(),
            default_limit: default_limit(),
        }
    }
}

impl RecommendationsSection {
    pub fn validate(&self) -> Result<()> {
        if self.default_genre.trim().is_empty() {
            return Err(HotspotError::BadRequest(
                "recommendations.default_genre must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_genre() -> String {
    "Action".into()
}
fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    /// JSON array of records replacing the built-in fixture.
    #[serde(default)]
    pub path: Option<String>,
}

impl CatalogSection {
    pub fn validate(&self) -> Result<()> {
        if matches!(self.path.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(HotspotError::BadRequest("catalog.path must not be empty".into()));
        }
        Ok(())
    }
}
