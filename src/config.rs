// src/config.rs
//! Service settings for the HTTP surface.
//!
//! Only the outer service is configurable. The Rule Table, weights and
//! thresholds are code.
//!
//! Resolution order:
//! 1) $CATEGORIZER_CONFIG_PATH (must exist)
//! 2) config/categorizer.toml
//! 3) built-in defaults
//!
//! Env overrides applied afterwards: CATEGORIZER_MAX_BATCH, DEBUG_ROUTES=1.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config/categorizer.toml";
pub const ENV_CONFIG_PATH: &str = "CATEGORIZER_CONFIG_PATH";
pub const ENV_MAX_BATCH: &str = "CATEGORIZER_MAX_BATCH";
pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";

pub const DEFAULT_MAX_BATCH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub max_batch: usize,
    pub cors_permissive: bool,
    pub debug_routes: bool,
    pub metrics: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_batch: DEFAULT_MAX_BATCH,
            cors_permissive: true,
            debug_routes: false,
            metrics: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigRoot {
    #[serde(default)]
    service: ServiceConfig,
}

impl ServiceConfig {
    /// Parse a TOML document with a `[service]` table (missing keys default).
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let root: ConfigRoot = toml::from_str(s)?;
        Ok(root.service)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading service config from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing service config at {}", path.display()))
    }

    /// File (env path, default path, or none) plus env overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from(&default_p)?
            } else {
                info!("no service config file found, using defaults");
                Self::default()
            }
        };

        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(n) = parse_max_batch_env(std::env::var(ENV_MAX_BATCH).ok()) {
            self.max_batch = n;
        }
        if std::env::var(ENV_DEBUG_ROUTES).ok().as_deref() == Some("1") {
            self.debug_routes = true;
        }
    }
}

// positive integers only; anything else leaves the configured value alone
fn parse_max_batch_env(raw: Option<String>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
}
