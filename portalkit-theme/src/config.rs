//! # Theme Configuration
//!
//! Host-level knobs of the theme engine: the fallback portal, the initial
//! color mode and extra route rules. Configuration comes from code, a TOML
//! file or environment variables.
//!
//! ## Configuration file
//!
//! ```toml
//! [theme]
//! default_portal = "ispAdmin"
//! mode = "dark"
//!
//! [[theme.routes]]
//! prefix = "/support"
//! portal = "ispReseller"
//! ```
//!
//! Routes from the file are evaluated before the built-in table.
//!
//! ## Environment Variables
//!
//! - `PORTALKIT_THEME_CONFIG`: path to a TOML configuration file
//! - `PORTALKIT_THEME_MODE`: `light` or `dark`
//! - `PORTALKIT_DEFAULT_PORTAL`: portal key used when no route matches
//!
//! Environment values override the file.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::id::{ColorMode, PortalId};
use crate::routing::{RouteClassifier, RouteRule, DEFAULT_PORTAL};

/// Environment variable naming a configuration file.
pub const ENV_CONFIG: &str = "PORTALKIT_THEME_CONFIG";
/// Environment variable overriding the initial color mode.
pub const ENV_MODE: &str = "PORTALKIT_THEME_MODE";
/// Environment variable overriding the default portal.
pub const ENV_DEFAULT_PORTAL: &str = "PORTALKIT_DEFAULT_PORTAL";

/// Theme engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Portal for paths no rule matches.
    pub default_portal: PortalId,
    /// Color mode used when the host has no mode switch of its own.
    pub mode: ColorMode,
    /// Rules evaluated before the built-in route table.
    pub routes: Vec<RouteRule>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeSection {
    default_portal: Option<String>,
    mode: Option<String>,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    prefix: String,
    portal: String,
}

impl ThemeConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            default_portal: DEFAULT_PORTAL,
            mode: ColorMode::Light,
            routes: Vec::new(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::ConfigNotFound(path.to_path_buf()));
        }
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::parse_error(path, "unsupported format, use .toml"));
        }

        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content).map_err(|e| match e {
            ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
            other => other,
        })
    }

    /// Load configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        Self::parse_toml(content)
    }

    fn parse_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ThemeError::Serialization(e.to_string()))?;
        let section = file.theme;

        let mut config = Self::new();
        if let Some(portal) = section.default_portal {
            config.default_portal = PortalId::parse_key(&portal)?;
        }
        if let Some(mode) = section.mode {
            config.mode = mode.parse()?;
        }
        config.routes = section
            .routes
            .into_iter()
            .map(|raw| PortalId::parse_key(&raw.portal).map(|portal| RouteRule::new(raw.prefix, portal)))
            .collect::<ThemeResult<Vec<_>>>()?;

        Ok(config)
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> ThemeResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from the environment, falling back to defaults on error.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("Ignoring invalid theme configuration: {}", e);
            Self::new()
        })
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ThemeResult<Self> {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(path)?,
            None => Self::new(),
        };
        if let Some(mode) = lookup(ENV_MODE) {
            config.mode = mode.parse()?;
        }
        if let Some(portal) = lookup(ENV_DEFAULT_PORTAL) {
            config.default_portal = PortalId::parse_key(portal.trim())?;
        }
        Ok(config)
    }

    /// Set the default portal.
    pub fn with_default_portal(mut self, portal: PortalId) -> Self {
        self.default_portal = portal;
        self
    }

    /// Set the initial color mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a route rule evaluated before the built-in table.
    pub fn with_route(mut self, prefix: impl Into<String>, portal: PortalId) -> Self {
        self.routes.push(RouteRule::new(prefix, portal));
        self
    }

    /// Build the route classifier described by this configuration.
    pub fn classifier(&self) -> RouteClassifier {
        RouteClassifier::new()
            .with_leading_rules(self.routes.iter().cloned())
            .with_default_portal(self.default_portal)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new()
    }
}
