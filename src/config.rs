//! Resolver configuration loaded from TOML.
//!
//! ```toml
//! [resolver]
//! root = "/var/www/static"
//! ```
//!
//! Omitting `root` (or the whole `[resolver]` table) bounds resolution by
//! the working directory at each call.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::PathResolver;

/// Root configuration struct.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// `[resolver]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Trusted root directory. Relative values are taken against the
    /// working directory at resolution time.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax or unknown keys
    /// - The resulting configuration fails [`ResolverConfig::validate`]
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid TOML, unknown keys, or an invalid root.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid resolver configuration")?;
        config.resolver.validate()?;
        Ok(config)
    }
}

impl ResolverConfig {
    /// Check the configured root.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is set but empty or contains a NUL byte.
    pub fn validate(&self) -> Result<()> {
        let Some(root) = &self.root else {
            return Ok(());
        };

        if root.as_os_str().is_empty() {
            bail!("resolver.root cannot be empty (omit it to use the working directory)");
        }

        if root.to_string_lossy().contains('\0') {
            bail!("resolver.root contains null bytes");
        }

        Ok(())
    }

    /// Build a resolver from this configuration.
    #[must_use]
    pub fn resolver(&self) -> PathResolver {
        match &self.root {
            Some(root) => PathResolver::new(root.clone()),
            None => PathResolver::current_dir(),
        }
    }
}
