//! `homepage.toml` loading and merging with command-line flags.
//!
//! ```toml
//! source = "data/home.json"
//!
//! [render]
//! trust_richtext = true
//! unknown_sections = "fallback"   # or "skip"
//! feature_label = "Principal Note"
//! feature_image = "img/slider_5.png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use home_render::config::DEFAULT_SOURCE;
use home_render::{ContentSource, RenderConfig, UnknownSectionPolicy};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "homepage.toml";

/// Config file format.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub source: Option<String>,
    pub render: RenderConfig,
}

/// Flags that override config file settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub unknown_sections: Option<UnknownSectionPolicy>,
    pub untrusted_richtext: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: ContentSource,
    pub render: RenderConfig,
}

/// Read a config file. A missing file is not an error.
pub fn load_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(Some(config))
}

/// Load the explicit config, or the default one if present.
pub fn load_for(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => {
            anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
            load_config(path)
        }
        None => load_config(&PathBuf::from(DEFAULT_CONFIG_FILE)),
    }
}

/// Flags beat the file, the file beats defaults.
pub fn resolve(overrides: &Overrides, file: Option<Config>) -> Resolved {
    let file = file.unwrap_or_default();
    let raw_source = overrides
        .source
        .clone()
        .or(file.source)
        .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let mut render = file.render;
    if let Some(policy) = overrides.unknown_sections {
        render.unknown_sections = policy;
    }
    if overrides.untrusted_richtext {
        render.trust_richtext = false;
    }

    Resolved {
        source: ContentSource::parse(&raw_source),
        render,
    }
}
