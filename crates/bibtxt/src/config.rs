/*
 * config.rs
 * Copyright (c) 2025 bibtxt contributors
 *
 * Optional YAML configuration
 */

//! Optional `bibtxt.yml` settings.
//!
//! ```yaml
//! title: Works Cited
//! signature: "Compiled {date}."
//! ```
//!
//! Command-line flags take precedence over the file, which takes precedence
//! over the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bibtxt_core::RenderOptions;
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "bibtxt.yml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub signature: Option<String>,
}

impl ConfigFile {
    /// Load `explicit`, or `bibtxt.yml` if present, or nothing.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigFile> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if !path.is_file() {
                    return Ok(ConfigFile::default());
                }
                path
            }
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = ConfigFile::parse(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<ConfigFile> {
        // An empty document deserializes to unit, not a mapping.
        if text.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Layer this file, then `title_flag`, over `options`.
    pub fn apply(&self, mut options: RenderOptions, title_flag: Option<&str>) -> RenderOptions {
        if let Some(title) = title_flag.or(self.title.as_deref()) {
            options = options.with_title(title);
        }
        if let Some(signature) = &self.signature {
            options = options.with_signature(signature.as_str());
        }
        options
    }
}
