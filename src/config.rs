// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Katarun Contributors

//! Runner configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runner configuration, read from `katarun.toml` when present and
/// overridable through `KATARUN_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Output directory for reports
    pub output_dir: PathBuf,
    /// Verbose output
    pub verbose: bool,
    /// Filter patterns matched against problem titles and numbers
    pub filters: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target/reports"),
            verbose: false,
            filters: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: RunnerConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from("katarun.toml").exists() {
            Self::from_file("katarun.toml")?
        } else {
            Self::default()
        };

        if let Ok(output_dir) = std::env::var("KATARUN_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(verbose) = std::env::var("KATARUN_VERBOSE") {
            config.verbose = verbose.parse().unwrap_or(false);
        }

        Ok(config)
    }
}
