// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use vauchi_pinning::PinningConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// JSON pin configuration file.
    pub config_path: Option<PathBuf>,
    /// Pins given on the command line.
    pub pins: Vec<String>,
}

impl CliConfig {
    /// Pins from the config file followed by pins from the command line.
    pub fn pinning_config(&self) -> Result<PinningConfig> {
        let mut config = match &self.config_path {
            Some(path) => PinningConfig::load(path)
                .with_context(|| format!("Failed to load pin config {:?}", path))?,
            None => PinningConfig::default(),
        };
        config.pinned_key_hashes.extend(self.pins.iter().cloned());
        Ok(config)
    }
}
