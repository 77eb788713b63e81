//! Core domain: startup configuration read from assets/config.ron.

use bevy::log::Level;
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::content::ron_options;

pub const CONFIG_PATH: &str = "assets/config.ron";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hollowreach".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Fixed simulation rate. Every tuning value is per tick.
    pub tick_hz: f64,
    pub log_level: String,
    /// Extra tracing directives, e.g. "wgpu=error,hollowreach=debug"
    pub log_filter: String,
    pub content_dir: String,
    pub save_path: String,
    /// Fixed seed for AI timers; a random one is drawn when absent.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_hz: 60.0,
            log_level: "info".to_string(),
            log_filter: "wgpu=error,naga=warn".to_string(),
            content_dir: "assets/data".to_string(),
            save_path: "savegame.json".to_string(),
            rng_seed: None,
        }
    }
}

#[derive(Debug)]
pub struct ConfigLoadError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load config {}: {}", self.path, self.message)
    }
}

impl GameConfig {
    pub fn parse(path: &str, contents: &str) -> Result<Self, ConfigLoadError> {
        let config: GameConfig = ron_options()
            .from_str(contents)
            .map_err(|e| ConfigLoadError {
                path: path.to_string(),
                message: format!("Parse error: {}", e),
            })?;

        if !(config.tick_hz > 0.0) {
            return Err(ConfigLoadError {
                path: path.to_string(),
                message: format!("tick_hz must be positive, got {}", config.tick_hz),
            });
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
            path: name.clone(),
            message: format!("IO error: {}", e),
        })?;
        Self::parse(&name, &contents)
    }

    /// Load the config, or fall back to defaults. The error is handed back so
    /// it can be logged once logging is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigLoadError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Unknown level names fall back to info.
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn seed(&self) -> u64 {
        self.rng_seed.unwrap_or_else(|| rand::rng().random())
    }
}

/// Config problems found before logging started.
#[derive(Resource, Debug, Default)]
pub struct ConfigStatus {
    pub error: Option<String>,
}

pub(crate) fn report_config_status(status: Res<ConfigStatus>, config: Res<GameConfig>) {
    match &status.error {
        Some(error) => warn!("{}; using default configuration", error),
        None => info!(
            "Config loaded: {} Hz, content from {}",
            config.tick_hz, config.content_dir
        ),
    }
}
