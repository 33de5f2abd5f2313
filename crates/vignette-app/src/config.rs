use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Demo settings, read from an optional JSON file. Every field has a
/// default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Initial inner size in logical pixels.
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// Whether the vignette is drawn at startup (toggle with `V`).
    pub vignette_enabled: bool,
    /// `env_logger` filter, e.g. `"info"` or `"vignette_gpu=debug,wgpu=warn"`.
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Vignette".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            vignette_enabled: true,
            log_filter: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid config JSON")?;
        anyhow::ensure!(
            config.width > 0 && config.height > 0,
            "window size must be non-zero, got {}×{}",
            config.width,
            config.height
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading config {}", path.display()))
    }

    /// Config from the first CLI argument, or defaults when none is given.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        match args.nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
