//! CLI command implementations

pub mod bounce;
pub mod play;
pub mod scene;

use anyhow::{Context, Result};
use clap::Args;
use rebound_animation::BounceParameters;
use rebound_core::{BounceConfig, BounceStrategy};
use std::path::Path;

/// Inputs shared by every command that builds a bounce curve.
#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    /// Drop height above the resting position
    #[arg(long, default_value = "10")]
    pub amplitude: f64,

    /// Playback duration in milliseconds
    #[arg(long, default_value = "4000")]
    pub duration: f64,

    /// Fraction of velocity kept after each impact (0 to 0.99)
    #[arg(long, default_value = "0.7")]
    pub bounce_factor: f64,

    /// Curve algorithm (physics, geometric, eased or debug); overrides the config file
    #[arg(long)]
    pub strategy: Option<String>,

    /// Path to a bounce config TOML file
    #[arg(long)]
    pub config: Option<String>,
}

impl CurveArgs {
    pub fn params(&self) -> BounceParameters {
        BounceParameters::new(self.amplitude, self.duration, self.bounce_factor)
    }

    /// Load the config file (or defaults) and apply the `--strategy` override.
    pub fn config(&self) -> Result<BounceConfig> {
        let mut config = match &self.config {
            Some(path) => BounceConfig::load_from_file(Path::new(path))
                .with_context(|| format!("Failed to load config {}", path))?,
            None => BounceConfig::default(),
        };
        if let Some(name) = &self.strategy {
            config.strategy = name.parse::<BounceStrategy>()?;
        }
        Ok(config)
    }
}

/// Horizontal bar for a height, `width` characters at `max`.
pub fn height_bar(height: f64, max: f64, width: usize) -> String {
    if !(max > 0.0) {
        return String::new();
    }
    let filled = ((height / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    "#".repeat(filled)
}
