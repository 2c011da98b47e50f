//! Tuning constants for bounce curve synthesis, loadable from TOML
//!
//! ```toml
//! strategy = "PhysicsSimulated"
//! base_rate = 60
//! gravity = -9.8
//! rest_epsilon = 0.001
//! frame_cap = 2000
//! min_peak_height = 0.1
//! safety_cap = "Settle"
//! ```

use crate::{ReboundError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which keyframe synthesis algorithm to run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BounceStrategy {
    /// Dense per-step free-fall simulation, rescaled to the requested duration
    #[default]
    PhysicsSimulated,
    /// Sparse peak/trough keyframes with gravity easing between them
    GeometricDecay,
    /// Two keyframes driven by a bounce-out easing curve
    EasedTwoPoint,
    /// Geometric decay keyframes with plain linear interpolation
    DebugDry,
}

impl BounceStrategy {
    pub const ALL: [BounceStrategy; 4] = [
        BounceStrategy::PhysicsSimulated,
        BounceStrategy::GeometricDecay,
        BounceStrategy::EasedTwoPoint,
        BounceStrategy::DebugDry,
    ];

    /// Short name used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            BounceStrategy::PhysicsSimulated => "physics",
            BounceStrategy::GeometricDecay => "geometric",
            BounceStrategy::EasedTwoPoint => "eased",
            BounceStrategy::DebugDry => "debug",
        }
    }
}

impl fmt::Display for BounceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for BounceStrategy {
    type Err = ReboundError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "physics" | "physicssimulated" => Ok(BounceStrategy::PhysicsSimulated),
            "geometric" | "geometricdecay" => Ok(BounceStrategy::GeometricDecay),
            "eased" | "easedtwopoint" => Ok(BounceStrategy::EasedTwoPoint),
            "debug" | "debugdry" => Ok(BounceStrategy::DebugDry),
            other => Err(ReboundError::invalid(
                "strategy",
                format!("'{}' is not one of physics, geometric, eased, debug", other),
            )),
        }
    }
}

/// What to do when a curve has not come to rest by `frame_cap`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SafetyCapPolicy {
    /// Replace the last sample with the base height so the object lands
    #[default]
    Settle,
    /// Keep the samples as generated; the object may stop mid-air
    Truncate,
    /// Reject the curve with `SafetyCapExceeded`
    Fail,
}

/// Tuning constants for the bounce generators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    /// Algorithm used by `generate`
    pub strategy: BounceStrategy,
    /// Samples per simulated second; shapes the curve, not its playback speed
    pub base_rate: u32,
    /// Vertical acceleration (negative = downward)
    pub gravity: f64,
    /// Height delta below which a grounded object counts as at rest
    pub rest_epsilon: f64,
    /// Hard upper bound on generated samples
    pub frame_cap: u32,
    /// Peak height under which the sparse strategies stop bouncing
    pub min_peak_height: f64,
    /// Behaviour when `frame_cap` is reached
    pub safety_cap: SafetyCapPolicy,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            strategy: BounceStrategy::default(),
            base_rate: 60,
            gravity: -9.8,
            rest_epsilon: 0.001,
            frame_cap: 2000,
            min_peak_height: 0.1,
            safety_cap: SafetyCapPolicy::default(),
        }
    }
}

impl BounceConfig {
    pub fn with_strategy(mut self, strategy: BounceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_safety_cap(mut self, policy: SafetyCapPolicy) -> Self {
        self.safety_cap = policy;
        self
    }

    /// Load a config from a `.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReboundError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ReboundError::ConfigError(msg) => {
                ReboundError::ConfigError(format!("{}: {}", path.display(), msg))
            }
            other => {
                ReboundError::ConfigError(format!("Failed to parse {}: {}", path.display(), other))
            }
        })
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BounceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every constant is usable by the generators.
    pub fn validate(&self) -> Result<()> {
        if self.base_rate == 0 {
            return Err(ReboundError::ConfigError(
                "base_rate must be greater than 0".into(),
            ));
        }
        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            return Err(ReboundError::ConfigError(format!(
                "gravity must be negative, got {}",
                self.gravity
            )));
        }
        if !(self.rest_epsilon > 0.0) {
            return Err(ReboundError::ConfigError(format!(
                "rest_epsilon must be positive, got {}",
                self.rest_epsilon
            )));
        }
        if self.frame_cap == 0 {
            return Err(ReboundError::ConfigError(
                "frame_cap must be greater than 0".into(),
            ));
        }
        if !(self.min_peak_height > 0.0) {
            return Err(ReboundError::ConfigError(format!(
                "min_peak_height must be positive, got {}",
                self.min_peak_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = BounceConfig::default();
        assert_eq!(config.base_rate, 60);
        assert_eq!(config.gravity, -9.8);
        assert_eq!(config.rest_epsilon, 0.001);
        assert_eq!(config.frame_cap, 2000);
        assert_eq!(config.min_peak_height, 0.1);
        assert_eq!(config.strategy, BounceStrategy::PhysicsSimulated);
        assert_eq!(config.safety_cap, SafetyCapPolicy::Settle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config = BounceConfig::from_toml_str(
            r#"
strategy = "GeometricDecay"
rest_epsilon = 0.01
safety_cap = "Fail"
"#,
        )
        .unwrap();
        assert_eq!(config.strategy, BounceStrategy::GeometricDecay);
        assert_eq!(config.rest_epsilon, 0.01);
        assert_eq!(config.safety_cap, SafetyCapPolicy::Fail);
        assert_eq!(config.frame_cap, 2000);
    }

    #[test]
    fn reject_positive_gravity() {
        let result = BounceConfig::from_toml_str("gravity = 9.8");
        assert!(matches!(result, Err(ReboundError::ConfigError(_))));
    }

    #[test]
    fn reject_zero_cap_and_rate() {
        assert!(BounceConfig::from_toml_str("frame_cap = 0").is_err());
        assert!(BounceConfig::from_toml_str("base_rate = 0").is_err());
        assert!(BounceConfig::from_toml_str("rest_epsilon = 0.0").is_err());
    }

    #[test]
    fn reject_unknown_strategy_name() {
        let result = BounceConfig::from_toml_str(r#"strategy = "Spring""#);
        assert!(matches!(result, Err(ReboundError::TomlParseError(_))));
    }

    #[test]
    fn strategy_from_short_names() {
        for strategy in BounceStrategy::ALL {
            let parsed: BounceStrategy = strategy.short_name().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
        assert_eq!(
            "PhysicsSimulated".parse::<BounceStrategy>().unwrap(),
            BounceStrategy::PhysicsSimulated
        );
        assert!("spring".parse::<BounceStrategy>().is_err());
    }
}
