//! Rebound Core - Foundational types for the Rebound workspace
//!
//! This crate provides the types that all other Rebound crates depend on:
//! - `ObjectId` - Stable scene object identifiers
//! - `Vec3` - Spatial vector used for anchors, scaling and positions
//! - `BounceConfig` - Tuning constants for curve synthesis
//! - Error types and Result alias

mod config;
mod error;
mod id;
mod types;

pub use config::{BounceConfig, BounceStrategy, SafetyCapPolicy};
pub use error::{ReboundError, Result};
pub use id::ObjectId;
pub use types::Vec3;
