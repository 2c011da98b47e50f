//! Rebound Scene - the objects that get dropped
//!
//! Owns the box, sphere and cylinder, their resting heights and reshaping
//! rules, and wires them to the animation player so that each object runs
//! at most one bounce at a time. Scenes can be described in TOML files.

mod format;
mod loader;
mod scene;
mod shape;

pub use format::{ObjectDef, SceneFile, SceneMetadata};
pub use loader::{load_scene, load_scene_str, save_scene_string};
pub use scene::{Scene, DEFAULT_GROUND_HEIGHT};
pub use shape::{Reshape, SceneObject, ShapeKind, DIMENSION_RANGE, SUBDIVISION_RANGE};
