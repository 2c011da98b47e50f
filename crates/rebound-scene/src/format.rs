//! Scene file format definitions

use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root structure of a scene TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    #[serde(default)]
    pub objects: BTreeMap<String, ObjectDef>,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Height of the ground plane, kept just below 0 so faces don't merge
    #[serde(default = "default_ground_height")]
    pub ground_height: f64,
}

fn default_ground_height() -> f64 {
    crate::scene::DEFAULT_GROUND_HEIGHT
}

/// Definition of an object in a scene file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectDef {
    pub kind: ShapeKind,
    /// Ground anchor
    #[serde(default)]
    pub position: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivisions: Option<u32>,
}

impl ObjectDef {
    pub fn new(kind: ShapeKind, position: [f64; 3]) -> Self {
        Self {
            kind,
            position,
            scaling: None,
            subdivisions: None,
        }
    }

    pub fn with_scaling(mut self, scaling: [f64; 3]) -> Self {
        self.scaling = Some(scaling);
        self
    }

    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = Some(subdivisions);
        self
    }
}

impl SceneFile {
    /// Create a new, empty scene file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: SceneMetadata {
                name: name.into(),
                description: None,
                ground_height: default_ground_height(),
            },
            objects: BTreeMap::new(),
        }
    }

    /// Add an object to the scene
    pub fn add_object(&mut self, name: impl Into<String>, object: ObjectDef) {
        self.objects.insert(name.into(), object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_serialization() {
        let mut scene = SceneFile::new("Drop Test");
        scene.add_object(
            "crate",
            ObjectDef::new(ShapeKind::Box, [1.0, 0.0, 0.0]).with_scaling([1.0, 2.0, 1.0]),
        );

        let toml_str = toml::to_string_pretty(&scene).unwrap();
        assert!(toml_str.contains("Drop Test"));
        assert!(toml_str.contains("[objects.crate]"));
        assert!(!toml_str.contains("subdivisions"));
    }

    #[test]
    fn test_scene_file_deserialization() {
        let toml_str = r#"
[scene]
name = "Shelf"

[objects.ball]
kind = "Sphere"
position = [-4.0, 0.0, 0.0]
subdivisions = 4

[objects.can]
kind = "Cylinder"
"#;
        let scene: SceneFile = toml::from_str(toml_str).unwrap();
        assert_eq!(scene.scene.name, "Shelf");
        assert_eq!(scene.scene.ground_height, -0.01);
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects["ball"].subdivisions, Some(4));
        assert_eq!(scene.objects["can"].position, [0.0, 0.0, 0.0]);
        assert_eq!(scene.objects["can"].kind, ShapeKind::Cylinder);
    }
}
