//! TOML scene loading and saving

use crate::format::{ObjectDef, SceneFile};
use crate::scene::Scene;
use crate::shape::{SceneObject, ShapeKind, DIMENSION_RANGE, SUBDIVISION_RANGE};
use log::info;
use rebound_core::{BounceConfig, ReboundError, Result, Vec3};
use std::path::Path;

/// Load a scene from a `.scene.toml` file.
pub fn load_scene(path: impl AsRef<Path>, config: BounceConfig) -> Result<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ReboundError::SceneError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let scene = load_scene_str(&content, config)?;
    info!(
        "Loaded scene '{}' from {} ({} objects)",
        scene.name,
        path.display(),
        scene.object_count()
    );
    Ok(scene)
}

/// Parse a scene from a TOML string.
pub fn load_scene_str(content: &str, config: BounceConfig) -> Result<Scene> {
    let file: SceneFile = toml::from_str(content)?;

    let mut scene = Scene::new(file.scene.name.clone(), config);
    scene.description = file.scene.description.clone();
    scene.ground_height = file.scene.ground_height;

    for (name, def) in &file.objects {
        let object = build_object(name, def)?;
        scene.add_object(object)?;
    }

    Ok(scene)
}

fn build_object(name: &str, def: &ObjectDef) -> Result<SceneObject> {
    let mut object = SceneObject::new(name, def.kind, Vec3::from_array(def.position));

    if let Some(scaling) = def.scaling {
        if let Some(bad) = scaling.iter().find(|v| !DIMENSION_RANGE.contains(*v)) {
            return Err(ReboundError::SceneError(format!(
                "Object '{}' scaling {} is outside {}..={}",
                name,
                bad,
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            )));
        }
        object.scaling = Vec3::from_array(scaling);
    }

    if let Some(level) = def.subdivisions {
        if def.kind != ShapeKind::Sphere {
            return Err(ReboundError::SceneError(format!(
                "Object '{}' is a {}; only spheres have subdivisions",
                name, def.kind
            )));
        }
        if !SUBDIVISION_RANGE.contains(&level) {
            return Err(ReboundError::SceneError(format!(
                "Object '{}' subdivisions {} is outside {}..={}",
                name,
                level,
                SUBDIVISION_RANGE.start(),
                SUBDIVISION_RANGE.end()
            )));
        }
        object.subdivisions = Some(level);
    }

    object.reset_position();
    Ok(object)
}

/// Serialize a scene's objects (at their anchors, not mid-bounce) to TOML.
pub fn save_scene_string(scene: &Scene) -> Result<String> {
    let mut file = SceneFile::new(scene.name.clone());
    file.scene.description = scene.description.clone();
    file.scene.ground_height = scene.ground_height;

    for object in scene.objects() {
        let mut def = ObjectDef::new(object.kind, object.anchor.to_array());
        if object.scaling != Vec3::ONE {
            def = def.with_scaling(object.scaling.to_array());
        }
        if let Some(level) = object.subdivisions {
            def = def.with_subdivisions(level);
        }
        file.add_object(object.name.clone(), def);
    }

    Ok(toml::to_string_pretty(&file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELF: &str = r#"
[scene]
name = "Shelf"
description = "Two objects on a raised shelf"
ground_height = 0.0

[objects.tall_box]
kind = "Box"
position = [0.0, 1.0, 0.0]
scaling = [1.0, 2.0, 1.0]

[objects.ball]
kind = "Sphere"
position = [-2.0, 0.0, 0.0]
subdivisions = 3
"#;

    #[test]
    fn parse_scene_and_place_objects() {
        let scene = load_scene_str(SHELF, BounceConfig::default()).unwrap();
        assert_eq!(scene.name, "Shelf");
        assert_eq!(scene.description.as_deref(), Some("Two objects on a raised shelf"));
        assert_eq!(scene.ground_height, 0.0);
        assert_eq!(scene.object_count(), 2);

        let tall = scene.object(scene.find("tall_box").unwrap()).unwrap();
        assert_eq!(tall.resting_height(), 2.0);
        assert_eq!(tall.position, Vec3::new(0.0, 2.0, 0.0));

        let ball = scene.object(scene.find("ball").unwrap()).unwrap();
        assert_eq!(ball.subdivisions, Some(3));
        assert_eq!(ball.position.y, 1.0);
    }

    #[test]
    fn reject_subdivisions_on_box() {
        let toml_str = r#"
[scene]
name = "bad"

[objects.crate]
kind = "Box"
subdivisions = 4
"#;
        let result = load_scene_str(toml_str, BounceConfig::default());
        assert!(matches!(result, Err(ReboundError::SceneError(_))));
    }

    #[test]
    fn reject_scaling_out_of_range() {
        let toml_str = r#"
[scene]
name = "bad"

[objects.can]
kind = "Cylinder"
scaling = [1.0, 5.0, 1.0]
"#;
        assert!(load_scene_str(toml_str, BounceConfig::default()).is_err());
    }

    #[test]
    fn reject_unknown_kind() {
        let toml_str = r#"
[scene]
name = "bad"

[objects.cone]
kind = "Cone"
"#;
        let result = load_scene_str(toml_str, BounceConfig::default());
        assert!(matches!(result, Err(ReboundError::TomlParseError(_))));
    }

    #[test]
    fn save_then_load_keeps_layout() {
        let scene = load_scene_str(SHELF, BounceConfig::default()).unwrap();
        let text = save_scene_string(&scene).unwrap();
        assert!(text.contains("[objects.tall_box]"));

        let reloaded = load_scene_str(&text, BounceConfig::default()).unwrap();
        assert_eq!(reloaded.object_count(), 2);
        assert_eq!(reloaded.description, scene.description);
        assert_eq!(reloaded.ground_height, 0.0);
        let tall = reloaded.object(reloaded.find("tall_box").unwrap()).unwrap();
        assert_eq!(tall.scaling, Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(tall.anchor, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn default_scene_survives_save() {
        let demo = Scene::with_default_objects(BounceConfig::default());
        let text = save_scene_string(&demo).unwrap();
        let reloaded = load_scene_str(&text, BounceConfig::default()).unwrap();
        assert_eq!(reloaded.name, "Bounce Demo");
        assert_eq!(reloaded.ground_height, -0.01);
        assert_eq!(reloaded.object_count(), 3);
        let ball = reloaded.object(reloaded.find("Sphere").unwrap()).unwrap();
        assert_eq!(ball.anchor, Vec3::new(-4.0, 0.0, 0.0));
        assert_eq!(ball.subdivisions, Some(10));
        assert_eq!(ball.position.y, 1.0);
    }

    #[test]
    fn missing_file_is_scene_error() {
        let result = load_scene("does/not/exist.scene.toml", BounceConfig::default());
        assert!(matches!(result, Err(ReboundError::SceneError(_))));
    }
}
