//! Scene command - drop an object from a scene file or the demo scene

use super::{height_bar, CurveArgs};
use anyhow::{Context, Result};
use rebound_scene::{load_scene, save_scene_string, Scene};

pub struct SceneArgs {
    pub scene: Option<String>,
    pub object: Option<String>,
    pub save: Option<String>,
    pub curve: CurveArgs,
    pub fps: u32,
}

pub fn run(args: SceneArgs) -> Result<()> {
    let config = args.curve.config()?;
    let mut scene = match &args.scene {
        Some(path) => load_scene(path, config).context("Failed to load scene")?,
        None => Scene::with_default_objects(config),
    };

    if let Some(path) = &args.save {
        let content = save_scene_string(&scene)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write scene {}", path))?;
        println!("Saved scene '{}' to {}", scene.name, path);
    }

    let Some(name) = &args.object else {
        print_objects(&scene);
        return Ok(());
    };

    let id = match scene.find(name) {
        Some(id) => id,
        None => {
            print_objects(&scene);
            anyhow::bail!("No object named '{}' in scene '{}'", name, scene.name);
        }
    };

    if args.fps == 0 {
        anyhow::bail!("fps must be greater than 0");
    }

    let curve = scene.apply_bounce(id, &args.curve.params())?;
    let top = curve.first_value();
    let seconds = curve.playback_seconds();
    let rest = scene.object(id).map(|o| o.resting_height()).unwrap_or(0.0);

    println!("Dropping '{}' in '{}' ({:.3} s)", name, scene.name, seconds);

    let dt = 1.0 / args.fps as f64;
    let mut elapsed = 0.0;
    scene.advance(0.0);
    loop {
        let y = scene.object(id).map(|o| o.position.y).unwrap_or(rest);
        println!(
            "{:>8.3}s {:>10.4} |{}",
            elapsed,
            y,
            height_bar(y - rest, top - rest, 50)
        );
        if !scene.is_animating(id) {
            break;
        }
        scene.advance(dt);
        elapsed += dt;
    }

    Ok(())
}

fn print_objects(scene: &Scene) {
    println!("Scene: {} ({} objects)", scene.name, scene.object_count());
    if let Some(description) = &scene.description {
        println!("  {}", description);
    }
    for object in scene.objects() {
        let [x, y, z] = object.anchor.to_array();
        println!(
            "  {:<12} {:<9} anchor ({:.2}, {:.2}, {:.2})  rests at y={:.3}",
            object.name,
            object.kind.to_string(),
            x,
            y,
            z,
            object.resting_height()
        );
    }
}
