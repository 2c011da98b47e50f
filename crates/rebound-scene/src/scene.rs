//! Scene object registry and bounce wiring

use crate::shape::{Reshape, SceneObject, ShapeKind};
use log::info;
use rebound_animation::{AnimationPlayer, BounceCurve, BounceCurveGenerator, BounceParameters};
use rebound_core::{BounceConfig, ObjectId, ReboundError, Result, Vec3};
use std::collections::{BTreeMap, HashMap};

/// Ground plane height; slightly below 0 so object bottoms and ground don't z-fight.
pub const DEFAULT_GROUND_HEIGHT: f64 = -0.01;

/// A set of droppable objects plus the player that animates them.
pub struct Scene {
    pub name: String,
    pub description: Option<String>,
    pub ground_height: f64,
    objects: BTreeMap<ObjectId, SceneObject>,
    names: HashMap<String, ObjectId>,
    player: AnimationPlayer,
    generator: BounceCurveGenerator,
}

impl Scene {
    pub fn new(name: impl Into<String>, config: BounceConfig) -> Self {
        Self {
            name: name.into(),
            description: None,
            ground_height: DEFAULT_GROUND_HEIGHT,
            objects: BTreeMap::new(),
            names: HashMap::new(),
            player: AnimationPlayer::new(),
            generator: BounceCurveGenerator::new(config),
        }
    }

    /// The demo layout: a box in the middle, a sphere left, a cylinder right.
    pub fn with_default_objects(config: BounceConfig) -> Self {
        let mut scene = Self::new("Bounce Demo", config);
        scene.description = Some("A box, a sphere and a cylinder on a ground plane".into());
        let defaults = [
            ("Box", ShapeKind::Box, Vec3::new(0.0, 0.0, 0.0)),
            ("Sphere", ShapeKind::Sphere, Vec3::new(-4.0, 0.0, 0.0)),
            ("Cylinder", ShapeKind::Cylinder, Vec3::new(4.0, 0.0, 0.0)),
        ];
        for (name, kind, anchor) in defaults {
            scene.insert_object(SceneObject::new(name, kind, anchor));
        }
        scene
    }

    fn insert_object(&mut self, object: SceneObject) -> ObjectId {
        let id = object.id;
        self.names.insert(object.name.clone(), id);
        self.objects.insert(id, object);
        id
    }

    /// Add an object. Names are unique within a scene.
    pub fn add_object(&mut self, object: SceneObject) -> Result<ObjectId> {
        if self.names.contains_key(&object.name) {
            return Err(ReboundError::DuplicateObjectName(object.name));
        }
        Ok(self.insert_object(object))
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Look up an object id by name.
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.names.get(name).copied()
    }

    /// Objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn player(&self) -> &AnimationPlayer {
        &self.player
    }

    pub fn config(&self) -> &BounceConfig {
        self.generator.config()
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(&id)
            .ok_or_else(|| ReboundError::ObjectNotFound(id.to_string()))
    }

    /// Stop the object's animation where it is. Returns whether one was running.
    pub fn cancel_animation(&mut self, id: ObjectId) -> bool {
        self.player.stop(id).is_some()
    }

    /// Stop any animation and stand the object back on its anchor.
    pub fn reset_position(&mut self, id: ObjectId) -> Result<f64> {
        self.player.stop(id);
        Ok(self.object_mut(id)?.reset_position())
    }

    /// Change the object's shape. Any running bounce is cancelled first.
    pub fn reshape(&mut self, id: ObjectId, change: Reshape) -> Result<()> {
        let object = self
            .objects
            .get_mut(&id)
            .ok_or_else(|| ReboundError::ObjectNotFound(id.to_string()))?;
        self.player.stop(id);
        object.reshape(change)
    }

    /// Drop the object from `params.amplitude` above its resting height.
    ///
    /// The curve is generated before anything is touched, so a rejected
    /// parameter leaves the current animation and position as they were.
    /// On success the previous animation is replaced and playback starts.
    pub fn apply_bounce(
        &mut self,
        id: ObjectId,
        params: &BounceParameters,
    ) -> Result<&BounceCurve> {
        let base_height = self
            .objects
            .get(&id)
            .ok_or_else(|| ReboundError::ObjectNotFound(id.to_string()))?
            .resting_height();

        let curve = self.generator.generate(params, base_height)?;

        self.player.stop(id);
        let object = self.object_mut(id)?;
        object.reset_position();
        info!(
            "Bouncing '{}' from {:.3} to rest at {:.3} ({} keyframes, {} fps)",
            object.name,
            curve.first_value(),
            base_height,
            curve.keyframes.len(),
            curve.sample_rate
        );

        self.player.start(id, curve);
        self.player
            .get(id)
            .map(|active| &active.curve)
            .ok_or_else(|| ReboundError::SceneError(format!("animation slot for {} is empty", id)))
    }

    /// True while the object's bounce is still playing.
    pub fn is_animating(&self, id: ObjectId) -> bool {
        self.player.is_playing(id)
    }

    /// Advance all bounces by `dt` seconds and move the objects.
    pub fn advance(&mut self, dt: f64) {
        for (id, height) in self.player.advance_all(dt) {
            if let Some(object) = self.objects.get_mut(&id) {
                object.position.y = height;
            }
        }
    }
}
