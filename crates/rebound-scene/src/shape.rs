//! Shape kinds, resting heights and reshaping

use rebound_core::{ObjectId, ReboundError, Result, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted range for width, height, depth, diameter and size.
pub const DIMENSION_RANGE: RangeInclusive<f64> = 0.2..=2.0;

/// Accepted range for sphere subdivisions.
pub const SUBDIVISION_RANGE: RangeInclusive<u32> = 1..=10;

const DEFAULT_SUBDIVISIONS: u32 = 10;

/// The primitive an object is built from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
}

impl ShapeKind {
    /// Vertical offset from the ground anchor to the object's origin at rest.
    ///
    /// Unit meshes: the box is 1 tall with a centred origin, while the sphere
    /// and cylinder rest a full `scale_y` above their anchor.
    pub fn rest_offset(&self, scale_y: f64) -> f64 {
        match self {
            ShapeKind::Box => scale_y / 2.0,
            ShapeKind::Sphere | ShapeKind::Cylinder => scale_y,
        }
    }

    /// Whether this shape exposes the given reshape control.
    pub fn accepts(&self, change: &Reshape) -> bool {
        matches!(
            (self, change),
            (ShapeKind::Box, Reshape::Width(_))
                | (ShapeKind::Box, Reshape::Height(_))
                | (ShapeKind::Box, Reshape::Depth(_))
                | (ShapeKind::Sphere, Reshape::Size(_))
                | (ShapeKind::Sphere, Reshape::Subdivisions(_))
                | (ShapeKind::Cylinder, Reshape::Height(_))
                | (ShapeKind::Cylinder, Reshape::Diameter(_))
        )
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
        };
        f.write_str(name)
    }
}

/// A user-driven change to an object's shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reshape {
    /// Scale along x
    Width(f64),
    /// Scale along y
    Height(f64),
    /// Scale along z
    Depth(f64),
    /// Scale along x and z
    Diameter(f64),
    /// Uniform scale
    Size(f64),
    /// Sphere tessellation level
    Subdivisions(u32),
}

impl Reshape {
    fn control(&self) -> &'static str {
        match self {
            Reshape::Width(_) => "width",
            Reshape::Height(_) => "height",
            Reshape::Depth(_) => "depth",
            Reshape::Diameter(_) => "diameter",
            Reshape::Size(_) => "size",
            Reshape::Subdivisions(_) => "subdivisions",
        }
    }
}

/// One droppable object in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ShapeKind,
    /// Point on the ground the object stands on
    pub anchor: Vec3,
    pub scaling: Vec3,
    /// Current origin, moved by bounce playback
    pub position: Vec3,
    /// Only set for spheres
    pub subdivisions: Option<u32>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ShapeKind, anchor: Vec3) -> Self {
        let subdivisions = match kind {
            ShapeKind::Sphere => Some(DEFAULT_SUBDIVISIONS),
            _ => None,
        };
        let mut object = Self {
            id: ObjectId::new(),
            name: name.into(),
            kind,
            anchor,
            scaling: Vec3::ONE,
            position: anchor,
            subdivisions,
        };
        object.reset_position();
        object
    }

    /// Height of the object's origin when it stands on its anchor.
    pub fn resting_height(&self) -> f64 {
        self.anchor.y + self.kind.rest_offset(self.scaling.y)
    }

    /// Put the object back at rest and return the resting height.
    pub fn reset_position(&mut self) -> f64 {
        let rest = self.resting_height();
        self.position = self.anchor.with_y(rest);
        rest
    }

    /// Apply a reshape control, then stand the object back on its anchor.
    ///
    /// Out-of-range values and controls the shape doesn't have are rejected
    /// with `InvalidParameter` and leave the object untouched.
    pub fn reshape(&mut self, change: Reshape) -> Result<()> {
        if !self.kind.accepts(&change) {
            return Err(ReboundError::invalid(
                change.control(),
                format!("is not adjustable on a {}", self.kind),
            ));
        }

        match change {
            Reshape::Subdivisions(level) => {
                if !SUBDIVISION_RANGE.contains(&level) {
                    return Err(ReboundError::invalid(
                        "subdivisions",
                        format!(
                            "must be between {} and {}, got {}",
                            SUBDIVISION_RANGE.start(),
                            SUBDIVISION_RANGE.end(),
                            level
                        ),
                    ));
                }
                self.subdivisions = Some(level);
            }
            Reshape::Width(v)
            | Reshape::Height(v)
            | Reshape::Depth(v)
            | Reshape::Diameter(v)
            | Reshape::Size(v) => {
                if !DIMENSION_RANGE.contains(&v) {
                    return Err(ReboundError::invalid(
                        change.control(),
                        format!(
                            "must be between {} and {}, got {}",
                            DIMENSION_RANGE.start(),
                            DIMENSION_RANGE.end(),
                            v
                        ),
                    ));
                }
                match change {
                    Reshape::Width(_) => self.scaling.x = v,
                    Reshape::Height(_) => self.scaling.y = v,
                    Reshape::Depth(_) => self.scaling.z = v,
                    Reshape::Diameter(_) => {
                        self.scaling.x = v;
                        self.scaling.z = v;
                    }
                    _ => self.scaling = Vec3::new(v, v, v),
                }
            }
        }

        self.reset_position();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_heights_per_shape() {
        let cube = SceneObject::new("Box", ShapeKind::Box, Vec3::ZERO);
        let ball = SceneObject::new("Sphere", ShapeKind::Sphere, Vec3::new(-4.0, 0.0, 0.0));
        let can = SceneObject::new("Cylinder", ShapeKind::Cylinder, Vec3::new(4.0, 1.0, 0.0));
        assert_eq!(cube.resting_height(), 0.5);
        assert_eq!(ball.resting_height(), 1.0);
        assert_eq!(can.resting_height(), 2.0);
        assert_eq!(can.position, Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(ball.subdivisions, Some(10));
        assert_eq!(cube.subdivisions, None);
    }

    #[test]
    fn height_change_moves_origin() {
        let mut cube = SceneObject::new("Box", ShapeKind::Box, Vec3::ZERO);
        cube.reshape(Reshape::Height(2.0)).unwrap();
        assert_eq!(cube.scaling.y, 2.0);
        assert_eq!(cube.position.y, 1.0);

        let mut can = SceneObject::new("Cylinder", ShapeKind::Cylinder, Vec3::ZERO);
        can.reshape(Reshape::Height(0.5)).unwrap();
        assert_eq!(can.position.y, 0.5);
    }

    #[test]
    fn diameter_and_size_scale_axes() {
        let mut can = SceneObject::new("Cylinder", ShapeKind::Cylinder, Vec3::ZERO);
        can.reshape(Reshape::Diameter(1.5)).unwrap();
        assert_eq!(can.scaling, Vec3::new(1.5, 1.0, 1.5));

        let mut ball = SceneObject::new("Sphere", ShapeKind::Sphere, Vec3::ZERO);
        ball.reshape(Reshape::Size(0.4)).unwrap();
        assert_eq!(ball.scaling, Vec3::new(0.4, 0.4, 0.4));
        assert_eq!(ball.position.y, 0.4);
    }

    #[test]
    fn reshape_resets_bounced_position() {
        let mut cube = SceneObject::new("Box", ShapeKind::Box, Vec3::ZERO);
        cube.position.y = 7.25;
        cube.reshape(Reshape::Width(1.2)).unwrap();
        assert_eq!(cube.position.y, 0.5);
    }

    #[test]
    fn reject_out_of_range_dimensions() {
        let mut cube = SceneObject::new("Box", ShapeKind::Box, Vec3::ZERO);
        let before = cube.clone();
        assert!(cube.reshape(Reshape::Depth(0.1)).unwrap_err().is_invalid_parameter());
        assert!(cube.reshape(Reshape::Width(2.5)).is_err());
        assert!(cube.reshape(Reshape::Height(f64::NAN)).is_err());
        assert_eq!(cube, before);
    }

    #[test]
    fn reject_controls_the_shape_lacks() {
        let mut cube = SceneObject::new("Box", ShapeKind::Box, Vec3::ZERO);
        assert!(cube.reshape(Reshape::Subdivisions(3)).is_err());
        let mut ball = SceneObject::new("Sphere", ShapeKind::Sphere, Vec3::ZERO);
        assert!(ball.reshape(Reshape::Height(1.0)).is_err());
        let mut can = SceneObject::new("Cylinder", ShapeKind::Cylinder, Vec3::ZERO);
        assert!(can.reshape(Reshape::Size(1.0)).is_err());
    }

    #[test]
    fn subdivisions_range() {
        let mut ball = SceneObject::new("Sphere", ShapeKind::Sphere, Vec3::ZERO);
        ball.reshape(Reshape::Subdivisions(3)).unwrap();
        assert_eq!(ball.subdivisions, Some(3));
        assert!(ball.reshape(Reshape::Subdivisions(0)).is_err());
        assert!(ball.reshape(Reshape::Subdivisions(11)).is_err());
        assert_eq!(ball.subdivisions, Some(3));
    }
}
