//! Spatial types

use serde::{Deserialize, Serialize};

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversions() {
        let v = Vec3::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_with_y_keeps_other_axes() {
        let v = Vec3::new(-4.0, 0.0, 2.0).with_y(1.5);
        assert_eq!(v.to_array(), [-4.0, 1.5, 2.0]);
    }

    #[test]
    fn test_serde_roundtrip_toml() {
        let v = Vec3::new(4.0, 0.5, 0.0);
        let s = toml::to_string(&v).unwrap();
        let back: Vec3 = toml::from_str(&s).unwrap();
        assert_eq!(v, back);
    }
}
