//! Scene types: primitives plus point lights plus global shading terms.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;
use crate::primitive::{Primitive, Shape};

/// Errors reported by [`Scene::validate`].
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("plane normal must have nonzero length")]
    ZeroPlaneNormal,

    #[error("ambient coefficient must be in [0, 1], got {0}")]
    AmbientOutOfRange(f32),

    #[error("light intensity must be non-negative, got {0}")]
    NegativeIntensity(f32),
}

/// A point light.
///
/// Lights have no geometry: they cannot be intersected or occluded
/// themselves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// The complete scene: objects, lights, and global shading terms.
///
/// A scene is read-only for the duration of a render pass; mutate it
/// only between frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub lights: Vec<Light>,
    /// Color returned for rays that hit nothing.
    pub background: Rgb,
    /// Minimum illumination fraction, in [0, 1].
    pub ambient: f32,
}

impl Scene {
    /// Create an empty scene with the given background and ambient term.
    pub fn new(background: Rgb, ambient: f32) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            background,
            ambient,
        }
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Compute derived triangle fields.
    ///
    /// Must run after construction or deserialization and before the
    /// first render. Derived fields are immutable afterwards.
    pub fn preprocess(&mut self) {
        let mut triangles = 0;
        for primitive in &mut self.primitives {
            if let Shape::Triangle(tri) = &mut primitive.shape {
                tri.precompute();
                triangles += 1;
            }
        }
        log::debug!(
            "preprocessed {} triangles of {} primitives",
            triangles,
            self.primitives.len()
        );
    }

    /// Check the scene for invalid data.
    ///
    /// Catches the precondition violations that would otherwise surface
    /// as NaNs deep inside the shader: zero-length plane normals,
    /// nonpositive sphere radii, out-of-range ambient terms.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(SceneError::AmbientOutOfRange(self.ambient));
        }
        for primitive in &self.primitives {
            match &primitive.shape {
                Shape::Sphere(s) if s.radius <= 0.0 => {
                    return Err(SceneError::NonPositiveRadius(s.radius));
                }
                Shape::Plane(p) if p.normal.length_squared() == 0.0 => {
                    return Err(SceneError::ZeroPlaneNormal);
                }
                _ => {}
            }
        }
        for light in &self.lights {
            if light.intensity < 0.0 {
                return Err(SceneError::NegativeIntensity(light.intensity));
            }
        }
        Ok(())
    }
}
