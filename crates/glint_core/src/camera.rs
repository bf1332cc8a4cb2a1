//! Camera description and look-direction rotation.

use glint_math::{Spherical, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// How per-pixel offsets scale with the field of view.
///
/// `Angular` spaces pixels evenly in angle (`fov / extent`), giving a
/// fisheye-like projection at wide fields of view. `Perspective` uses
/// tangent-based scaling (`tan(fov / 2) / extent`). The two produce
/// visibly different images; pick the one you want to reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    #[default]
    Angular,
    Perspective,
}

/// Camera for generating rays into the scene.
///
/// Mutated only between frames, never during a render pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position.
    pub origin: Vec3,
    /// Direction to the image center.
    pub direction: Vec3,
    /// Horizontal field of view in radians.
    pub fov_x: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    #[serde(default)]
    pub projection: Projection,
}

impl Camera {
    /// Create a camera at the origin looking down +Z with a 90 degree
    /// field of view.
    pub fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::Z,
            fov_x: FRAC_PI_2,
            fov_y: FRAC_PI_2,
            projection: Projection::default(),
        }
    }

    /// Set eye position and look direction.
    pub fn with_position(mut self, origin: Vec3, direction: Vec3) -> Self {
        self.origin = origin;
        self.direction = direction;
        self
    }

    /// Set the field of view in radians.
    pub fn with_fov(mut self, fov_x: f32, fov_y: f32) -> Self {
        self.fov_x = fov_x;
        self.fov_y = fov_y;
        self
    }

    /// Set the projection rule.
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Rotate the look direction by the given angle deltas.
    ///
    /// The rotation is applied in spherical form so elevation and
    /// azimuth adjust independently; the direction's magnitude is
    /// preserved. This is the hook the input-handling collaborator
    /// uses for mouse/keyboard look.
    pub fn rotate(&mut self, d_elevation: f32, d_azimuth: f32) {
        let mut sph = Spherical::from(self.direction);
        sph.elevation += d_elevation;
        sph.azimuth += d_azimuth;
        self.direction = Vec3::from(sph);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
