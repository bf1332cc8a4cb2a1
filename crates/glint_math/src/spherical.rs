//! Spherical form of a 3D vector.
//!
//! Cartesian math lives on glam's `Vec3`. `Spherical` exists for the
//! operations that want independent control of elevation and azimuth:
//! camera look-direction rotation and per-pixel ray offsets. The type
//! itself is the representation tag; converting between forms is always
//! an explicit `From`.

use crate::Vec3;

/// A vector in spherical form.
///
/// `elevation` is measured from the XZ plane toward +Y, in
/// [-pi/2, pi/2]. `azimuth` is measured in the XZ plane from +Z toward
/// +X, in (-pi, pi]. `r` is the magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub r: f32,
    pub elevation: f32,
    pub azimuth: f32,
}

impl Spherical {
    /// Create a spherical vector from its components.
    pub fn new(r: f32, elevation: f32, azimuth: f32) -> Self {
        Self {
            r,
            elevation,
            azimuth,
        }
    }

    /// Scale the magnitude, leaving the direction untouched.
    pub fn scaled(self, s: f32) -> Self {
        Self { r: self.r * s, ..self }
    }
}

impl From<Vec3> for Spherical {
    fn from(v: Vec3) -> Self {
        Self {
            r: v.length(),
            elevation: v.y.atan2((v.x * v.x + v.z * v.z).sqrt()),
            azimuth: v.x.atan2(v.z),
        }
    }
}

impl From<Spherical> for Vec3 {
    fn from(s: Spherical) -> Self {
        Vec3::new(
            s.r * s.elevation.cos() * s.azimuth.sin(),
            s.r * s.elevation.sin(),
            s.r * s.elevation.cos() * s.azimuth.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-5,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn test_axes() {
        let z = Spherical::from(Vec3::Z);
        assert!((z.r - 1.0).abs() < 1e-6);
        assert!(z.elevation.abs() < 1e-6);
        assert!(z.azimuth.abs() < 1e-6);

        let x = Spherical::from(Vec3::X);
        assert!((x.azimuth - FRAC_PI_2).abs() < 1e-6);
        assert!(x.elevation.abs() < 1e-6);

        let y = Spherical::from(Vec3::Y);
        assert!((y.elevation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 2.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(0.0, -3.0, 0.0),
        ];
        for v in cases {
            assert_close(Vec3::from(Spherical::from(v)), v);
        }
    }

    #[test]
    fn test_round_trip_from_spherical() {
        let s = Spherical::new(2.0, FRAC_PI_4, -FRAC_PI_4);
        let back = Spherical::from(Vec3::from(s));
        assert!((back.r - s.r).abs() < 1e-5);
        assert!((back.elevation - s.elevation).abs() < 1e-5);
        assert!((back.azimuth - s.azimuth).abs() < 1e-5);
    }

    #[test]
    fn test_magnitude_preserved() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        let s = Spherical::from(v);
        assert!((s.r - 13.0).abs() < 1e-5);
    }

    #[test]
    fn test_scaled() {
        let s = Spherical::from(Vec3::new(0.0, 0.0, 2.0)).scaled(3.0);
        assert_close(Vec3::from(s), Vec3::new(0.0, 0.0, 6.0));
    }
}
