//! Pixel-to-ray mapping.

use glint_core::{Camera, Projection};
use glint_math::{Spherical, Vec3};

/// Map a pixel coordinate to a world-space ray direction.
///
/// The camera's look direction is taken to spherical form, offset by
/// the pixel's angular distance from the image center, and converted
/// back. With [`Projection::Angular`] the offsets span the field of
/// view linearly; with [`Projection::Perspective`] they use
/// tangent-based scaling.
///
/// Panics if `(x, y)` lies outside the image; out-of-range pixels are
/// a caller bug, not a renderable state.
pub fn pixel_to_ray(camera: &Camera, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
    assert!(
        x < width && y < height,
        "pixel ({x}, {y}) outside {width}x{height} image"
    );

    let (scale_x, scale_y) = match camera.projection {
        Projection::Angular => (camera.fov_x / width as f32, camera.fov_y / height as f32),
        Projection::Perspective => (
            (camera.fov_x / 2.0).tan() / width as f32,
            (camera.fov_y / 2.0).tan() / height as f32,
        ),
    };

    // Offsets in [-fov/2, fov/2) relative to the image center.
    let rot_x = (x as f32 - width as f32 / 2.0) * scale_x;
    let rot_y = (y as f32 - height as f32 / 2.0) * scale_y;

    let mut sph = Spherical::from(camera.direction);
    sph.elevation -= rot_y;
    sph.azimuth += rot_x;
    Vec3::from(sph)
}
