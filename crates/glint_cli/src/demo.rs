//! The built-in demo scene: three spheres over a ground plane with a
//! mirror panel behind them.

use glint_core::{Camera, Light, Primitive, Rgb, Scene, Surface};
use glint_math::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Build the demo scene.
pub fn scene() -> Scene {
    let mut scene = Scene::new(Rgb::new(160, 160, 160), 0.2);

    // Three spheres along the Z axis, mixed specularity.
    scene.add(Primitive::sphere(
        Vec3::new(0.0, 0.0, 1.0),
        1.0,
        Surface::new(Rgb::new(0, 0, 255), 20),
    ));
    scene.add(Primitive::sphere(
        Vec3::new(0.0, 0.0, -1.0),
        1.0,
        Surface::new(Rgb::new(0, 224, 0), 239),
    ));
    scene.add(Primitive::sphere(
        Vec3::new(0.0, 0.0, -3.0),
        1.0,
        Surface::new(Rgb::new(0, 224, 0), 96),
    ));

    // Ground plane under the spheres.
    scene.add(Primitive::plane(
        Vec3::new(0.0, -1.5, 0.0),
        Vec3::Y,
        Surface::new(Rgb::new(180, 180, 180), 0),
    ));

    // Mirror panel behind the spheres, facing the camera.
    scene.add(Primitive::triangle(
        Vec3::new(3.0, -1.5, 3.0),
        Vec3::new(3.0, -1.5, -3.0),
        Vec3::new(3.0, 3.5, 0.0),
        Surface::new(Rgb::new(40, 40, 48), 192),
    ));

    scene.add_light(Light::new(Vec3::new(0.0, 10.0, -10.0), 2.0));

    scene
}

/// The demo camera: off to -X looking at the spheres, 90 degree
/// horizontal field of view, vertical scaled by the aspect ratio.
pub fn camera(width: u32, height: u32) -> Camera {
    let fov_x = FRAC_PI_2;
    let fov_y = fov_x * height as f32 / width as f32;
    Camera::new()
        .with_position(Vec3::new(-5.0, 0.0, 0.0), Vec3::X)
        .with_fov(fov_x, fov_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_valid() {
        let mut scene = scene();
        assert!(scene.validate().is_ok());
        scene.preprocess();
        assert_eq!(scene.primitives.len(), 5);
        assert_eq!(scene.lights.len(), 1);
    }

    #[test]
    fn test_demo_camera_aspect() {
        let cam = camera(640, 480);
        assert!((cam.fov_y - FRAC_PI_2 * 0.75).abs() < 1e-6);
    }
}
