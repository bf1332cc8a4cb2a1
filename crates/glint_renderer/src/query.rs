//! Nearest-hit search over the scene.

use glint_core::Scene;
use glint_math::Ray;

/// Find the nearest primitive hit by `ray`, skipping `exclude`.
///
/// Returns the primitive's index in `scene.primitives` and the hit
/// distance. `exclude` is the primitive the ray just left; skipping it
/// keeps reflection and shadow rays from re-intersecting their own
/// surface at numerically tiny distances.
///
/// Linear in the primitive count; called once per primary ray and once
/// per light per hit point, which makes it the dominant cost center.
pub fn nearest_hit(scene: &Scene, ray: &Ray, exclude: Option<usize>) -> Option<(usize, f32)> {
    let mut closest: Option<(usize, f32)> = None;

    for (index, primitive) in scene.primitives.iter().enumerate() {
        if exclude == Some(index) {
            continue;
        }
        if let Some(t) = primitive.intersect(ray) {
            if closest.map_or(true, |(_, best)| t < best) {
                closest = Some((index, t));
            }
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Primitive, Rgb, Surface};
    use glint_math::Vec3;

    fn surface() -> Surface {
        Surface::new(Rgb::new(255, 0, 0), 0)
    }

    fn two_sphere_scene() -> Scene {
        let mut scene = Scene::new(Rgb::BLACK, 0.2);
        scene.add(Primitive::sphere(Vec3::new(5.0, 0.0, 0.0), 1.0, surface()));
        scene.add(Primitive::sphere(Vec3::new(10.0, 0.0, 0.0), 1.0, surface()));
        scene
    }

    #[test]
    fn test_nearest_of_two() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let (index, t) = nearest_hit(&scene, &ray, None).expect("should hit");
        assert_eq!(index, 0);
        assert!((t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_exclude_skips_primitive() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let (index, t) = nearest_hit(&scene, &ray, Some(0)).expect("should hit");
        assert_eq!(index, 1);
        assert!((t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_hit() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(nearest_hit(&scene, &ray, None).is_none());
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(Rgb::BLACK, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert!(nearest_hit(&scene, &ray, None).is_none());
    }
}
