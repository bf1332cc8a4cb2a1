//! Illumination, shadowing, and recursive reflection.

use glint_core::{Rgb, Scene};
use glint_math::{Ray, Spherical, Vec3};
use std::f32::consts::FRAC_PI_2;

use crate::query::nearest_hit;
use crate::renderer::RenderConfig;

/// Compute the color seen along `ray`.
///
/// Finds the nearest hit, accumulates diffuse shading from every
/// unoccluded light, applies the scene's ambient/diffuse mix, and for
/// specular surfaces recursively traces the mirror reflection while
/// `bounces` remain. `exclude` is the primitive the ray originates on
/// (reflection rays pass their own surface here); primary rays pass
/// `None`.
///
/// Recursion is strictly bounded: `bounces` decrements every call, and
/// a zero budget short-circuits to non-reflective shading.
pub fn trace(
    scene: &Scene,
    config: &RenderConfig,
    ray: &Ray,
    bounces: u32,
    exclude: Option<usize>,
) -> Rgb {
    let Some((index, distance)) = nearest_hit(scene, ray, exclude) else {
        return background(scene, config, ray.direction);
    };

    let primitive = &scene.primitives[index];
    let point = ray.at(distance);
    let normal = primitive.normal_at(point).normalize();

    let mut shade_total = 0.0_f32;
    for light in &scene.lights {
        let to_light = light.position - point;
        let light_distance = to_light.length();
        if light_distance <= 0.0 {
            // A light coincident with the surface point contributes
            // nothing rather than a NaN direction.
            continue;
        }
        let light_dir = to_light / light_distance;

        // Hard shadow: any occluder strictly nearer than the light
        // kills this light's contribution entirely.
        let shadow_ray = Ray::new(point, light_dir);
        if let Some((_, occluder_distance)) = nearest_hit(scene, &shadow_ray, Some(index)) {
            if occluder_distance < light_distance {
                continue;
            }
        }

        let shade = normal.dot(light_dir);
        if shade > 0.0 {
            let mut contribution = shade * light.intensity;
            if config.inverse_square_falloff {
                contribution /= light_distance * light_distance;
            }
            shade_total += contribution;
        }
    }
    let shade_total = shade_total.min(1.0);

    let lit = scene.ambient + (1.0 - scene.ambient) * shade_total;
    let base = primitive.surface.color.shaded(lit);

    // Mirror reflection. The blend runs even when the bounce budget is
    // exhausted, against black, so a specular surface still darkens by
    // its mirror weight.
    let specularity = primitive.surface.specularity;
    let reflected = if specularity > 0 && bounces > 0 {
        let d = ray.direction;
        let reflected_dir = d - 2.0 * d.dot(normal) * normal;
        let reflected_ray = Ray::new(point, reflected_dir);
        trace(scene, config, &reflected_ray, bounces - 1, Some(index))
    } else {
        Rgb::BLACK
    };

    Rgb::blend(base, reflected, 255 - specularity)
}

/// Background color for a ray that hit nothing.
///
/// Flat scene background, or the sky gradient when configured: horizon
/// and zenith colors blended by how far the ray's elevation is from
/// level, `|elevation| * 2 / pi`.
fn background(scene: &Scene, config: &RenderConfig, direction: Vec3) -> Rgb {
    match &config.sky {
        Some(sky) => {
            let elevation = Spherical::from(direction).elevation;
            let alpha = (elevation.abs() / FRAC_PI_2 * 255.0).min(255.0) as u8;
            Rgb::blend(sky.zenith, sky.horizon, alpha)
        }
        None => scene.background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SkyGradient;
    use glint_core::{Light, Primitive, Surface};

    const BG: Rgb = Rgb::new(160, 160, 160);

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    /// One diffuse sphere straight ahead, one light directly above it.
    fn lit_sphere_scene(specularity: u8) -> Scene {
        let mut scene = Scene::new(BG, 0.2);
        scene.add(Primitive::sphere(
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
            Surface::new(Rgb::new(200, 100, 50), specularity),
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 10.0, 0.0), 2.0));
        scene
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = lit_sphere_scene(0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert_eq!(trace(&scene, &config(), &ray, 10, None), BG);
    }

    #[test]
    fn test_lit_surface_brighter_than_ambient() {
        let scene = lit_sphere_scene(0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let color = trace(&scene, &config(), &ray, 10, None);
        let ambient_only = Rgb::new(200, 100, 50).shaded(0.2);
        assert!(color.r > ambient_only.r);
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let mut scene = lit_sphere_scene(0);
        // Opaque occluder strictly between the hit point (~(4,0,0))
        // and the light at (0,10,0).
        scene.add(Primitive::sphere(
            Vec3::new(2.0, 5.0, 0.0),
            1.0,
            Surface::new(Rgb::WHITE, 0),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let color = trace(&scene, &config(), &ray, 10, None);

        // With its only light shadowed the surface falls back to the
        // pure ambient term.
        assert_eq!(color, Rgb::new(200, 100, 50).shaded(0.2));
    }

    #[test]
    fn test_zero_bounce_budget_skips_recursion() {
        // Fully specular surface with no bounce budget: the shaded
        // color blends against black at the surface's mirror weight,
        // with no recursive call.
        let scene = lit_sphere_scene(255);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let color = trace(&scene, &config(), &ray, 0, None);
        assert_eq!(color, Rgb::BLACK);
    }

    #[test]
    fn test_zero_bounce_partial_specularity() {
        let scene = lit_sphere_scene(100);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let with_reflection_off = trace(&scene, &config(), &ray, 0, None);
        let diffuse_scene = lit_sphere_scene(0);
        let diffuse = trace(&diffuse_scene, &config(), &ray, 0, None);

        // Blended with black at alpha = 255 - 100.
        assert_eq!(
            with_reflection_off,
            Rgb::blend(diffuse, Rgb::BLACK, 155)
        );
    }

    #[test]
    fn test_diffuse_surface_ignores_bounce_budget() {
        let scene = lit_sphere_scene(0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(
            trace(&scene, &config(), &ray, 0, None),
            trace(&scene, &config(), &ray, 50, None)
        );
    }

    #[test]
    fn test_mirror_sees_background() {
        // A perfect mirror with a bounce budget reflects the ray into
        // empty space and picks up the background color.
        let mut scene = Scene::new(BG, 0.0);
        scene.add(Primitive::sphere(
            Vec3::new(5.0, 0.0, 0.0),
            1.0,
            Surface::new(Rgb::BLACK, 255),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let color = trace(&scene, &config(), &ray, 1, None);
        assert_eq!(color, BG);
    }

    #[test]
    fn test_sky_gradient_endpoints() {
        let scene = Scene::new(BG, 0.0);
        let mut cfg = config();
        cfg.sky = Some(SkyGradient {
            horizon: Rgb::new(255, 255, 255),
            zenith: Rgb::new(0, 0, 255),
        });

        let level = trace(&scene, &cfg, &Ray::new(Vec3::ZERO, Vec3::X), 0, None);
        assert_eq!(level, Rgb::new(255, 255, 255));

        let up = trace(&scene, &cfg, &Ray::new(Vec3::ZERO, Vec3::Y), 0, None);
        assert_eq!(up, Rgb::new(0, 0, 255));

        let down = trace(&scene, &cfg, &Ray::new(Vec3::ZERO, Vec3::NEG_Y), 0, None);
        assert_eq!(down, Rgb::new(0, 0, 255));
    }
}
