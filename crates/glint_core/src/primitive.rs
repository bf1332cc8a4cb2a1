//! Geometric primitives and ray intersection.
//!
//! Every shape answers two questions: where along a ray it is first
//! hit (`intersect`, strictly positive distance only), and what its
//! surface normal is at a point (`normal_at`).

use glint_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Rays closer to parallel than this to a plane never hit it.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Surface appearance shared by every primitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Surface {
    /// Base color of the surface.
    pub color: Rgb,
    /// Mirror weight: 0 = fully diffuse, 255 = perfect mirror.
    pub specularity: u8,
}

impl Surface {
    /// Create a surface description.
    pub fn new(color: Rgb, specularity: u8) -> Self {
        Self { color, specularity }
    }
}

/// A sphere, described by center and radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance along `ray` to the nearest intersection, if any.
    ///
    /// Solves the quadratic |O + tD - C|^2 = r^2. When the ray starts
    /// inside the sphere the smaller root is behind the origin, so the
    /// far root is reported instead.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t1 = (-b - sqrt_d) / (2.0 * a);
        let t2 = (-b + sqrt_d) / (2.0 * a);

        let near = t1.min(t2);
        let far = t1.max(t2);

        if far <= 0.0 {
            // Sphere is entirely behind the ray.
            None
        } else if near > 0.0 {
            Some(near)
        } else {
            // Origin is inside the sphere.
            Some(far)
        }
    }
}

/// An infinite plane through `point` with the given normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Create a new plane.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Distance along `ray` to the plane, if it is hit.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);

        // Ray is parallel to the plane
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.point - ray.origin) / denom;
        (t > 0.0).then_some(t)
    }
}

/// A triangle with precomputed intersection data.
///
/// The derived fields cache the face normal, the edge basis
/// `u = v1 - v0`, `v = v2 - v0` and its dot products, so the per-ray
/// containment test is a handful of multiplies. They are filled in by
/// the constructor (and by [`crate::Scene::preprocess`] after
/// deserialization) and immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    // Derived fields. Serde skips them; `precompute` restores them.
    #[serde(skip)]
    normal: Vec3,
    #[serde(skip)]
    u: Vec3,
    #[serde(skip)]
    v: Vec3,
    #[serde(skip)]
    uu: f32,
    #[serde(skip)]
    uv: f32,
    #[serde(skip)]
    vv: f32,
    #[serde(skip)]
    dn: f32,
}

impl Triangle {
    /// Create a triangle from three vertices, derived fields included.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let mut tri = Self {
            vertices: [v0, v1, v2],
            normal: Vec3::ZERO,
            u: Vec3::ZERO,
            v: Vec3::ZERO,
            uu: 0.0,
            uv: 0.0,
            vv: 0.0,
            dn: 0.0,
        };
        tri.precompute();
        tri
    }

    /// Fill in the derived fields from the vertices.
    ///
    /// A zero-area triangle gets a zero normal and stays valid data;
    /// it simply never reports an intersection.
    pub fn precompute(&mut self) {
        self.u = self.vertices[1] - self.vertices[0];
        self.v = self.vertices[2] - self.vertices[0];
        self.normal = self.u.cross(self.v).try_normalize().unwrap_or(Vec3::ZERO);
        self.uu = self.u.dot(self.u);
        self.uv = self.u.dot(self.v);
        self.vv = self.v.dot(self.v);
        self.dn = self.uv * self.uv - self.uu * self.vv;
    }

    /// The precomputed unit face normal (zero for degenerate triangles).
    pub fn face_normal(&self) -> Vec3 {
        self.normal
    }

    /// Distance along `ray` to the triangle, if it is hit.
    ///
    /// Intersects the ray with the triangle's plane, then projects the
    /// hit point into the `(u, v)` edge basis and checks containment.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Degenerate triangles never intersect.
        if self.normal == Vec3::ZERO {
            return None;
        }

        let denom = self.normal.dot(ray.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.vertices[0] - ray.origin) / denom;
        if t <= 0.0 {
            return None;
        }

        // Project the hit point into the edge basis.
        let w = ray.at(t) - self.vertices[0];
        let wu = w.dot(self.u);
        let wv = w.dot(self.v);

        let s1 = (self.uv * wv - self.vv * wu) / self.dn;
        let s2 = (self.uv * wu - self.uu * wv) / self.dn;

        let inside = (0.0..=1.0).contains(&s1) && s2 >= 0.0 && s1 + s2 <= 1.0;
        inside.then_some(t)
    }
}

/// The shape variants a primitive can take.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

/// A scene object: a shape plus its surface appearance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Primitive {
    pub shape: Shape,
    pub surface: Surface,
}

impl Primitive {
    /// Create a primitive from a shape and surface.
    pub fn new(shape: Shape, surface: Surface) -> Self {
        Self { shape, surface }
    }

    /// Convenience constructor for a sphere.
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), surface)
    }

    /// Convenience constructor for a plane.
    pub fn plane(point: Vec3, normal: Vec3, surface: Surface) -> Self {
        Self::new(Shape::Plane(Plane::new(point, normal)), surface)
    }

    /// Convenience constructor for a triangle.
    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3, surface: Surface) -> Self {
        Self::new(Shape::Triangle(Triangle::new(v0, v1, v2)), surface)
    }

    /// Distance along `ray` to this primitive, if it is hit.
    ///
    /// Only strictly positive distances count as hits; an intersection
    /// at or behind the ray origin is a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match &self.shape {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
        }
    }

    /// Surface normal at `point`, assumed to lie on the primitive.
    ///
    /// The result is not normalized (the sphere case returns
    /// `point - center`); callers normalize. The triangle normal is the
    /// negated face normal, oriented for the viewing side used by the
    /// demo scenes; callers must not assume a globally consistent
    /// outward orientation.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        match &self.shape {
            Shape::Sphere(s) => point - s.center,
            Shape::Plane(p) => p.normal,
            Shape::Triangle(t) => -t.face_normal(),
        }
    }
}
