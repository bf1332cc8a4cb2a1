//! Glint Core - scene model for the ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle` primitives with ray
//!   intersection and surface normals
//! - **Scene types**: `Scene`, `Light`, `Camera`, `Surface`, `Rgb`
//!
//! Scenes are plain data: build one in code or deserialize it from
//! JSON, call [`Scene::preprocess`] to fill in derived triangle
//! fields, then hand it to `glint_renderer`.

pub mod camera;
pub mod color;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use camera::{Camera, Projection};
pub use color::Rgb;
pub use primitive::{Plane, Primitive, Shape, Sphere, Surface, Triangle};
pub use scene::{Light, Scene, SceneError};
