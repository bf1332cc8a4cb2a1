// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod spherical;
pub use ray::Ray;
pub use spherical::Spherical;
