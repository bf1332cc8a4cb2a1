//! Glint Renderer - recursive CPU ray tracing.
//!
//! Direct illumination with hard shadows and mirror-style reflection,
//! rendered across threads in contiguous row bands. The entry points:
//!
//! - [`render`]: full frame into a caller-owned RGB byte buffer
//! - [`trace`]: single ray, usable for picking without a full frame
//! - [`pixel_to_ray`]: map a screen coordinate to a world ray
//! - [`AdaptiveQuality`]: bounce-depth feedback loop for frame budgets

mod adaptive;
mod camera_ray;
mod query;
mod renderer;
mod shading;

pub use adaptive::AdaptiveQuality;
pub use camera_ray::pixel_to_ray;
pub use query::nearest_hit;
pub use renderer::{render, RenderConfig, SkyGradient, BYTES_PER_PIXEL};
pub use shading::trace;
