//! Tiled parallel renderer.
//!
//! Partitions the frame into contiguous row bands and renders each
//! band on an independent rayon task. Bands own disjoint regions of
//! the output buffer, so the spatial partition is the only
//! concurrency-safety mechanism needed: no locks, no atomics. The call
//! joins all bands before returning.

use glint_core::{Camera, Rgb, Scene};
use glint_math::Ray;
use rayon::prelude::*;
use std::time::Instant;

use crate::camera_ray::pixel_to_ray;
use crate::shading::trace;

/// Bytes per framebuffer pixel (RGB, one byte per channel).
pub const BYTES_PER_PIXEL: usize = 3;

/// Sky gradient background: horizon and zenith colors blended by ray
/// elevation.
#[derive(Debug, Clone, Copy)]
pub struct SkyGradient {
    pub horizon: Rgb,
    pub zenith: Rgb,
}

/// Render settings that are per-call, not scene state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursive-reflection depth per ray.
    pub bounce_limit: u32,
    /// Number of row bands rendered in parallel.
    pub workers: usize,
    /// Sky gradient; `None` uses the scene's flat background color.
    pub sky: Option<SkyGradient>,
    /// Attenuate light contributions by inverse-square distance.
    pub inverse_square_falloff: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bounce_limit: 10,
            workers: 1,
            sky: None,
            inverse_square_falloff: false,
        }
    }
}

/// Render a frame into `framebuffer`.
///
/// Writes `width * height * 3` bytes of row-major RGB. The scene and
/// camera are read-only for the duration of the call and must not be
/// mutated concurrently. Output is byte-identical for any worker
/// count.
///
/// Panics if the framebuffer size doesn't match the image dimensions
/// or if `workers` is zero.
pub fn render(
    framebuffer: &mut [u8],
    width: u32,
    height: u32,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) {
    assert_eq!(
        framebuffer.len(),
        width as usize * height as usize * BYTES_PER_PIXEL,
        "framebuffer size must be width * height * 3"
    );
    assert!(config.workers >= 1, "worker count must be at least 1");

    let start = Instant::now();

    let rows_per_band = (height as usize).div_ceil(config.workers);
    let band_bytes = rows_per_band * width as usize * BYTES_PER_PIXEL;
    let row_bytes = width as usize * BYTES_PER_PIXEL;

    framebuffer
        .par_chunks_mut(band_bytes)
        .enumerate()
        .for_each(|(band, chunk)| {
            let first_row = band * rows_per_band;
            for (row_offset, row) in chunk.chunks_mut(row_bytes).enumerate() {
                let y = (first_row + row_offset) as u32;
                for x in 0..width {
                    let direction = pixel_to_ray(camera, x, y, width, height);
                    let ray = Ray::new(camera.origin, direction);
                    let color = trace(scene, config, &ray, config.bounce_limit, None);

                    let offset = x as usize * BYTES_PER_PIXEL;
                    row[offset] = color.r;
                    row[offset + 1] = color.g;
                    row[offset + 2] = color.b;
                }
            }
        });

    log::debug!(
        "rendered {}x{} frame with {} workers in {:?}",
        width,
        height,
        config.workers,
        start.elapsed()
    );
}
