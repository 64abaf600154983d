//! Recursive Whitted renderer.
//!
//! Implements:
//! - Primary visibility with hard shadows from the directional light
//! - Phong local shading composed with recursive mirror reflection
//! - Optional four-sample jittered pixel sampling

use std::time::Instant;

use crate::shading::{diffuse, final_color, specular};
use crate::{CameraError, Scene};
use glint_math::{reflect, Color, DVec3, Point3, Ray};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default reflection recursion budget.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// How primary rays are placed inside each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// One ray through the pixel center
    #[default]
    Center,
    /// Four rays, one random point per pixel quadrant, averaged
    Jittered,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Pixel sampling strategy
    pub sampling: Sampling,
    /// Edge length of parallel render buckets
    pub bucket_size: u32,
    /// Seed for jittered sampling
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            max_depth: DEFAULT_MAX_DEPTH,
            sampling: Sampling::Center,
            bucket_size: crate::DEFAULT_BUCKET_SIZE,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the reflection recursion budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling, seed: u64) -> Self {
        self.sampling = sampling;
        self.seed = seed;
        self
    }

    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size.max(1);
        self
    }

    /// Check the resolution before rendering.
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Composite color at a surface point, following mirror reflections.
///
/// `incoming` is the direction of the ray that hit `point` on primitive
/// `index`. Each level shades locally, then casts the mirrored view ray
/// (excluding the current primitive):
/// - miss: the reflected term is the background color;
/// - hit with `depth > 0`: recurse from the new hit with `depth - 1`;
/// - hit with `depth == 0`: the struck primitive's raw diffuse color stands
///   in for its shaded color.
pub fn shade(scene: &Scene, point: Point3, index: usize, incoming: DVec3, depth: u32) -> Color {
    let Some(primitive) = scene.primitive(index) else {
        return scene.light().background;
    };
    let light = scene.light();
    let material = primitive.material();

    let v_hat = (-incoming).normalize_or_zero();
    let (cdiff, n_hat) = diffuse(light, material, primitive.normal_at(point));
    let cspec = specular(light, material, n_hat, v_hat);

    let reflected = Ray::new(point, reflect(v_hat, n_hat));
    let crefl = match scene.cast(&reflected, Some(index)) {
        None => light.background,
        Some(hit) if depth > 0 => shade(
            scene,
            reflected.at(hit.t),
            hit.index,
            reflected.direction(),
            depth - 1,
        ),
        Some(hit) => hit.primitive.material().diffuse,
    };

    final_color(material, cdiff, cspec, light.ambient_term(), crefl)
}

/// Color seen along one primary ray from the camera.
pub fn trace(scene: &Scene, direction: DVec3, max_depth: u32) -> Color {
    let ray = Ray::new(scene.camera().look_from(), direction);

    let Some(hit) = scene.cast(&ray, None) else {
        return scene.light().background;
    };

    let point = ray.at(hit.t);
    let shadow = Ray::new(point, scene.light().direction());
    if scene.cast(&shadow, Some(hit.index)).is_some() {
        // In shadow: raw ambient light, not scaled by the light color
        return scene.light().ambient;
    }

    shade(scene, point, hit.index, ray.direction(), max_depth)
}

/// Render a single pixel of the output image.
///
/// `(x, y)` are image coordinates with `y = 0` at the top. The ray grid runs
/// bottom to top, so image row `y` samples grid row `height - 1 - y`.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let camera = scene.camera();
    let row = config.height - 1 - y;

    match config.sampling {
        Sampling::Center => {
            let direction = camera.ray_direction(row, x, config.width, config.height);
            trace(scene, direction, config.max_depth)
        }
        Sampling::Jittered => {
            let mut rng = pixel_rng(config.seed, x, y);
            let directions =
                camera.jittered_directions(row, x, config.width, config.height, &mut rng);

            let sum = directions
                .iter()
                .map(|d| trace(scene, *d, config.max_depth))
                .fold(Color::ZERO, |acc, c| acc + c);
            sum / directions.len() as f64
        }
    }
}

/// Per-pixel RNG so results do not depend on render order.
fn pixel_rng(seed: u64, x: u32, y: u32) -> StdRng {
    let pixel = ((y as u64) << 32) | x as u64;
    StdRng::seed_from_u64(seed ^ pixel.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Linear RGB image stored row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Flat `width × height × 3` float buffer.
    pub fn as_rgb_f32(&self) -> Vec<f32> {
        self.pixels
            .iter()
            .flat_map(|c| [c.x as f32, c.y as f32, c.z as f32])
            .collect()
    }

    /// 8-bit RGB bytes, clamped to [0, 1] first. No gamma is applied.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| {
                let c = c.clamp(Color::ZERO, Color::ONE) * 255.0;
                [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
            })
            .collect()
    }

    /// Convert to an `image` buffer for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let c = self.get(x, y).clamp(Color::ZERO, Color::ONE) * 255.0;
            image::Rgb([c.x.round() as u8, c.y.round() as u8, c.z.round() as u8])
        })
    }
}

/// Render the entire scene to an image buffer.
///
/// This is the single-threaded reference path; see `render_parallel` for the
/// bucketed multi-threaded version, which produces identical output.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, CameraError> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} ({} primitives, depth {}, {:?} sampling)",
        config.width,
        config.height,
        scene.len(),
        config.max_depth,
        config.sampling
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        for x in 0..config.width {
            image.set(x, y, render_pixel(scene, x, y, config));
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}
