//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are rendered independently
//! and in parallel with rayon, then stitched back into one image.

use std::time::Instant;

use rayon::prelude::*;

use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};
use crate::{CameraError, Color, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of the top-left corner
    pub x: u32,
    /// Y coordinate of the top-left corner
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Tile the image into buckets, ordered center first.
///
/// Edge buckets are clipped to the image. A zero `bucket_size` is treated
/// as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);
    let mut buckets = Vec::new();

    for y in (0..height).step_by(size as usize) {
        for x in (0..width).step_by(size as usize) {
            let bw = size.min(width - x);
            let bh = size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, buckets.len()));
        }
    }

    sort_spiral(&mut buckets, width, height);
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Stable sort by squared distance of bucket center to image center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let dist = |b: &Bucket| {
        let cx = b.x as f64 + b.width as f64 / 2.0 - center.0;
        let cy = b.y as f64 + b.height as f64 / 2.0 - center.1;
        cx * cx + cy * cy
    };

    buckets.sort_by(|a, b| dist(a).total_cmp(&dist(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors, row-major within the bucket
    pub pixels: Vec<Color>,
}

/// Render every pixel of one bucket.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(render_pixel(
                scene,
                bucket.x + local_x,
                bucket.y + local_y,
                config,
            ));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
    }
}

impl ImageBuffer {
    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let b = &result.bucket;
        for local_y in 0..b.height {
            for local_x in 0..b.width {
                let color = result.pixels[(local_y * b.width + local_x) as usize];
                self.set(b.x + local_x, b.y + local_y, color);
            }
        }
    }
}

/// Render the scene across all rayon worker threads.
///
/// Every pixel is a pure function of the scene, its coordinates and the
/// config, so the output matches [`crate::render`] exactly.
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> Result<ImageBuffer, CameraError> {
    config.validate()?;

    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets on {} threads",
        config.width,
        config.height,
        buckets.len(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        log::debug!("Bucket {} done", result.bucket.index);
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Camera, Light, Material, Plane, Sampling, Sphere};
    use glint_math::{DVec3, Point3};

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 70, 64);
        assert_eq!(buckets.len(), 4);

        let total: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total, 100 * 70);
        assert!(buckets.iter().all(|b| b.x + b.width <= 100 && b.y + b.height <= 70));
    }

    #[test]
    fn test_spiral_order_starts_at_center() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);
        assert_eq!((buckets[0].x, buckets[0].y), (64, 64));

        for (i, b) in buckets.iter().enumerate() {
            assert_eq!(b.index, i);
        }
    }

    #[test]
    fn test_zero_bucket_size_does_not_hang() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    fn two_sphere_scene() -> Scene {
        let camera = Camera::new(Point3::new(0.0, 1.0, -4.0), Point3::ZERO, DVec3::Y, 50.0).unwrap();
        let light = Light::new(
            DVec3::new(1.0, 2.0, -1.0),
            Color::ONE,
            Color::splat(0.1),
            Color::new(0.1, 0.1, 0.3),
        )
        .unwrap();
        let shiny = Material::diffuse(Color::new(0.8, 0.2, 0.2))
            .with_specular(Color::ONE, 20.0)
            .with_weights(0.6, 0.3, 0.1)
            .with_reflectivity(0.4);

        Scene::new(camera, light)
            .with(Sphere::new(Point3::new(-0.7, 0.0, 0.0), 0.6, shiny).unwrap())
            .with(Sphere::new(Point3::new(0.7, 0.0, 0.5), 0.6, shiny).unwrap())
            .with(Plane::new(DVec3::Y, -0.6, shiny).unwrap())
    }

    #[test]
    fn test_parallel_matches_serial() {
        let scene = two_sphere_scene();
        let config = RenderConfig::default()
            .with_resolution(37, 23)
            .with_bucket_size(8);

        let serial = render(&scene, &config).unwrap();
        let parallel = render_parallel(&scene, &config).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_parallel_matches_serial_jittered() {
        let scene = two_sphere_scene();
        let config = RenderConfig::default()
            .with_resolution(16, 16)
            .with_bucket_size(5)
            .with_sampling(Sampling::Jittered, 7);

        let serial = render(&scene, &config).unwrap();
        let parallel = render_parallel(&scene, &config).unwrap();
        assert_eq!(serial, parallel);
    }
}
