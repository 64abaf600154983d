//! glint renderer - Whitted-style recursive ray tracing
//!
//! Spheres, triangles and single-sided planes lit by one directional light,
//! shaded with Phong diffuse/specular terms, hard shadows and recursive
//! mirror reflection.
//!
//! Scenes are built in code or from a [`glint_core::SceneDescription`]:
//!
//! ```no_run
//! use glint_renderer::{render_parallel, RenderConfig, Scene};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let desc = glint_core::load_scene("scenes/mirror_spheres.json")?;
//! let scene = Scene::from_description(&desc)?;
//! let image = render_parallel(&scene, &RenderConfig::default())?;
//! image.to_rgb_image().save("render.png")?;
//! # Ok(())
//! # }
//! ```

mod bucket;
mod camera;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
pub mod shading;
mod sphere;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, CameraError, RayGrid};
pub use light::Light;
pub use material::Material;
pub use plane::Plane;
pub use primitive::{GeometryError, Primitive};
pub use renderer::{
    render, render_pixel, shade, trace, ImageBuffer, RenderConfig, Sampling, DEFAULT_MAX_DEPTH,
};
pub use scene::{Hit, Scene, SceneError};
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleHit};

/// Re-export common math types from glint_math
pub use glint_math::{Color, Point3, Ray};
