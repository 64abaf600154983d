//! Glint Core - scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDesc`,
//!   `TriangleDesc`, `PlaneDesc`, `MaterialDesc`, `CameraDesc`, `LightDesc`
//! - **JSON loading**: `load_scene` / `load_scene_from_str`
//!
//! The description is a plain data mirror of the scene document. Geometric
//! validation (degenerate triangles, bad cameras) happens when the renderer
//! builds its own scene from it.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/mirror_spheres.json")?;
//! println!("Loaded {} primitives", scene.primitive_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use scene::{
    CameraDesc, LightDesc, MaterialDesc, PlaneDesc, SceneDescription, SphereDesc, TriangleDesc,
};
