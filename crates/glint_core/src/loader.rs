//! JSON scene loading.
//!
//! This module provides the main entry point for reading a scene document
//! from disk and turning it into a `SceneDescription`.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene document from a JSON file.
///
/// # Example
///
/// ```ignore
/// use glint_core::load_scene;
///
/// let scene = load_scene("scenes/mirror_spheres.json")?;
/// println!("Loaded {} spheres", scene.spheres.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let text = fs::read_to_string(path)?;
    load_scene_from_str(&text)
}

/// Parse a scene document from a JSON string.
pub fn load_scene_from_str(text: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(text)?;

    log::info!(
        "Parsed scene: {} spheres, {} triangles, {} planes",
        scene.spheres.len(),
        scene.triangles.len(),
        scene.planes.len()
    );

    // Weights are free-form, but values far outside [0, 1] are usually typos
    for (i, material) in scene.materials().enumerate() {
        for (name, weight) in [
            ("Kd", material.kd),
            ("Ks", material.ks),
            ("Ka", material.ka),
            ("Refl", material.refl),
        ] {
            if !(-1.0..=2.0).contains(&weight) {
                log::warn!("Primitive {} has unusual {} weight {}", i, name, weight);
            }
        }
    }

    Ok(scene)
}
