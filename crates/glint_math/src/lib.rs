// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;

/// A point in world space.
pub type Point3 = DVec3;

/// Linear RGB color, components nominally in [0, 1].
pub type Color = DVec3;

/// Tolerance used by every intersection and degeneracy test.
pub const EPSILON: f64 = 1e-6;

/// Mirror `a` about the unit vector `b`: `2·dot(a, b)·b − a`.
///
/// Used both for the Phong specular lobe (light direction about the normal)
/// and for mirror reflection (view direction about the normal). Note that
/// `a` points *away* from the surface in both cases, so this is not the
/// incoming-ray reflection formula `d − 2·dot(d, n)·n`.
#[inline]
pub fn reflect(a: DVec3, b: DVec3) -> DVec3 {
    2.0 * a.dot(b) * b - a
}
