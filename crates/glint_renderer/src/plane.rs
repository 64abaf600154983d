//! Infinite single-sided plane.

use crate::{GeometryError, Material};
use glint_math::{DVec3, Ray, EPSILON};

/// The plane `dot(normal, x) = distance`, visible only from the side its
/// normal points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: DVec3,
    distance: f64,
    material: Material,
}

impl Plane {
    /// Create a plane. A non-unit normal is normalized and the distance
    /// rescaled by the same factor, so the described plane is unchanged.
    pub fn new(normal: DVec3, distance: f64, material: Material) -> Result<Self, GeometryError> {
        let length = normal.length();
        if !length.is_finite() || length < EPSILON {
            return Err(GeometryError::ZeroNormal);
        }

        Ok(Self {
            normal: normal / length,
            distance: distance / length,
            material,
        })
    }

    /// Unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Signed distance from the origin along the normal.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to plane
        if denom.abs() < EPSILON {
            return None;
        }

        // Ray travels along the normal: it approaches from the back face
        if denom > 0.0 {
            return None;
        }

        let t = (-self.normal.dot(ray.origin()) + self.distance) / denom;

        (t > 0.0).then_some(t)
    }
}
