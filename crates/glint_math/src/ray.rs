use crate::DVec3;

/// A ray in 3D space with origin and unit direction.
///
/// Rays are transient values: they are built, passed by value into a
/// visibility query, and dropped. The direction is normalized once on
/// construction so every consumer sees a unit vector; a zero-length input
/// stays zero, which all intersection routines treat as "no hit".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the (unit) direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation_normalizes() {
        let origin = DVec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(origin, DVec3::new(0.0, 3.0, 4.0));

        assert_eq!(ray.origin, origin);
        assert!((ray.direction.length() - 1.0).abs() < 1e-12);
        assert!((ray.direction - DVec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_ray_zero_direction_stays_zero() {
        let ray = Ray::new(DVec3::ONE, DVec3::ZERO);
        assert_eq!(ray.direction, DVec3::ZERO);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        assert_eq!(ray.at(0.0), DVec3::ZERO);
        assert_eq!(ray.at(1.0), DVec3::X);
        assert_eq!(ray.at(2.0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(DVec3::ZERO, DVec3::Y);
        let ray2 = ray1; // Copy, not move

        // Both should be usable
        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
