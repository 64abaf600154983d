//! Sphere primitive for ray tracing.

use crate::{GeometryError, Material};
use glint_math::{DVec3, Point3, Ray, EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be finite and positive.
    pub fn new(center: Point3, radius: f64, material: Material) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Solve `a·t² + b·t + c = 0` for the nearest non-negative root.
    ///
    /// When the origin is inside the sphere only the far root is
    /// non-negative and that one is returned.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let d = ray.direction();
        let oc = ray.origin() - self.center;

        let a = d.dot(d);
        // Zero-length direction
        if a < EPSILON {
            return None;
        }
        let b = 2.0 * d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        let t = if t1 < 0.0 && t2 < 0.0 {
            return None;
        } else if t1 < 0.0 {
            t2
        } else if t2 < 0.0 {
            t1
        } else {
            t1.min(t2)
        };

        (t > 0.0).then_some(t)
    }

    /// Outward normal at a point on the surface: `(p − center) / radius`.
    pub fn normal_at(&self, point: Point3) -> DVec3 {
        (point - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn unit_sphere_at(center: Point3) -> Sphere {
        Sphere::new(center, 1.0, Material::diffuse(Color::ONE)).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Point3::ZERO, DVec3::Z);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 4.0).abs() < 1e-9); // Should hit at t=4
    }

    #[test]
    fn test_sphere_hit_at_distance_minus_radius() {
        let centers = [
            Point3::new(3.0, -2.0, 7.0),
            Point3::new(-10.0, 4.0, 0.5),
            Point3::new(0.0, 100.0, 0.0),
        ];
        let origin = Point3::new(0.5, 0.25, -1.0);

        for center in centers {
            let sphere = Sphere::new(center, 0.75, Material::diffuse(Color::ONE)).unwrap();
            let ray = Ray::new(origin, center - origin);
            let expected = (center - origin).length() - 0.75;

            let t = sphere.intersect(&ray).unwrap();
            assert!((t - expected).abs() < 1e-9, "t={t} expected={expected}");
        }
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Point3::ZERO, -DVec3::Z);

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_miss_sideways() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Point3::ZERO, DVec3::Y);

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_from_inside_returns_far_root() {
        let sphere = unit_sphere_at(Point3::ZERO);
        let ray = Ray::new(Point3::ZERO, DVec3::X);

        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_zero_direction_misses() {
        let sphere = unit_sphere_at(Point3::new(0.0, 0.0, 5.0));
        let ray = Ray::new(Point3::ZERO, DVec3::ZERO);

        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_sphere_normal_is_unit() {
        let sphere = Sphere::new(Point3::new(1.0, 2.0, 3.0), 2.5, Material::diffuse(Color::ONE))
            .unwrap();

        for dir in [DVec3::X, -DVec3::Y, DVec3::new(1.0, 1.0, -1.0).normalize()] {
            let p = sphere.center() + dir * sphere.radius();
            let n = sphere.normal_at(p);
            assert!((n.length() - 1.0).abs() < 1e-9);
            assert!((n - dir).length() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Sphere::new(Point3::ZERO, radius, Material::diffuse(Color::ONE));
            assert!(matches!(result, Err(GeometryError::InvalidRadius(_))));
        }
    }
}
