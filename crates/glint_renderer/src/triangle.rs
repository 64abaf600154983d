//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::{GeometryError, Material};
use glint_math::{DVec3, Point3, Ray, EPSILON};

/// A triangle primitive.
///
/// The face normal follows the winding `A → B → C` and does not depend on
/// the hit point.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    a: Point3,
    b: Point3,
    c: Point3,
    /// Pre-computed face normal (unit length)
    normal: DVec3,
    /// Material
    material: Material,
}

/// Ray parameter and barycentric coordinates of a triangle hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub t: f64,
    pub u: f64,
    pub v: f64,
}

impl Triangle {
    /// Create a new triangle from three non-collinear vertices.
    pub fn new(a: Point3, b: Point3, c: Point3, material: Material) -> Result<Self, GeometryError> {
        let cross = (b - a).cross(c - a);
        if !cross.is_finite() || cross.length() < EPSILON {
            return Err(GeometryError::DegenerateTriangle);
        }

        Ok(Self {
            a,
            b,
            c,
            normal: cross.normalize(),
            material,
        })
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Face normal `normalize(cross(B − A, C − A))`.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn centroid(&self) -> Point3 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Möller-Trumbore ray-triangle intersection algorithm.
    pub fn intersect_barycentric(&self, ray: &Ray) -> Option<TriangleHit> {
        let edge1 = self.b - self.a;
        let edge2 = self.c - self.a;

        let h = ray.direction().cross(edge2);
        let det = edge1.dot(h);

        // Ray is parallel to triangle
        if det.abs() < EPSILON {
            return None;
        }

        let f = 1.0 / det;
        let s = ray.origin() - self.a;
        let u = f * s.dot(h);

        // Check if intersection is outside triangle (u parameter)
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);

        // Check if intersection is outside triangle (v parameter)
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);

        // Behind or at the origin
        if t <= EPSILON {
            return None;
        }

        Some(TriangleHit { t, u, v })
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.intersect_barycentric(ray).map(|hit| hit.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn xy_triangle(z: f64) -> Triangle {
        // Counter-clockwise seen from +Z, normal points to +Z
        Triangle::new(
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
            Point3::new(0.0, 1.0, z),
            Material::diffuse(Color::splat(0.5)),
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit() {
        let tri = xy_triangle(-1.0);

        // Ray pointing at triangle center
        let ray = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let t = tri.intersect(&ray).unwrap();
        assert!((t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle(-1.0);

        // Ray pointing away
        let ray = Ray::new(Point3::ZERO, DVec3::new(0.0, 0.0, 1.0));

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = xy_triangle(-1.0);
        let ray = Ray::new(Point3::new(2.0, 2.0, 0.0), DVec3::new(0.0, 0.0, -1.0));

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let tri = xy_triangle(-1.0);
        let ray = Ray::new(Point3::new(-5.0, 0.0, -1.0), DVec3::X);

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_triangle_hit_from_back_face() {
        // Möller-Trumbore is two-sided
        let tri = xy_triangle(-1.0);
        let ray = Ray::new(Point3::new(0.0, 0.0, -3.0), DVec3::Z);

        let t = tri.intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangle_centroid_barycentrics() {
        let triangles = [
            xy_triangle(2.0),
            Triangle::new(
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 3.0, 1.0),
                Point3::new(-2.0, 0.5, 4.0),
                Material::diffuse(Color::ONE),
            )
            .unwrap(),
        ];

        for tri in triangles {
            // Start outside on the normal side and shoot back along the inward normal
            let origin = tri.centroid() + tri.normal() * 3.0;
            let ray = Ray::new(origin, -tri.normal());

            let hit = tri.intersect_barycentric(&ray).unwrap();
            assert!(hit.u >= 0.0 && hit.v >= 0.0);
            assert!(hit.u + hit.v <= 1.0);
            assert!((hit.u - 1.0 / 3.0).abs() < 1e-9);
            assert!((hit.v - 1.0 / 3.0).abs() < 1e-9);
            assert!((hit.t - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_triangle_hit_at_origin_rejected() {
        let tri = xy_triangle(0.0);
        let ray = Ray::new(Point3::ZERO, DVec3::Z);

        assert_eq!(tri.intersect(&ray), None);
    }

    #[test]
    fn test_triangle_normal_follows_winding() {
        let tri = xy_triangle(0.0);
        assert!((tri.normal() - DVec3::Z).length() < 1e-12);

        let [a, b, c] = tri.vertices();
        let flipped = Triangle::new(a, c, b, *tri.material()).unwrap();
        assert!((flipped.normal() + DVec3::Z).length() < 1e-12);
        assert!((flipped.normal().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_rejected() {
        let result = Triangle::new(
            Point3::ZERO,
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Material::diffuse(Color::ONE),
        );
        assert!(matches!(result, Err(GeometryError::DegenerateTriangle)));
    }
}
