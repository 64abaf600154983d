//! The closed set of renderable primitives.

use crate::{Material, Plane, Sphere, Triangle};
use glint_math::{DVec3, Point3, Ray};
use thiserror::Error;

/// Invalid geometry detected while building a primitive or light.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("plane normal has zero length")]
    ZeroNormal,

    #[error("light direction has zero length")]
    ZeroLightDirection,
}

/// A renderable object: geometry plus material.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
    Plane(Plane),
}

impl Primitive {
    /// Ray parameter of the nearest forward hit, or `None` for a miss.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray),
            Primitive::Triangle(triangle) => triangle.intersect(ray),
            Primitive::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Surface normal at `point`.
    ///
    /// Only the sphere depends on the point; triangles and planes have a
    /// constant normal.
    pub fn normal_at(&self, point: Point3) -> DVec3 {
        match self {
            Primitive::Sphere(sphere) => sphere.normal_at(point),
            Primitive::Triangle(triangle) => triangle.normal(),
            Primitive::Plane(plane) => plane.normal(),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Triangle(triangle) => triangle.material(),
            Primitive::Plane(plane) => plane.material(),
        }
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Triangle(_) => "triangle",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}
