//! Render-ready scene and the nearest-hit visibility query.

use crate::{Camera, CameraError, GeometryError, Light, Material, Plane, Primitive, Sphere, Triangle};
use glint_core::SceneDescription;
use glint_math::Ray;
use thiserror::Error;

/// Errors raised while turning a scene description into a render-ready scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("invalid camera: {0}")]
    Camera(#[from] CameraError),

    #[error("invalid light: {0}")]
    Light(#[source] GeometryError),

    #[error("invalid sphere #{index}: {source}")]
    Sphere {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("invalid triangle #{index}: {source}")]
    Triangle {
        index: usize,
        #[source]
        source: GeometryError,
    },

    #[error("invalid plane #{index}: {source}")]
    Plane {
        index: usize,
        #[source]
        source: GeometryError,
    },
}

/// Result of a visibility query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Ray parameter of the intersection (always > 0)
    pub t: f64,
    /// Position of the primitive in scene order
    pub index: usize,
    pub primitive: &'a Primitive,
}

/// Immutable scene: ordered primitives, one camera, one light.
///
/// Primitive order matters only for ties: when two primitives are hit at
/// exactly the same `t`, the one added first wins.
#[derive(Debug, Clone)]
pub struct Scene {
    primitives: Vec<Primitive>,
    camera: Camera,
    light: Light,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, light: Light) -> Self {
        Self {
            primitives: Vec::new(),
            camera,
            light,
        }
    }

    /// Add a primitive, returning its index.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> usize {
        self.primitives.push(primitive.into());
        self.primitives.len() - 1
    }

    /// Builder-style `add`.
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.add(primitive);
        self
    }

    /// Validate a scene description and build the scene.
    ///
    /// Primitives are added as spheres, then triangles, then planes, each in
    /// document order.
    pub fn from_description(desc: &SceneDescription) -> Result<Self, SceneError> {
        let camera = Camera::try_from(&desc.camera)?;
        let light = Light::try_from(&desc.light).map_err(SceneError::Light)?;
        let mut scene = Scene::new(camera, light);

        for (index, s) in desc.spheres.iter().enumerate() {
            let sphere = Sphere::new(s.center, s.radius, Material::from(&s.material))
                .map_err(|source| SceneError::Sphere { index, source })?;
            scene.add(sphere);
        }

        for (index, t) in desc.triangles.iter().enumerate() {
            let triangle = Triangle::new(t.a, t.b, t.c, Material::from(&t.material))
                .map_err(|source| SceneError::Triangle { index, source })?;
            scene.add(triangle);
        }

        for (index, p) in desc.planes.iter().enumerate() {
            let plane = Plane::new(p.normal, p.distance, Material::from(&p.material))
                .map_err(|source| SceneError::Plane { index, source })?;
            scene.add(plane);
        }

        log::info!("Built scene with {} primitives", scene.len());
        for (i, primitive) in scene.primitives.iter().enumerate() {
            log::debug!("  [{}] {}", i, primitive.kind());
        }

        Ok(scene)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Find the nearest primitive hit at strictly positive `t`.
    ///
    /// `excluded` skips one primitive by index; secondary rays pass the
    /// primitive they start on so they cannot re-hit it. A later primitive
    /// only replaces the current best when its `t` is strictly smaller.
    pub fn cast(&self, ray: &Ray, excluded: Option<usize>) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if excluded == Some(index) {
                continue;
            }

            let Some(t) = primitive.intersect(ray) else {
                continue;
            };
            if t <= 0.0 {
                continue;
            }

            if closest.map_or(true, |hit| t < hit.t) {
                closest = Some(Hit {
                    t,
                    index,
                    primitive,
                });
            }
        }

        closest
    }
}
