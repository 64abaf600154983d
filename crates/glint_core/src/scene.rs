//! Scene description types for glint.
//!
//! These records map one-to-one onto the JSON scene document. Field names
//! are PascalCase on disk (`Mdiff`, `LookFrom`, `DirectionToLight`, ...).
//! All vectors and colors are three-element arrays.

use glint_math::{Color, DVec3, Point3};
use serde::{Deserialize, Serialize};

/// Surface coefficients shared by every primitive kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaterialDesc {
    /// Diffuse color
    pub mdiff: Color,
    /// Specular color
    pub mspec: Color,
    /// Gloss exponent of the specular lobe
    pub mgls: f64,
    /// Weight of the mirror-reflected color
    pub refl: f64,
    /// Diffuse weight
    pub kd: f64,
    /// Specular weight
    pub ks: f64,
    /// Ambient weight
    pub ka: f64,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            mdiff: Color::splat(0.5),
            mspec: Color::ONE,
            mgls: 16.0,
            refl: 0.0,
            kd: 1.0,
            ks: 0.0,
            ka: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SphereDesc {
    pub center: Point3,
    pub radius: f64,
    #[serde(flatten)]
    pub material: MaterialDesc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TriangleDesc {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    #[serde(flatten)]
    pub material: MaterialDesc,
}

/// An infinite single-sided plane `dot(normal, x) = distance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaneDesc {
    pub normal: DVec3,
    pub distance: f64,
    #[serde(flatten)]
    pub material: MaterialDesc,
}

/// Pinhole camera. The field of view is in degrees and applies to both axes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CameraDesc {
    pub look_at: Point3,
    pub look_from: Point3,
    pub up: DVec3,
    pub field_of_view: f64,
}

/// The single directional light plus the scene's ambient and background colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LightDesc {
    pub direction_to_light: DVec3,
    pub light_color: Color,
    pub ambient_light: Color,
    pub background_color: Color,
}

/// A complete scene document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SceneDescription {
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub triangles: Vec<TriangleDesc>,
    #[serde(default)]
    pub planes: Vec<PlaneDesc>,
    pub camera: CameraDesc,
    pub light: LightDesc,
}

impl SceneDescription {
    /// Total number of primitives of all kinds.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.triangles.len() + self.planes.len()
    }

    /// Iterate every material in primitive order (spheres, triangles, planes).
    pub fn materials(&self) -> impl Iterator<Item = &MaterialDesc> {
        self.spheres
            .iter()
            .map(|s| &s.material)
            .chain(self.triangles.iter().map(|t| &t.material))
            .chain(self.planes.iter().map(|p| &p.material))
    }
}
