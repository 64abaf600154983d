//! Surface coefficients for Phong shading and mirror reflection.

use glint_core::MaterialDesc;
use glint_math::Color;

/// Per-primitive material.
///
/// The blend weights are free parameters: `kd + ks + ka` is not required to
/// sum to one and no energy conservation is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub diffuse: Color,
    /// Specular color (RGB, 0-1)
    pub specular: Color,
    /// Specular lobe exponent
    pub gloss: f64,
    /// Weight of the mirror-reflected color
    pub reflectivity: f64,
    /// Diffuse weight
    pub kd: f64,
    /// Specular weight
    pub ks: f64,
    /// Ambient weight
    pub ka: f64,
}

impl Material {
    /// A purely diffuse material (`kd = 1`, everything else off).
    pub fn diffuse(color: Color) -> Self {
        Self {
            diffuse: color,
            specular: Color::ZERO,
            gloss: 1.0,
            reflectivity: 0.0,
            kd: 1.0,
            ks: 0.0,
            ka: 0.0,
        }
    }

    /// Set the specular color and gloss exponent.
    pub fn with_specular(mut self, specular: Color, gloss: f64) -> Self {
        self.specular = specular;
        self.gloss = gloss;
        self
    }

    /// Set the mirror reflectivity weight.
    pub fn with_reflectivity(mut self, reflectivity: f64) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the diffuse, specular and ambient blend weights.
    pub fn with_weights(mut self, kd: f64, ks: f64, ka: f64) -> Self {
        self.kd = kd;
        self.ks = ks;
        self.ka = ka;
        self
    }
}

impl From<&MaterialDesc> for Material {
    fn from(desc: &MaterialDesc) -> Self {
        Self {
            diffuse: desc.mdiff,
            specular: desc.mspec,
            gloss: desc.mgls,
            reflectivity: desc.refl,
            kd: desc.kd,
            ks: desc.ks,
            ka: desc.ka,
        }
    }
}
