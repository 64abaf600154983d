//! Local Phong shading against the single directional light.
//!
//! All color products are component-wise over RGB.

use crate::{Light, Material};
use glint_math::{reflect, Color, DVec3};

/// Diffuse term `light · mdiff · max(0, n̂·l̂)`.
///
/// `normal` need not be unit length; the normalized normal is returned
/// alongside the color for the specular and reflection steps.
pub fn diffuse(light: &Light, material: &Material, normal: DVec3) -> (Color, DVec3) {
    let n_hat = normal.normalize_or_zero();
    let cos_theta = n_hat.dot(light.direction()).max(0.0);

    (light.color * material.diffuse * cos_theta, n_hat)
}

/// Specular term `light · mspec · max(0, v̂·r̂)^gloss` where `r̂` is the light
/// direction mirrored about the normal and `v̂` points back toward the viewer.
pub fn specular(light: &Light, material: &Material, n_hat: DVec3, v_hat: DVec3) -> Color {
    let r_hat = reflect(light.direction(), n_hat);
    let cos_alpha = v_hat.dot(r_hat).max(0.0);

    light.color * material.specular * cos_alpha.powf(material.gloss)
}

/// Weighted composite `Kd·cdiff + Ks·cspec + Ka·camb + Kr·crefl`.
pub fn final_color(
    material: &Material,
    diffuse: Color,
    specular: Color,
    ambient: Color,
    reflected: Color,
) -> Color {
    material.kd * diffuse
        + material.ks * specular
        + material.ka * ambient
        + material.reflectivity * reflected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overhead_light() -> Light {
        Light::new(DVec3::Y, Color::new(1.0, 0.5, 0.25), Color::ZERO, Color::ZERO).unwrap()
    }

    #[test]
    fn test_diffuse_facing_light() {
        let material = Material::diffuse(Color::new(0.5, 1.0, 1.0));
        let (c, n_hat) = diffuse(&overhead_light(), &material, DVec3::new(0.0, 3.0, 0.0));

        assert_eq!(n_hat, DVec3::Y);
        assert!((c - Color::new(0.5, 0.5, 0.25)).length() < 1e-12);
    }

    #[test]
    fn test_diffuse_lambert_falloff() {
        let material = Material::diffuse(Color::ONE);
        let normal = DVec3::new(1.0, 1.0, 0.0);
        let (c, _) = diffuse(&overhead_light(), &material, normal);

        let cos = 1.0 / 2.0_f64.sqrt();
        assert!((c - Color::new(1.0, 0.5, 0.25) * cos).length() < 1e-12);
    }

    #[test]
    fn test_diffuse_facing_away_is_black() {
        let material = Material::diffuse(Color::ONE);
        let (c, _) = diffuse(&overhead_light(), &material, -DVec3::Y);

        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn test_specular_peak_on_mirror_direction() {
        let light = Light::new(
            DVec3::new(1.0, 1.0, 0.0),
            Color::ONE,
            Color::ZERO,
            Color::ZERO,
        )
        .unwrap();
        let material = Material::diffuse(Color::ZERO).with_specular(Color::splat(0.8), 50.0);

        // Viewer exactly on the mirrored light direction
        let v_hat = DVec3::new(-1.0, 1.0, 0.0).normalize();
        let peak = specular(&light, &material, DVec3::Y, v_hat);
        assert!((peak - Color::splat(0.8)).length() < 1e-9);

        // Off-peak falls off sharply with a high gloss exponent
        let v_off = DVec3::new(-1.0, 2.0, 0.0).normalize();
        let off = specular(&light, &material, DVec3::Y, v_off);
        assert!(off.x < 0.1 * peak.x);
    }

    #[test]
    fn test_specular_clamped_when_viewer_behind_lobe() {
        let material = Material::diffuse(Color::ZERO).with_specular(Color::ONE, 3.0);
        let spec = specular(&overhead_light(), &material, DVec3::Y, -DVec3::Y);

        assert_eq!(spec, Color::ZERO);
    }

    #[test]
    fn test_final_color_weights_are_free() {
        let material = Material::diffuse(Color::ONE)
            .with_weights(2.0, 0.5, 1.5)
            .with_reflectivity(0.25);

        let c = final_color(
            &material,
            Color::new(0.1, 0.0, 0.0),
            Color::new(0.0, 0.2, 0.0),
            Color::new(0.0, 0.0, 0.4),
            Color::new(1.0, 1.0, 1.0),
        );

        // No normalization: weights sum to 4.25
        assert!((c - Color::new(0.45, 0.35, 0.85)).length() < 1e-12);
    }
}
