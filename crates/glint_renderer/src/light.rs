//! The scene's single directional light.

use crate::GeometryError;
use glint_core::LightDesc;
use glint_math::{Color, DVec3, EPSILON};

/// Directional light plus the ambient and background colors that travel
/// with it in the scene document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    direction: DVec3,
    pub color: Color,
    pub ambient: Color,
    pub background: Color,
}

impl Light {
    /// Create a light. `direction_to_light` points from surfaces toward the
    /// light and is normalized here.
    pub fn new(
        direction_to_light: DVec3,
        color: Color,
        ambient: Color,
        background: Color,
    ) -> Result<Self, GeometryError> {
        let length = direction_to_light.length();
        if !length.is_finite() || length < EPSILON {
            return Err(GeometryError::ZeroLightDirection);
        }

        Ok(Self {
            direction: direction_to_light / length,
            color,
            ambient,
            background,
        })
    }

    /// Unit vector toward the light.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Ambient contribution used in the shading composite: ambient × light color.
    pub fn ambient_term(&self) -> Color {
        self.ambient * self.color
    }
}

impl TryFrom<&LightDesc> for Light {
    type Error = GeometryError;

    fn try_from(desc: &LightDesc) -> Result<Self, Self::Error> {
        Light::new(
            desc.direction_to_light,
            desc.light_color,
            desc.ambient_light,
            desc.background_color,
        )
    }
}
