use raycow_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::render::hit_record::HitRecord;

/// Point light. Intensity is a flat multiplier: there is no falloff with distance.
#[derive(Clone, Debug)]
pub struct Light {

    position: Vector3,
    color: Color,
    intensity: f64,
}

impl Light {

    pub fn new(position: Vector3, color: Color, intensity: f64) -> Self {
        Light {
            position,
            color,
            intensity,
        }
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Contribution of this light to an unoccluded hit.
    pub fn illuminate(&self, hit: &HitRecord<'_>) -> Color {
        hit.shape().material().color.intensify(self.intensity)
    }
}
