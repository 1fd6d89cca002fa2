use raycow_core::models::color::Color;

use crate::geometry::vector3::Vector3;

/// Surface appearance: a flat color and how much of the mirrored ray it adds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub reflection: f64,
}

impl Material {

    pub const fn new(color: Color, reflection: f64) -> Self {
        Self {
            color,
            reflection,
        }
    }

    pub const fn diffuse(color: Color) -> Self {
        Self::new(color, 0.0)
    }

    pub fn is_reflective(&self) -> bool {
        self.reflection > 0.0
    }
}

/// Mirrors `i` around the unit normal `n`.
pub fn reflect(i: &Vector3, n: &Vector3) -> Vector3 {
    *i - *n * (2.0 * i.dot_product(n))
}
