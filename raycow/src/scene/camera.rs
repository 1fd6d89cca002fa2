use std::f64::consts::PI;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;

/// Pinhole camera. Screen coordinates `(u, v)` span `[-1, 1]` and are scaled by the
/// half extents of the image plane one unit in front of the origin.
#[derive(Clone, Debug)]
pub struct Camera {

    origin: Vector3,
    forward: Vector3,
    horizontal: Vector3,
    vertical: Vector3,
    width: f64,
    height: f64,
}

impl Camera {

    pub fn new(origin: Vector3, target: Vector3, up: Vector3, field_of_view: f64, aspect_ratio: f64) -> Self {
        let forward = (target - origin).normalized();
        let horizontal = forward.cross_product(&up).normalized();
        let vertical = horizontal.cross_product(&forward);

        let height = (PI * field_of_view * 0.5 / 180.0).tan();

        Self {
            origin,
            forward,
            horizontal,
            vertical,
            width: height * aspect_ratio,
            height,
        }
    }

    pub fn with_origin(&self, origin: Vector3) -> Self {
        Self {
            origin,
            ..self.clone()
        }
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn forward(&self) -> &Vector3 {
        &self.forward
    }

    pub fn create_ray(&self, u: f64, v: f64) -> Ray {
        let direction = self.forward
            + self.horizontal * (u * self.width)
            + self.vertical * (v * self.height);

        Ray::new(self.origin, direction.normalized())
    }
}
