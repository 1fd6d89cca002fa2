use super::vector3::Vector3;

/// Hits closer than this to the ray origin are ignored, so a surface never occludes itself.
pub const T_MIN: f64 = 1e-5;

/// A half line with a shrinking upper bound `t_max` on the distances still of interest.
///
/// `t_max` starts at infinity and is narrowed every time a closer hit is found, so
/// a ray must not be reused for another cast.
#[derive(Clone, Debug)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
    t_max: f64,
}

impl Ray {

    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction,
            t_max: f64::INFINITY,
        }
    }

    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn set_t_max(&mut self, t_max: f64) {
        self.t_max = t_max;
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}
