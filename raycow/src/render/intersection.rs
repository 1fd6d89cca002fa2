use crate::geometry::vector3::Vector3;

/// What a primitive reports about a hit before it is tied to a scene shape.
#[derive(Clone, Debug)]
pub struct Intersection {

    ray_distance: f64,
    normal: Vector3,
    point: Option<Vector3>,
}

impl Intersection {

    pub fn new(ray_distance: f64, normal: Vector3) -> Self {
        Self {
            ray_distance,
            normal,
            point: None,
        }
    }

    /// Hit with an already computed point, which is kept as is instead of being
    /// recomputed from the distance.
    pub fn at_point(ray_distance: f64, normal: Vector3, point: Vector3) -> Self {
        Self {
            ray_distance,
            normal,
            point: Some(point),
        }
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn point(&self) -> Option<&Vector3> {
        self.point.as_ref()
    }
}
