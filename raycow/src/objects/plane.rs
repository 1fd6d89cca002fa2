use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::objects::shape::accept_intersection;
use crate::render::intersection::Intersection;

#[derive(Clone, Debug)]
pub struct Plane {

    position: Vector3,
    normal: Vector3,
    material: Material,
}

impl Plane {

    pub fn new(position: Vector3, normal: Vector3, material: Material) -> Self {
        Self {
            position,
            normal: normal.normalized(),
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Narrows `ray` to the hit distance when the plane is hit closer than anything seen so far.
    pub fn check_intersection(&self, ray: &mut Ray) -> Option<Intersection> {
        let angle = ray.direction().dot_product(&self.normal);

        // parallel to the plane
        if angle == 0.0 {
            return None;
        }

        let distance = (self.position - *ray.origin()).dot_product(&self.normal) / angle;
        if !accept_intersection(distance, ray) {
            return None;
        }

        Some(Intersection::new(distance, self.normal))
    }
}
