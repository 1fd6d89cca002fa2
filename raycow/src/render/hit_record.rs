use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::reflect;
use crate::objects::shape::Shape;
use crate::render::intersection::Intersection;

/// A resolved hit: which shape the ray met, where, and the surface normal there.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    ray: Ray,
    shape: &'a Shape,
    t: f64,
    normal: Vector3,
    hit_point: Vector3,
}

impl<'a> HitRecord<'a> {

    pub fn new(ray: &Ray, shape: &'a Shape, intersection: Intersection) -> Self {
        let t = intersection.ray_distance();
        let hit_point = match intersection.point() {
            Some(point) => *point,
            None => ray.point(t),
        };

        Self {
            ray: ray.clone(),
            shape,
            t,
            normal: intersection.normal().normalized(),
            hit_point,
        }
    }

    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn hit_point(&self) -> &Vector3 {
        &self.hit_point
    }

    /// Mirror ray leaving the hit point, with a fresh distance bound.
    pub fn reflection_ray(&self) -> Ray {
        Ray::new(self.hit_point, reflect(self.ray.direction(), &self.normal))
    }
}
