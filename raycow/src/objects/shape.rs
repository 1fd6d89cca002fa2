use crate::geometry::ray::{Ray, T_MIN};
use crate::materials::material::Material;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::render::hit_record::HitRecord;

/// Accepts a hit at distance `t` when it is past `T_MIN` and closer than anything
/// the ray has met so far. Accepted hits become the ray's new upper bound.
pub fn accept_intersection(t: f64, ray: &mut Ray) -> bool {
    if t > T_MIN && t < ray.t_max() {
        ray.set_t_max(t);
        true
    } else {
        false
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
}

impl Shape {

    pub fn intersects(&self, ray: &mut Ray) -> Option<HitRecord<'_>> {
        let intersection = match self {
            Shape::Plane(plane) => plane.check_intersection(ray),
            Shape::Sphere(sphere) => sphere.check_intersection(ray),
        }?;

        Some(HitRecord::new(ray, self, intersection))
    }

    pub fn material(&self) -> &Material {
        match self {
            Shape::Plane(plane) => plane.material(),
            Shape::Sphere(sphere) => sphere.material(),
        }
    }
}

impl From<Plane> for Shape {

    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {

    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}
