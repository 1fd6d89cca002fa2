use crate::geometry::ray::{Ray, T_MIN};
use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::Intersection;

#[derive(Clone, Debug)]
pub struct Sphere {

    position: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {

    pub fn new(position: Vector3, radius: f64, material: Material) -> Self {
        Self {
            position,
            radius,
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Does not narrow `ray`; the nearest hit search does that for spheres.
    pub fn check_intersection(&self, ray: &Ray) -> Option<Intersection> {
        // |origin + t * direction - center|**2 = radius**2 expands to
        // t**2 * |direction|**2 + 2t * dot(direction, origin - center) + |origin - center|**2 - radius**2 = 0
        let origin = ray.origin() - &self.position;
        let direction = ray.direction();

        let a = direction.dot_product_with_self();
        let b = 2.0 * origin.dot_product(direction);
        let c = origin.dot_product_with_self() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);

        // roots within T_MIN of the origin are the surface the ray starts on
        if near <= T_MIN && far <= T_MIN {
            return None;
        }

        if near <= T_MIN {
            // the ray starts inside the sphere or on its surface heading in
            let point = ray.point(far);
            Some(Intersection::at_point(far, point - self.position, point))
        } else {
            let point = ray.point(near);
            Some(Intersection::at_point(near, self.position - point, point))
        }
    }
}
