use std::cell::Cell;

use raycow_core::models::color::Color;

use crate::geometry::ray::{Ray, T_MIN};
use crate::render::hit_record::HitRecord;
use crate::scene::scene::Scene;

/// Deepest recursion level that still spawns a reflection ray.
pub const MAX_RECURSION_LEVEL: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStatistics {
    pub primary_rays: u64,
    pub traces: u64,
    pub shadow_rays: u64,
}

/// Whitted style shading: shadow tested lights plus recursive mirror reflections.
pub struct Tracer<'a> {
    scene: &'a Scene,
    primary_rays: Cell<u64>,
    traces: Cell<u64>,
    shadow_rays: Cell<u64>,
}

impl<'a> Tracer<'a> {

    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            primary_rays: Cell::new(0),
            traces: Cell::new(0),
            shadow_rays: Cell::new(0),
        }
    }

    pub fn statistics(&self) -> TraceStatistics {
        TraceStatistics {
            primary_rays: self.primary_rays.get(),
            traces: self.traces.get(),
            shadow_rays: self.shadow_rays.get(),
        }
    }

    /// Linear scan over every shape, keeping the closest hit and narrowing `ray` to it.
    pub fn find_nearest_hit(&self, ray: &mut Ray) -> Option<HitRecord<'a>> {
        let mut nearest = None;

        for shape in self.scene.shapes() {
            // planes narrow the ray themselves, so compare against the bound from before the test
            let bound = ray.t_max();

            if let Some(hit) = shape.intersects(ray) {
                if hit.t() > T_MIN && hit.t() < bound {
                    ray.set_t_max(hit.t());
                    nearest = Some(hit);
                }
            }
        }

        nearest
    }

    pub fn trace_primary(&self, ray: Ray) -> Color {
        self.primary_rays.set(self.primary_rays.get() + 1);
        self.trace(ray, 0)
    }

    pub fn trace(&self, mut ray: Ray, depth: u32) -> Color {
        self.traces.set(self.traces.get() + 1);

        match self.find_nearest_hit(&mut ray) {
            Some(hit) => self.shade(&hit, depth),
            None => self.scene.background(),
        }
    }

    pub fn shade(&self, hit: &HitRecord<'_>, depth: u32) -> Color {
        // unlit surfaces start from the background, not from black
        let mut color = self.scene.background();

        for light in self.scene.lights() {
            // points from the light towards the surface
            let light_target = *hit.hit_point() - *light.position();
            let light_distance = light_target.length();

            // a light sitting on the surface has nothing in between
            if light_distance == 0.0 {
                color += light.illuminate(hit);
                continue;
            }

            let mut shadow_ray = Ray::new(*hit.hit_point(), light_target / light_distance)
                .with_t_max(light_distance);
            self.shadow_rays.set(self.shadow_rays.get() + 1);

            if self.find_nearest_hit(&mut shadow_ray).is_none() {
                color += light.illuminate(hit);
            }
        }

        let material = hit.shape().material();
        if depth <= MAX_RECURSION_LEVEL && material.is_reflective() {
            color += self.trace(hit.reflection_ray(), depth + 1).intensify(material.reflection);
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::plane::Plane;
    use crate::objects::shape::Shape;
    use crate::objects::sphere::Sphere;
    use crate::scene::light::Light;

    use super::*;

    const EPSILON: f64 = 1e-9;

    fn sphere(position: Vector3, radius: f64, color: Color, reflection: f64) -> Shape {
        Shape::from(Sphere::new(position, radius, Material::new(color, reflection)))
    }

    fn floor(color: Color) -> Shape {
        Shape::from(Plane::new(Vector3::zero(), Vector3::up(), Material::diffuse(color)))
    }

    #[test]
    fn test_nearest_hit_picks_closest_regardless_of_order() {
        let mut scene = Scene::new();
        scene.add(sphere(Vector3::new(0.0, 0.0, 20.0), 2.0, Color::white(), 0.0));
        scene.add(sphere(Vector3::new(0.0, 0.0, 10.0), 3.0, Color::white(), 0.0));
        scene.add(sphere(Vector3::new(0.0, 0.0, 30.0), 1.0, Color::white(), 0.0));
        let tracer = Tracer::new(&scene);

        let mut ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));
        let hit = tracer.find_nearest_hit(&mut ray).expect("expected a hit");

        assert!((hit.t() - 7.0).abs() < EPSILON);
        assert!((ray.t_max() - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_nearest_hit_with_plane_after_sphere() {
        let mut scene = Scene::new();
        scene.add(sphere(Vector3::new(0.0, 10.0, 0.0), 1.0, Color::white(), 0.0));
        scene.add(floor(Color::white()));
        let tracer = Tracer::new(&scene);

        let mut ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = tracer.find_nearest_hit(&mut ray).expect("expected the floor to be hit");

        assert_eq!(hit.t(), 5.0);
        assert_eq!(*hit.hit_point(), Vector3::zero());
        assert!(matches!(hit.shape(), Shape::Plane(_)));
    }

    #[test]
    fn test_farther_plane_does_not_replace_sphere() {
        let mut scene = Scene::new();
        scene.add(sphere(Vector3::new(0.0, 3.0, 0.0), 1.0, Color::white(), 0.0));
        scene.add(floor(Color::white()));
        let tracer = Tracer::new(&scene);

        let mut ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = tracer.find_nearest_hit(&mut ray).expect("expected the sphere to be hit");

        assert!((hit.t() - 1.0).abs() < EPSILON);
        assert!(matches!(hit.shape(), Shape::Sphere(_)));
    }

    #[test]
    fn test_miss_returns_background() {
        let background = Color::new(0.1, 0.2, 0.3);
        let mut scene = Scene::new().with_background(background);
        scene.add(floor(Color::white()));
        let tracer = Tracer::new(&scene);

        let color = tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::up()), 0);
        assert_eq!(color, background);
    }

    #[test]
    fn test_unoccluded_lights_add_shape_color() {
        let red = Color::new(1.0, 0.0, 0.0);
        let mut scene = Scene::new().with_background(Color::new(0.0, 0.0, 0.1));
        scene.add(floor(red));
        scene.add(Light::new(Vector3::new(0.0, 4.0, 0.0), Color::white(), 0.8));
        scene.add(Light::new(Vector3::new(3.0, 2.0, 1.0), Color::white(), 0.5));
        let tracer = Tracer::new(&scene);

        let color = tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)), 0);

        assert!(color.approx_eq(&Color::new(1.3, 0.0, 0.1), EPSILON));
        assert_eq!(tracer.statistics().shadow_rays, 2);
    }

    #[test]
    fn test_light_order_does_not_matter() {
        let color = Color::new(0.2, 0.4, 0.6);
        let lights = vec![
            Light::new(Vector3::new(0.0, 4.0, 0.0), Color::white(), 0.3),
            Light::new(Vector3::new(1.0, 2.0, 0.0), Color::white(), 0.9),
            Light::new(Vector3::new(-2.0, 1.0, 3.0), Color::white(), 0.4),
        ];

        let render_with = |lights: Vec<Light>| {
            let mut scene = Scene::new();
            scene.add(floor(color));
            lights.into_iter().for_each(|light| scene.add(light));
            let tracer = Tracer::new(&scene);
            tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)), 0)
        };

        let forward = render_with(lights.clone());
        let backward = render_with(lights.into_iter().rev().collect());

        assert!(forward.approx_eq(&backward, EPSILON));
        assert!(forward.approx_eq(&color.intensify(1.6), EPSILON));
    }

    #[test]
    fn test_shadow_ray_towards_occluder_finds_obstruction() {
        let mut scene = Scene::new();
        scene.add(sphere(Vector3::new(0.0, 5.0, 0.0), 1.0, Color::white(), 0.0));
        let tracer = Tracer::new(&scene);

        let light_position = Vector3::new(0.0, 10.0, 0.0);
        let hit_point = Vector3::zero();
        let mut shadow_ray = Ray::new(hit_point, (light_position - hit_point).normalized())
            .with_t_max(hit_point.distance_to(&light_position));

        assert!(tracer.find_nearest_hit(&mut shadow_ray).is_some());
    }

    #[test]
    fn test_occluded_light_adds_nothing() {
        let white = Color::white();
        let mut scene = Scene::new();
        scene.add(floor(white));
        // shadow rays travel from the light through the hit point, so the occluder sits below the floor
        scene.add(sphere(Vector3::new(0.0, -3.0, 0.0), 1.0, white, 0.0));
        scene.add(Light::new(Vector3::new(0.0, 4.0, 0.0), white, 0.8));
        let tracer = Tracer::new(&scene);

        let color = tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)), 0);
        assert_eq!(color, Color::black());
    }

    #[test]
    fn test_sphere_self_shadowing_is_uniform() {
        let center = Vector3::new(0.3, 0.1, -0.2);
        let mut scene = Scene::new();
        scene.add(sphere(center, 1.0, Color::white(), 0.0));
        scene.add(Light::new(Vector3::new(0.0, 10.0, 0.0), Color::white(), 1.0));
        let tracer = Tracer::new(&scene);

        let steps = 40;
        let mut lit = 0;
        let mut dark = 0;
        for i in 0..steps {
            for j in 0..steps {
                let dx = -0.35 + 0.7 * i as f64 / (steps - 1) as f64;
                let dz = -0.35 + 0.7 * j as f64 / (steps - 1) as f64;
                let origin = Vector3::new(center.x + dx, 5.0, center.z + dz);

                let color = tracer.trace(Ray::new(origin, Vector3::new(0.0, -1.0, 0.0)), 0);
                if color == Color::black() {
                    dark += 1;
                } else {
                    lit += 1;
                }
            }
        }

        // shadow rays leave the lit side heading into the sphere, so the chord always blocks them
        assert_eq!((lit, dark), (0, steps * steps));
    }

    #[test]
    fn test_light_on_hit_point_is_unoccluded() {
        let mut scene = Scene::new();
        scene.add(floor(Color::new(0.0, 1.0, 0.0)));
        scene.add(Light::new(Vector3::zero(), Color::white(), 0.5));
        let tracer = Tracer::new(&scene);

        let color = tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)), 0);

        assert!(color.approx_eq(&Color::new(0.0, 0.5, 0.0), EPSILON));
        assert_eq!(tracer.statistics().shadow_rays, 0);
    }

    #[test]
    fn test_reflection_adds_scaled_trace() {
        let background = Color::new(0.1, 0.1, 0.1);
        let mut scene = Scene::new().with_background(background);
        scene.add(Shape::from(Plane::new(Vector3::zero(), Vector3::up(), Material::new(Color::black(), 0.5))));
        let tracer = Tracer::new(&scene);

        // the mirrored ray escapes to the background
        let color = tracer.trace(Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, -1.0, 0.0)), 0);

        assert!(color.approx_eq(&Color::new(0.15, 0.15, 0.15), EPSILON));
        assert_eq!(tracer.statistics().traces, 2);
    }

    #[test]
    fn test_facing_mirrors_stop_at_max_recursion_level() {
        let background = Color::new(0.1, 0.1, 0.1);
        let mut scene = Scene::new().with_background(background);
        scene.add(sphere(Vector3::new(0.0, 0.0, -5.0), 1.0, Color::black(), 1.0));
        scene.add(sphere(Vector3::new(0.0, 0.0, 5.0), 1.0, Color::black(), 1.0));
        let tracer = Tracer::new(&scene);

        let color = tracer.trace_primary(Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0)));

        let traces = MAX_RECURSION_LEVEL as u64 + 2;
        assert_eq!(tracer.statistics(), TraceStatistics {
            primary_rays: 1,
            traces,
            shadow_rays: 0,
        });
        // every shaded level starts from the background
        assert!(color.approx_eq(&background.intensify(traces as f64), EPSILON));
    }
}
