use raycow_core::models::color::Color;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::objects::plane::Plane;
use crate::objects::shape::Shape;
use crate::objects::sphere::Sphere;
use crate::scene::light::Light;
use crate::scene::scene::Scene;
use crate::scenes::provider::SceneProvider;

/// Three spheres over a reflective red floor, lit by two white lights.
pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self) -> Scene {
        let mut scene = Scene::new();

        scene.add(Shape::from(Sphere::new(
            Vector3::new(12.0, 5.0, 0.0),
            1.0,
            Material::new(Color::new(0.0, 1.0, 0.0), 0.8),
        )));
        scene.add(Shape::from(Sphere::new(
            Vector3::new(0.0, 0.0, 20.0),
            2.0,
            Material::diffuse(Color::new(0.0, 0.5, 0.5)),
        )));
        scene.add(Shape::from(Sphere::new(
            Vector3::new(0.0, 0.0, 10.0),
            3.0,
            Material::new(Color::new(0.5, 0.2, 0.2), 0.5),
        )));
        scene.add(Shape::from(Plane::new(
            Vector3::zero(),
            Vector3::up(),
            Material::new(Color::new(1.0, 0.0, 0.0), 0.6),
        )));

        scene.add(Light::new(Vector3::new(1.0, 1.0, 1.0), Color::white(), 0.8));
        scene.add(Light::new(Vector3::new(0.5, 0.5, 0.5), Color::white(), 1.0));

        scene
    }
}
