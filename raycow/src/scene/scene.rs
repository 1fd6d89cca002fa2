use raycow_core::models::color::Color;

use super::light::Light;
use super::scene_object::SceneObject;
use crate::objects::shape::Shape;

/// Objects in insertion order, with shapes and lights partitioned out as they are added.
pub struct Scene {
    background: Color,
    objects: Vec<SceneObject>,
    shapes: Vec<usize>,
    lights: Vec<usize>,
}

impl Scene {

    pub fn new() -> Self {
        Self {
            background: Color::black(),
            objects: Vec::new(),
            shapes: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn add<T: Into<SceneObject>>(&mut self, object: T) {
        let object = object.into();
        let index = self.objects.len();

        match &object {
            SceneObject::Shape(_) => self.shapes.push(index),
            SceneObject::Light(_) => self.lights.push(index),
        }

        self.objects.push(object);
    }

    pub fn remove(&mut self, index: usize) -> Option<SceneObject> {
        if index >= self.objects.len() {
            return None;
        }

        let removed = self.objects.remove(index);
        self.shapes = partition(&self.objects, |object| object.as_shape().is_some());
        self.lights = partition(&self.objects, |object| object.as_light().is_some());
        Some(removed)
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter().filter_map(move |&index| self.objects[index].as_shape())
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> + '_ {
        self.lights.iter().filter_map(move |&index| self.objects[index].as_light())
    }
}

impl Default for Scene {

    fn default() -> Self {
        Self::new()
    }
}

fn partition<F: Fn(&SceneObject) -> bool>(objects: &[SceneObject], predicate: F) -> Vec<usize> {
    objects.iter()
        .enumerate()
        .filter(|(_, object)| predicate(*object))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::plane::Plane;
    use crate::objects::sphere::Sphere;

    use super::*;

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Shape::from(Sphere::new(Vector3::zero(), 1.0, Material::diffuse(Color::white()))));
        scene.add(Light::new(Vector3::up(), Color::white(), 1.0));
        scene.add(Shape::from(Plane::new(Vector3::zero(), Vector3::up(), Material::diffuse(Color::black()))));
        scene.add(Light::new(Vector3::zero(), Color::white(), 0.5));
        scene
    }

    #[test]
    fn test_partition_on_add() {
        let scene = test_scene();

        assert_eq!(scene.objects().len(), 4);
        assert_eq!(scene.shapes().count(), 2);
        assert_eq!(scene.lights().map(|light| light.intensity()).collect::<Vec<f64>>(), vec![1.0, 0.5]);
        assert!(matches!(scene.shapes().next(), Some(Shape::Sphere(_))));
    }

    #[test]
    fn test_partition_after_remove() {
        let mut scene = test_scene();

        assert!(matches!(scene.remove(1), Some(SceneObject::Light(_))));
        assert_eq!(scene.lights().map(|light| light.intensity()).collect::<Vec<f64>>(), vec![0.5]);
        assert_eq!(scene.shapes().count(), 2);

        assert!(matches!(scene.remove(0), Some(SceneObject::Shape(_))));
        assert!(matches!(scene.shapes().next(), Some(Shape::Plane(_))));
        assert_eq!(scene.objects().len(), 2);

        assert!(scene.remove(5).is_none());
    }

    #[test]
    fn test_default_background_is_black() {
        assert_eq!(Scene::new().background(), Color::black());
        assert_eq!(Scene::new().with_background(Color::white()).background(), Color::white());
    }
}
