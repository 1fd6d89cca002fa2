use crate::objects::shape::Shape;
use crate::scene::light::Light;

#[derive(Clone, Debug)]
pub enum SceneObject {
    Shape(Shape),
    Light(Light),
}

impl SceneObject {

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            SceneObject::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_light(&self) -> Option<&Light> {
        match self {
            SceneObject::Light(light) => Some(light),
            _ => None,
        }
    }
}

impl From<Shape> for SceneObject {

    fn from(shape: Shape) -> Self {
        SceneObject::Shape(shape)
    }
}

impl From<Light> for SceneObject {

    fn from(light: Light) -> Self {
        SceneObject::Light(light)
    }
}
