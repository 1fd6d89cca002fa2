use custom_error::custom_error;

use raycow_core::models::image::Image;

use crate::scene::camera::Camera;
use crate::scene::scene::Scene;

custom_error! {pub RenderError
    InvalidViewport {width: usize, height: usize} = "Cannot render into a {width}x{height} image",
}

pub trait Render {

    fn render(&self, scene: &Scene, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError>;
}
