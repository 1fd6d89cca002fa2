pub mod camera;
pub mod light;
pub mod scene;
pub mod scene_object;
