#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod materials;
pub mod objects;
pub mod options;
pub mod render;
pub mod scene;
pub mod scenes;

use std::env;
use std::fs;
use std::process;

use custom_error::custom_error;
use env_logger::Env;

use png_support::PNGWriter;
use ppm_support::{PPMWriter, ASCII_OPTION};
use raycow_core::models::image::Image;
use raycow_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};
use raycow_core::utils::print_intro;

use crate::options::RenderOptions;
use crate::render::basic::BasicRender;
use crate::render::render::{Render, RenderError};
use crate::scenes::demo::DemoSceneProvider;
use crate::scenes::provider::SceneProvider;

const DEFAULT_LOGGING_LEVEL: &str = "info";
const PNG_EXTENSION: &str = ".png";

custom_error! {RaycowError
    Render {source: RenderError} = "Failed to render scene: {source}",
    Encode {source: ImageIOError} = "Failed to encode image: {source}",
    Save {path: String, description: String} = "Failed to save result image to {path}: {description}",
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    let options = match RenderOptions::from_args(&args) {
        Ok(v) => v,
        Err(err) => {
            error!("{}", err);
            error!("usage: raycow --width=640 --height=640 --fov=90 --camera-z=200 --output=render.ppm|render.png --wrap-colors=false --ascii=false");
            process::exit(1);
        }
    };

    let writer = writer_for_output(&options.output);
    if let Err(err) = render_scene(&options, &DemoSceneProvider::new(), writer.as_ref()) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

/// PNG for `.png` outputs, PPM for everything else.
fn writer_for_output(output: &str) -> Box<dyn ImageWriter> {
    if output.to_lowercase().ends_with(PNG_EXTENSION) {
        Box::new(PNGWriter::new())
    } else {
        Box::new(PPMWriter::new())
    }
}

fn render_scene(options: &RenderOptions, scene_provider: &dyn SceneProvider, writer: &dyn ImageWriter) -> Result<(), RaycowError> {
    let scene = scene_provider.scene();
    let camera = options.camera();
    let render = BasicRender::new(options.channel_policy);
    let mut output = Image::new(options.width, options.height);

    info!(
        "rendering {}x{} image of {} shapes and {} lights",
        options.width,
        options.height,
        scene.shapes().count(),
        scene.lights().count()
    );
    render.render(&scene, &camera, &mut output)?;

    info!("saving rendered image as {}", writer.format_name());
    let writer_options = ImageWriterOptions::default().with_option_bool(ASCII_OPTION, options.ascii);
    let image_bytes = writer.write(&output, &writer_options)?;

    fs::write(&options.output, &image_bytes)
        .map_err(|err| RaycowError::Save {
            path: options.output.clone(),
            description: err.to_string(),
        })?;
    info!("result saved to {}", options.output);

    Ok(())
}
