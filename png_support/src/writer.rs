use log::debug;
use png::{BitDepth, ColorType, Encoder, EncodingError};

use raycow_core::models::image::Image;
use raycow_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

const BYTES_PER_PIXEL: usize = 3;

pub struct PNGWriter {
}

impl PNGWriter {

    pub const fn new() -> Self {
        PNGWriter {}
    }
}

impl ImageWriter for PNGWriter {

    fn format_name(&self) -> String {
        "PNG".to_string()
    }

    fn write(&self, image: &Image, _options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.is_empty() {
            return Err(ImageIOError::FailedToWrite {
                description: format!("image has no pixels ({}x{})", image.width, image.height),
            });
        }

        debug!("writing {}x{} png image", image.width, image.height);

        let mut data = Vec::with_capacity(image.pixels.len() * BYTES_PER_PIXEL);
        for pixel in &image.pixels {
            data.extend_from_slice(&[pixel.red, pixel.green, pixel.blue]);
        }

        let mut bytes = Vec::new();
        {
            let mut encoder = Encoder::new(&mut bytes, image.width as u32, image.height as u32);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);

            let mut writer = encoder.write_header().map_err(encoding_error)?;
            writer.write_image_data(&data).map_err(encoding_error)?;
            writer.finish().map_err(encoding_error)?;
        }

        Ok(bytes)
    }
}

fn encoding_error(err: EncodingError) -> ImageIOError {
    ImageIOError::FailedToWrite {
        description: err.to_string(),
    }
}
