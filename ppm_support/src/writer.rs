use log::debug;

use raycow_core::models::image::Image;
use raycow_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

use crate::ASCII_OPTION;

const MAX_COLOR_VALUE: u8 = 255;
// 10 - LF
const LINE_FEED: u8 = 10;

pub struct PPMWriter {
}

impl PPMWriter {

    pub const fn new() -> Self {
        PPMWriter {}
    }
}

impl ImageWriter for PPMWriter {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.is_empty() {
            return Err(ImageIOError::FailedToWrite {
                description: format!("image has no pixels ({}x{})", image.width, image.height),
            });
        }

        let ascii = options.get_bool(ASCII_OPTION, false)?;
        debug!("writing {}x{} ppm image (ascii: {})", image.width, image.height, ascii);

        let mut bytes = Vec::with_capacity(image.pixels.len() * 3 + 32);
        bytes.extend_from_slice(if ascii { b"P3" } else { b"P6" });
        bytes.push(LINE_FEED);
        bytes.extend_from_slice(format!("{} {}", image.width, image.height).as_bytes());
        bytes.push(LINE_FEED);
        bytes.extend_from_slice(MAX_COLOR_VALUE.to_string().as_bytes());
        bytes.push(LINE_FEED);

        if ascii {
            write_ascii_raster(image, &mut bytes);
        } else {
            write_binary_raster(image, &mut bytes);
        }

        Ok(bytes)
    }
}

fn write_binary_raster(image: &Image, bytes: &mut Vec<u8>) {
    for pixel in &image.pixels {
        bytes.extend_from_slice(&[pixel.red, pixel.green, pixel.blue]);
    }
}

fn write_ascii_raster(image: &Image, bytes: &mut Vec<u8>) {
    for row in image.pixels.chunks(image.width) {
        let line = row.iter()
            .map(|pixel| format!("{} {} {}", pixel.red, pixel.green, pixel.blue))
            .collect::<Vec<String>>()
            .join(" ");
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(LINE_FEED);
    }
}
