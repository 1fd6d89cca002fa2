use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};

use raycow_core::models::color::{ChannelPolicy, Color};
use raycow_core::models::image::Image;

use super::render::{Render, RenderError};
use super::tracer::Tracer;
use crate::scene::camera::Camera;
use crate::scene::scene::Scene;

/// Traces one primary ray per pixel, row by row.
pub struct BasicRender {
    channel_policy: ChannelPolicy,
    show_progress: bool,
}

impl BasicRender {

    pub fn new(channel_policy: ChannelPolicy) -> Self {
        Self {
            channel_policy,
            show_progress: true,
        }
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn progress_bar(&self, rows: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(rows as u64);
        progress.set_style(ProgressStyle::default_bar().template("{elapsed_precise} [{bar:40}] {pos}/{len} rows"));
        progress
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, camera: &Camera, render_to: &mut Image) -> Result<(), RenderError> {
        let width = render_to.width;
        let height = render_to.height;

        if render_to.is_empty() {
            return Err(RenderError::InvalidViewport { width, height });
        }

        let tracer = Tracer::new(scene);

        for y in (0..height).progress_with(self.progress_bar(height)) {
            for x in 0..width {
                let color = render_pixel(&tracer, camera, width, height, x, y);
                render_to.draw(x, y, color.to_argb(self.channel_policy));
            }
        }

        let statistics = tracer.statistics();
        debug!(
            "traced {} primary rays, {} rays in total, {} shadow rays",
            statistics.primary_rays,
            statistics.traces,
            statistics.shadow_rays
        );

        Ok(())
    }
}

/// Maps the pixel center to screen space (`y` grows downwards in the image, upwards on screen).
pub fn screen_coordinates(width: usize, height: usize, x: usize, y: usize) -> (f64, f64) {
    let normalized_x = 2.0 * (x as f64 + 0.5) / width as f64 - 1.0;
    let normalized_y = 1.0 - 2.0 * (y as f64 + 0.5) / height as f64;
    (normalized_x, normalized_y)
}

pub fn render_pixel(tracer: &Tracer<'_>, camera: &Camera, width: usize, height: usize, x: usize, y: usize) -> Color {
    let (u, v) = screen_coordinates(width, height, x, y);
    tracer.trace_primary(camera.create_ray(u, v))
}
