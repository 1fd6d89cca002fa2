use std::fmt::Display;
use std::str::FromStr;

use custom_error::custom_error;

use raycow_core::models::color::ChannelPolicy;

use crate::geometry::vector3::Vector3;
use crate::scene::camera::Camera;

const DEFAULT_SIZE: usize = 640;
const MAX_SIZE: usize = 16384;
const DEFAULT_FIELD_OF_VIEW: f64 = 90.0;
const DEFAULT_CAMERA_Z: f64 = 200.0;
const DEFAULT_OUTPUT: &str = "render.ppm";

custom_error! {pub OptionsError
    MissingValue {name: String} = "Option --{name} is set without a value",
    InvalidValue {name: String, value: String, description: String} = "Invalid value for --{name}: \"{value}\" ({description})",
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: usize,
    pub height: usize,
    pub field_of_view: f64,
    pub camera_origin: Vector3,
    pub output: String,
    pub channel_policy: ChannelPolicy,
    pub ascii: bool,
}

impl Default for RenderOptions {

    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            camera_origin: Vector3::new(0.0, 0.0, DEFAULT_CAMERA_Z),
            output: DEFAULT_OUTPUT.to_string(),
            channel_policy: ChannelPolicy::Clamp,
            ascii: false,
        }
    }
}

impl RenderOptions {

    /// Reads `--name=value` arguments. Anything not set keeps its default.
    pub fn from_args(args: &[String]) -> Result<Self, OptionsError> {
        let defaults = Self::default();

        let width = image_side("width", parse_argument(args, "width", defaults.width)?)?;
        let height = image_side("height", parse_argument(args, "height", defaults.height)?)?;

        let field_of_view = parse_argument(args, "fov", defaults.field_of_view)?;
        if !(field_of_view > 0.0 && field_of_view < 180.0) {
            return Err(invalid_value("fov", field_of_view, "expected degrees between 0 and 180"));
        }

        let camera_z = parse_argument(args, "camera-z", defaults.camera_origin.z)?;
        let output = parse_argument(args, "output", defaults.output)?;

        let channel_policy = if parse_argument(args, "wrap-colors", false)? {
            ChannelPolicy::Wrap
        } else {
            ChannelPolicy::Clamp
        };

        Ok(Self {
            width,
            height,
            field_of_view,
            camera_origin: Vector3::new(defaults.camera_origin.x, defaults.camera_origin.y, camera_z),
            output,
            channel_policy,
            ascii: parse_argument(args, "ascii", defaults.ascii)?,
        })
    }

    /// Ratio of the longer image side to the shorter one.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > self.height {
            self.width as f64 / self.height as f64
        } else {
            self.height as f64 / self.width as f64
        }
    }

    /// Camera at `camera_origin` looking down the negative z axis.
    pub fn camera(&self) -> Camera {
        Camera::new(
            self.camera_origin,
            self.camera_origin + Vector3::new(0.0, 0.0, -1.0),
            Vector3::up(),
            self.field_of_view,
            self.aspect_ratio()
        )
    }
}

fn argument_value<'a>(args: &'a [String], argument_name: &str) -> Option<&'a str> {
    let prefix = format!("--{}=", argument_name);
    args.iter()
        .find(|s| s.starts_with(&prefix))
        .map(|s| &s[prefix.len()..])
}

fn parse_argument<T>(args: &[String], argument_name: &str, default: T) -> Result<T, OptionsError>
    where T: FromStr, T::Err: Display {
    let value = match argument_value(args, argument_name) {
        Some(v) => v.trim(),
        None => return Ok(default),
    };

    if value.is_empty() {
        return Err(OptionsError::MissingValue {
            name: argument_name.to_string(),
        });
    }

    value.parse().map_err(|err: T::Err| invalid_value(argument_name, value, err))
}

fn image_side(argument_name: &str, value: usize) -> Result<usize, OptionsError> {
    if value == 0 {
        Err(invalid_value(argument_name, value, "expected a positive number"))
    } else if value > MAX_SIZE {
        Err(invalid_value(argument_name, value, format!("at most {} pixels are supported", MAX_SIZE)))
    } else {
        Ok(value)
    }
}

fn invalid_value<V: Display, D: Display>(name: &str, value: V, description: D) -> OptionsError {
    OptionsError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        description: description.to_string(),
    }
}
