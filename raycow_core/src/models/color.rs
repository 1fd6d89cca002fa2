use std::ops::{Add, AddAssign, Mul};

const CHANNEL_MAX: f64 = 255.0;
const OPAQUE: u32 = 0xFF00_0000;

/// How out-of-range channels are handled when a color is packed into an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelPolicy {
    /// Channels are clamped to `[0, 1]` before rounding.
    Clamp,
    /// Channels are rounded and masked to 8 bits, so overflowing values wrap around.
    Wrap,
}

impl Default for ChannelPolicy {

    fn default() -> Self {
        ChannelPolicy::Clamp
    }
}

/// Linear rgb color. Channels are not bounded while light is being accumulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn intensify(&self, intensity: f64) -> Self {
        *self * intensity
    }

    pub fn approx_eq(&self, other: &Color, epsilon: f64) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }

    /// Packs the color as `0xFFRRGGBB`.
    pub fn to_argb(&self, policy: ChannelPolicy) -> u32 {
        let pack: fn(f64) -> u32 = match policy {
            ChannelPolicy::Clamp => clamped_channel,
            ChannelPolicy::Wrap => wrapped_channel,
        };

        OPAQUE | pack(self.r) << 16 | pack(self.g) << 8 | pack(self.b)
    }
}

fn clamped_channel(value: f64) -> u32 {
    (value.max(0.0).min(1.0) * CHANNEL_MAX).round() as u32
}

fn wrapped_channel(value: f64) -> u32 {
    // rounds half up, then keeps the low byte of the two's complement value
    ((value * CHANNEL_MAX + 0.5).floor() as i64 as u32) & 0xFF
}

impl Add for Color {

    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {

    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Color {

    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {

    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
