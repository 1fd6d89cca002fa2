pub mod writer;

pub use writer::PPMWriter;

/// Writer option switching the output to the plain-text `P3` variant.
pub const ASCII_OPTION: &str = "ascii";
