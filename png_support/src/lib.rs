pub mod writer;

pub use writer::PNGWriter;
