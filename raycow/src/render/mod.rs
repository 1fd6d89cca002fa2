pub mod basic;
pub mod hit_record;
pub mod intersection;
pub mod render;
pub mod tracer;
