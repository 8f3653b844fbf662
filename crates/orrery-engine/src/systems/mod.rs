pub mod assemble;
pub mod geometry;
