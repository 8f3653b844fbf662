pub mod assembler;
pub mod types;
