pub mod multiplier;
pub mod ffi;
pub mod header_generation;
pub mod artifact_discovery;
pub mod manifest;
pub mod cli;

pub use ffi::cmult;
pub use multiplier::multiply;
