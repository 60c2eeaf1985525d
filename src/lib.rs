pub mod cli;
pub mod error;
pub mod manifest;
pub mod permute;
pub mod progression;
pub mod rng;
pub mod schedule;
pub mod workload;
pub mod write;

pub use cli::{generate, generate_to};
pub use error::{Error, Result};
