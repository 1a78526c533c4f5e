pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod passive;
pub mod registry;

pub use error::{PassiveError, Result};
