//! Configuration module for PisoPiso
//!
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PisoPaths;
pub use settings::Settings;
