//! Configuration module for Globetrotter
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GlobePaths;
pub use settings::Settings;
