//! Gantry Core - Core library for build configuration resolution
//!
//! This crate provides the foundational pieces for the Gantry tool:
//! error types, the tool configuration layer, Java-style `.properties`
//! parsing, and Flutter `pubspec.yaml` version resolution.

pub mod config;
pub mod error;
pub mod properties;
pub mod pubspec;

pub use error::{ConfigError, GantryError, PropertiesError, PubspecError, Result};
pub use properties::Properties;
pub use pubspec::{is_flutter_project, read_project_name, read_project_version, ProjectVersion};
