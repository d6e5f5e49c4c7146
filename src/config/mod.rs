//! Configuration management module
//!
//! Responsible for loading and validating application configuration from environment variables

pub mod settings;

pub use settings::Settings;
