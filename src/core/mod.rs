//! Core application functionality
//!
//! This module contains the application logic around the theme system:
//! - CLI handling and validation
//! - User configuration files
//! - Running the selected command

pub mod cli;
pub mod config;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::ConfigFile;
pub use runner::run_app;
