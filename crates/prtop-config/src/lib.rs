//! Configuration and file locations for prtop
//!
//! This crate provides:
//! - Config and cache directory paths
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::{config_file_candidates, load_config_file};
