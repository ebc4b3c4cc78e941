//! Configuration module for Handle-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use handle_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scanner will pace requests by {}ms", config.scan.delay_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, InputConfig, OutputConfig, PlatformConfig, ScanConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
