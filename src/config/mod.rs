//! Configuration loading and management for the bill splitter.
//!
//! This module loads rate bounds, default rates, the participant colour
//! palette and server settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use bill_splitter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/splitter.yaml").unwrap();
//! println!("Default tip: {}%", config.tip_bounds().default_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MAX_RATE_PERCENT, RateBounds, RatesConfig, ServerConfig, SplitterConfig};
