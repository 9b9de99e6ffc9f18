//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the splitter
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Color, PaletteColorAssigner};

use super::types::{RateBounds, RatesConfig, ServerConfig, SplitterConfig};

/// Loads and provides access to the splitter configuration.
///
/// # File Format
///
/// ```yaml
/// rates:
///   tax: { min: 0, max: 15, default: 8.875, step: 0.125 }
///   tip: { min: 0, max: 30, default: 15, step: 1 }
/// palette: ["#e6194b", "#3cb44b", "#4363d8"]
/// server:
///   bind: "127.0.0.1:3000"
/// ```
///
/// # Example
///
/// ```no_run
/// use bill_splitter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/splitter.yaml").unwrap();
/// println!("Max tip: {}%", loader.tip_bounds().max);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SplitterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or a required field is missing
    ///   (`ConfigParseError`)
    /// - Rate bounds are inverted, a default lies outside its bounds, or the
    ///   palette is empty (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: SplitterConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config, origin)
    }

    /// Returns the built-in configuration used when no file is given.
    ///
    /// Matches the shipped `config/splitter.yaml`: tax in [0, 15] defaulting
    /// to 8.875 in steps of 0.125, tip in [0, 30] defaulting to 15 in whole
    /// percents.
    pub fn builtin() -> Self {
        Self {
            config: SplitterConfig {
                rates: RatesConfig {
                    tax: RateBounds {
                        min: Decimal::ZERO,
                        max: Decimal::new(15, 0),
                        default_rate: Decimal::new(8875, 3),
                        step: Some(Decimal::new(125, 3)),
                    },
                    tip: RateBounds {
                        min: Decimal::ZERO,
                        max: Decimal::new(30, 0),
                        default_rate: Decimal::new(15, 0),
                        step: Some(Decimal::ONE),
                    },
                },
                palette: PaletteColorAssigner::DEFAULT_PALETTE.to_vec(),
                server: ServerConfig {
                    bind: "127.0.0.1:3000".to_string(),
                },
            },
        }
    }

    fn from_config(config: SplitterConfig, origin: &str) -> EngineResult<Self> {
        config
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: origin.to_string(),
                message,
            })?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Returns the tax rate bounds.
    pub fn tax_bounds(&self) -> &RateBounds {
        &self.config.rates.tax
    }

    /// Returns the tip rate bounds.
    pub fn tip_bounds(&self) -> &RateBounds {
        &self.config.rates.tip
    }

    /// Validates requested rates, substituting configured defaults for
    /// missing ones. Returns `(tax_rate, tip_rate)`.
    pub fn resolve_rates(
        &self,
        tax_rate: Option<Decimal>,
        tip_rate: Option<Decimal>,
    ) -> EngineResult<(Decimal, Decimal)> {
        let tax = self.tax_bounds().resolve("tax", tax_rate)?;
        let tip = self.tip_bounds().resolve("tip", tip_rate)?;
        Ok((tax, tip))
    }

    /// Returns the participant colour palette.
    pub fn palette(&self) -> &[Color] {
        &self.config.palette
    }

    /// Returns the address the HTTP server should bind to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::builtin()
    }
}
