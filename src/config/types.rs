//! Configuration types for the bill splitter.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::Color;

/// Allowed range and default for one rate, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateBounds {
    /// Lowest accepted rate.
    pub min: Decimal,
    /// Highest accepted rate.
    pub max: Decimal,
    /// Rate used when a request does not give one.
    #[serde(rename = "default")]
    pub default_rate: Decimal,
    /// Increment accepted rates must fall on, counted from `min`.
    #[serde(default)]
    pub step: Option<Decimal>,
}

/// Highest `max` a configured rate may have, in percent.
///
/// Keeps percentages of the largest accepted bill inside `Decimal`'s range.
pub const MAX_RATE_PERCENT: Decimal = Decimal::ONE_THOUSAND;

impl RateBounds {
    /// Checks that `value` is non-negative, within `[min, max]`, and on the
    /// configured step.
    ///
    /// `name` is used in the error ("tax" or "tip").
    ///
    /// # Example
    ///
    /// ```
    /// use bill_splitter::config::RateBounds;
    /// use rust_decimal::Decimal;
    ///
    /// let tip = RateBounds {
    ///     min: Decimal::ZERO,
    ///     max: Decimal::new(30, 0),
    ///     default_rate: Decimal::new(15, 0),
    ///     step: Some(Decimal::ONE),
    /// };
    /// assert!(tip.check("tip", Decimal::new(20, 0)).is_ok());
    /// assert!(tip.check("tip", Decimal::new(31, 0)).is_err());
    /// assert!(tip.check("tip", Decimal::new(173, 1)).is_err());
    /// ```
    pub fn check(&self, name: &str, value: Decimal) -> EngineResult<Decimal> {
        let reject = |message: String| EngineError::InvalidRate {
            name: name.to_string(),
            value,
            message,
        };

        if value < Decimal::ZERO {
            return Err(reject("must not be negative".to_string()));
        }
        if value < self.min {
            return Err(reject(format!("must be at least {}", self.min)));
        }
        if value > self.max {
            return Err(reject(format!("must be at most {}", self.max)));
        }
        if let Some(step) = self.step.filter(|step| *step > Decimal::ZERO) {
            let off_step = (value - self.min)
                .checked_rem(step)
                .is_none_or(|remainder| !remainder.is_zero());
            if off_step {
                return Err(reject(format!("must be a multiple of {} from {}", step, self.min)));
            }
        }
        Ok(value)
    }

    /// Returns `value` checked against the bounds, or the default when absent.
    pub fn resolve(&self, name: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
        match value {
            Some(value) => self.check(name, value),
            None => Ok(self.default_rate),
        }
    }
}

/// Tax and tip rate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RatesConfig {
    /// Tax rate bounds.
    pub tax: RateBounds,
    /// Tip rate bounds.
    pub tip: RateBounds,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind: String,
}

/// The complete configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SplitterConfig {
    /// Tax and tip rate bounds.
    pub rates: RatesConfig,
    /// Colours handed out to participants, in order.
    pub palette: Vec<Color>,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl SplitterConfig {
    /// Checks cross-field invariants that serde cannot express.
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (name, bounds) in [("tax", &self.rates.tax), ("tip", &self.rates.tip)] {
            if bounds.min < Decimal::ZERO {
                return Err(format!("{} min must not be negative", name));
            }
            if bounds.min > bounds.max {
                return Err(format!(
                    "{} min ({}) is greater than max ({})",
                    name, bounds.min, bounds.max
                ));
            }
            if bounds.max > MAX_RATE_PERCENT {
                return Err(format!(
                    "{} max ({}) is above {}",
                    name, bounds.max, MAX_RATE_PERCENT
                ));
            }
            if bounds.default_rate < bounds.min || bounds.default_rate > bounds.max {
                return Err(format!(
                    "{} default ({}) is outside [{}, {}]",
                    name, bounds.default_rate, bounds.min, bounds.max
                ));
            }
            if let Some(step) = bounds.step {
                if step <= Decimal::ZERO {
                    return Err(format!("{} step must be positive", name));
                }
                if bounds.check(name, bounds.default_rate).is_err() {
                    return Err(format!(
                        "{} default ({}) is not a multiple of {} from {}",
                        name, bounds.default_rate, step, bounds.min
                    ));
                }
            }
        }

        if self.palette.is_empty() {
            return Err("palette must contain at least one colour".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tip_bounds() -> RateBounds {
        RateBounds {
            min: Decimal::ZERO,
            max: dec("30"),
            default_rate: dec("15"),
            step: Some(Decimal::ONE),
        }
    }

    #[test]
    fn test_check_accepts_edges() {
        let bounds = tip_bounds();
        assert_eq!(bounds.check("tip", Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(bounds.check("tip", dec("30")).unwrap(), dec("30"));
    }

    #[test]
    fn test_check_rejects_negative() {
        match tip_bounds().check("tip", dec("-1")) {
            Err(EngineError::InvalidRate { name, message, .. }) => {
                assert_eq!(name, "tip");
                assert_eq!(message, "must not be negative");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_check_rejects_above_max() {
        match tip_bounds().check("tip", dec("30.01")) {
            Err(EngineError::InvalidRate { value, message, .. }) => {
                assert_eq!(value, dec("30.01"));
                assert_eq!(message, "must be at most 30");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(tip_bounds().resolve("tip", None).unwrap(), dec("15"));
        assert_eq!(tip_bounds().resolve("tip", Some(dec("12"))).unwrap(), dec("12"));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = SplitterConfig {
            rates: RatesConfig {
                tax: RateBounds {
                    min: dec("10"),
                    max: dec("5"),
                    default_rate: dec("7"),
                    step: None,
                },
                tip: tip_bounds(),
            },
            palette: vec![Color::rgb(0, 0, 0)],
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("tax min"));
    }

    #[test]
    fn test_validate_rejects_empty_palette() {
        let config = SplitterConfig {
            rates: RatesConfig {
                tax: tip_bounds(),
                tip: tip_bounds(),
            },
            palette: vec![],
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
        };
        assert!(config.validate().unwrap_err().contains("palette"));
    }

    #[test]
    fn test_check_rejects_rate_off_step() {
        match tip_bounds().check("tip", dec("17.3")) {
            Err(EngineError::InvalidRate { message, .. }) => {
                assert_eq!(message, "must be a multiple of 1 from 0");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
        assert!(tip_bounds().check("tip", dec("17")).is_ok());
    }

    #[test]
    fn test_check_steps_from_min() {
        let tax = RateBounds {
            min: dec("0.5"),
            max: dec("15"),
            default_rate: dec("8.875"),
            step: Some(dec("0.125")),
        };
        assert!(tax.check("tax", dec("8.875")).is_ok());
        assert!(tax.check("tax", dec("8.9")).is_err());
    }

    #[test]
    fn test_check_without_step_accepts_any_value_in_range() {
        let bounds = RateBounds {
            step: None,
            ..tip_bounds()
        };
        assert!(bounds.check("tip", dec("17.3")).is_ok());
    }

    #[test]
    fn test_validate_rejects_default_off_step() {
        let config = SplitterConfig {
            rates: RatesConfig {
                tax: RateBounds {
                    default_rate: dec("8.8"),
                    step: Some(dec("0.125")),
                    ..tip_bounds()
                },
                tip: tip_bounds(),
            },
            palette: vec![Color::rgb(0, 0, 0)],
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
        };
        assert!(config.validate().unwrap_err().contains("not a multiple"));
    }

    #[test]
    fn test_validate_rejects_unbounded_max() {
        let config = SplitterConfig {
            rates: RatesConfig {
                tax: RateBounds {
                    max: dec("100000"),
                    ..tip_bounds()
                },
                tip: tip_bounds(),
            },
            palette: vec![Color::rgb(0, 0, 0)],
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
        };
        assert!(config.validate().unwrap_err().contains("tax max"));
    }
}
