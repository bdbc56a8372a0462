use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for `packet_max` and `split_variance`.
pub const MAX_PASS_PARAM: usize = 1_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("packet size range {min}..={max} is empty or starts at zero")]
    PacketRange { min: usize, max: usize },
    #[error("{name} must be at most {max}, got {value}")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
    #[error("{name} must be within 0..=1, got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
    #[error("cut window {low}..={high} is inverted")]
    CutWindow { low: f64, high: f64 },
}

/// Tunable odds and sizes of the individual passes.
///
/// The order and count of passes in a full shuffle are fixed and not part
/// of this config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShuffleConfig {
    pub packet_min: usize,
    pub packet_max: usize,
    pub flip_probability: f64,
    pub split_variance: usize,
    pub cut_low: f64,
    pub cut_high: f64,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            packet_min: 3,
            packet_max: 12,
            flip_probability: 0.20,
            split_variance: 5,
            cut_low: 0.35,
            cut_high: 0.65,
        }
    }
}

impl ShuffleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packet_min == 0 || self.packet_min > self.packet_max {
            return Err(ConfigError::PacketRange {
                min: self.packet_min,
                max: self.packet_max,
            });
        }
        for (name, value) in [
            ("packet_max", self.packet_max),
            ("split_variance", self.split_variance),
        ] {
            if value > MAX_PASS_PARAM {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    max: MAX_PASS_PARAM,
                });
            }
        }
        for (name, value) in [
            ("flip_probability", self.flip_probability),
            ("cut_low", self.cut_low),
            ("cut_high", self.cut_high),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }
        if self.cut_low > self.cut_high {
            return Err(ConfigError::CutWindow {
                low: self.cut_low,
                high: self.cut_high,
            });
        }
        Ok(())
    }
}
