/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Injected device configuration and start-up validation.
//!
//! Every threshold the pipeline uses lives in [`SensingConfig`]. The defaults
//! are the values the device ships with; with the `serde` feature a config can
//! be deserialised, and any field left out falls back to its default.
//!
//! Call [`SensingConfig::validate`] once at start-up. The pipeline itself never
//! returns errors; a degenerate range that slips past validation panics in
//! [`crate::range::RangeMap::apply`].

use crate::alert::AlertThresholds;
use crate::ambient::{DecisionPolicy, LuxGates};
use crate::brightness::BrightnessCalibration;
use crate::sensor::ChannelSample;

/// Full set of tunable constants for one device.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensingConfig {
    /// Full-scale raw count of the colour channels. Default 4095.
    pub sensor_max: u16,
    /// Alert thresholds.
    pub alerts: AlertThresholds,
    /// LED brightness calibration.
    pub brightness: BrightnessCalibration,
    /// Lux corroboration gates for the ambient classes.
    pub gates: LuxGates,
    /// Network output confidence thresholds.
    pub policy: DecisionPolicy,
}

impl Default for SensingConfig {
    fn default() -> Self {
        Self {
            sensor_max: 4095,
            alerts: AlertThresholds::default(),
            brightness: BrightnessCalibration::default(),
            gates: LuxGates::default(),
            policy: DecisionPolicy::default(),
        }
    }
}

/// A configuration value that would make the pipeline misbehave.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `sensor_max` is zero, so colour normalisation would divide by zero.
    ZeroSensorMax,
    /// `lux_low == lux_high`, so brightness mapping would divide by zero.
    DegenerateBrightnessRange {
        /// The shared bound.
        lux: u16,
    },
    /// `lux_low > lux_high`; brightness would fall as light rises.
    InvertedBrightnessRange {
        /// Configured lower bound.
        lux_low: u16,
        /// Configured upper bound.
        lux_high: u16,
    },
    /// A lux gate has `min > max` and can never pass.
    InvertedGate {
        /// Which class the gate belongs to.
        mode: &'static str,
    },
    /// A ratio threshold lies outside [0, 1] or is NaN.
    OutOfUnitRange {
        /// Field name.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
    /// `policy.quiet >= policy.confident`; no output could be both.
    OverlappingPolicy {
        /// Configured confident threshold.
        confident: f32,
        /// Configured quiet threshold.
        quiet: f32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroSensorMax => write!(f, "sensor_max must be non-zero"),
            ConfigError::DegenerateBrightnessRange { lux } => {
                write!(f, "brightness range is empty (lux_low == lux_high == {lux})")
            }
            ConfigError::InvertedBrightnessRange { lux_low, lux_high } => {
                write!(f, "brightness range inverted: lux_low {lux_low} > lux_high {lux_high}")
            }
            ConfigError::InvertedGate { mode } => write!(f, "{mode} lux gate has min > max"),
            ConfigError::OutOfUnitRange { field, value } => {
                write!(f, "{field} = {value} is outside [0, 1]")
            }
            ConfigError::OverlappingPolicy { confident, quiet } => {
                write!(f, "quiet threshold {quiet} must be below confident threshold {confident}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

impl SensingConfig {
    /// Check every invariant the pipeline relies on. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        #[cfg(feature = "tracing")]
        {
            if let Err(ref e) = result {
                tracing::warn!(error = %e, "rejected sensing configuration");
            }
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        if ChannelSample::channel_range(self.sensor_max).is_degenerate() {
            return Err(ConfigError::ZeroSensorMax);
        }

        let b = &self.brightness;
        if b.range().is_degenerate() {
            return Err(ConfigError::DegenerateBrightnessRange { lux: b.lux_low });
        }
        if b.lux_low > b.lux_high {
            return Err(ConfigError::InvertedBrightnessRange {
                lux_low: b.lux_low,
                lux_high: b.lux_high,
            });
        }

        for (mode, gate) in self.gates.iter() {
            if gate.min > gate.max {
                return Err(ConfigError::InvertedGate { mode: mode.name() });
            }
        }

        unit("alerts.red_saturation", self.alerts.red_saturation)?;
        unit("alerts.red_value", self.alerts.red_value)?;
        unit("policy.confident", self.policy.confident)?;
        unit("policy.quiet", self.policy.quiet)?;
        if self.policy.quiet >= self.policy.confident {
            return Err(ConfigError::OverlappingPolicy {
                confident: self.policy.confident,
                quiet: self.policy.quiet,
            });
        }

        Ok(())
    }
}
