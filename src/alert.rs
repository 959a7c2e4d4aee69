/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Per-cycle alert conditions.
//!
//! Alerts are recomputed from scratch every cycle. Nothing latches and nothing is debounced.
//! This module only decides *whether* an alert is warranted; the buzzer driver
//! decides how to render it (see [`AlertTone`]).

use crate::color::ColorCategory;

/// Thresholds for the two alert conditions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertThresholds {
    /// Lux strictly below this raises the low-light alert. Default 10.
    pub luminosity_threshold: u16,
    /// Saturation strictly above this (on a red reading) counts as intense. Default 0.6.
    pub red_saturation: f32,
    /// Value strictly above this (on a red reading) counts as intense. Default 0.7.
    pub red_value: f32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            luminosity_threshold: 10,
            red_saturation: 0.6,
            red_value: 0.7,
        }
    }
}

/// The two independent alert flags for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertState {
    /// Ambient light below the luminosity threshold.
    pub low_light: bool,
    /// A strongly saturated, bright red is in view.
    pub intense_red: bool,
}

impl AlertState {
    /// Evaluate both alert conditions for the current cycle.
    ///
    /// ```rust
    /// use ambisense_core::alert::{AlertState, AlertThresholds};
    /// use ambisense_core::color::ColorCategory;
    ///
    /// let state = AlertState::evaluate(5, ColorCategory::Blue, 0.1, 0.1, &AlertThresholds::default());
    /// assert!(state.low_light);
    /// assert!(!state.intense_red);
    /// ```
    pub fn evaluate(
        lux: u16,
        category: ColorCategory,
        s: f32,
        v: f32,
        thresholds: &AlertThresholds,
    ) -> AlertState {
        AlertState {
            low_light: lux < thresholds.luminosity_threshold,
            intense_red: category == ColorCategory::Red
                && s > thresholds.red_saturation
                && v > thresholds.red_value,
        }
    }

    /// `true` if either alert is raised.
    pub fn any(&self) -> bool {
        self.low_light || self.intense_red
    }

    /// The buzzer pattern to play this cycle, if any alert is raised.
    pub fn tone(&self) -> Option<AlertTone> {
        self.any().then_some(AlertTone::DOUBLE_BEEP)
    }
}

/// Buzzer pattern description. Driving the PWM is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertTone {
    /// Number of beeps.
    pub beeps: u8,
    /// Duration of each beep in milliseconds.
    pub on_ms: u16,
    /// Silence between beeps in milliseconds.
    pub gap_ms: u16,
    /// PWM duty level while sounding (0–255).
    pub duty: u8,
}

impl AlertTone {
    /// Two short 80 ms beeps at half duty.
    pub const DOUBLE_BEEP: AlertTone = AlertTone { beeps: 2, on_ms: 80, gap_ms: 80, duty: 128 };

    /// Total time the pattern occupies, from first beep start to last beep end.
    pub fn duration_ms(&self) -> u32 {
        let beeps = self.beeps as u32;
        if beeps == 0 {
            return 0;
        }
        beeps * self.on_ms as u32 + (beeps - 1) * self.gap_ms as u32
    }
}
