/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Lux-driven LED brightness scaling.
//!
//! # Invariants
//!
//! - The brightness factor is in [1, 255] and non-decreasing in lux.
//! - Each scaled channel never exceeds the matching pure-colour channel.

use crate::colorspace::Rgb8;
use crate::range::RangeMap;

/// Device-specific lux bounds mapped onto the brightness factor range [1, 255].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BrightnessCalibration {
    /// Lux at (or below) which the LEDs run at the minimum factor. Default 10.
    pub lux_low: u16,
    /// Lux at (or above) which the LEDs run at full brightness. Default 300.
    pub lux_high: u16,
}

impl Default for BrightnessCalibration {
    fn default() -> Self {
        Self { lux_low: 10, lux_high: 300 }
    }
}

impl BrightnessCalibration {
    /// Smallest factor ever emitted; 0 would be indistinguishable from off.
    pub const MIN_FACTOR: u8 = 1;
    /// Largest factor.
    pub const MAX_FACTOR: u8 = 255;

    /// Brightness factor for `lux`, clamped to [1, 255].
    ///
    /// # Panics
    ///
    /// Panics if `lux_low == lux_high` (see [`crate::config::SensingConfig::validate`]).
    pub fn factor(&self, lux: u16) -> u8 {
        self.range().apply(lux as i64)
    }

    /// The lux → factor mapping: `[lux_low, lux_high] → [MIN_FACTOR, MAX_FACTOR]`.
    pub fn range(&self) -> RangeMap {
        RangeMap::new(
            self.lux_low as i64,
            self.lux_high as i64,
            Self::MIN_FACTOR as i64,
            Self::MAX_FACTOR as i64,
        )
    }

    /// Scale `pure` by the lux-derived factor: `channel * factor / 255`, floored.
    ///
    /// ```rust
    /// use ambisense_core::brightness::BrightnessCalibration;
    /// use ambisense_core::colorspace::Rgb8;
    ///
    /// let cal = BrightnessCalibration::default();
    /// assert_eq!(cal.scale(300, Rgb8::new(255, 0, 255)), Rgb8::new(255, 0, 255));
    /// assert_eq!(cal.scale(0, Rgb8::new(255, 0, 0)), Rgb8::new(1, 0, 0));
    /// ```
    pub fn scale(&self, lux: u16, pure: Rgb8) -> Rgb8 {
        scale_by_factor(pure, self.factor(lux))
    }
}

/// Scale each channel by `factor / 255` with integer floor division.
pub fn scale_by_factor(color: Rgb8, factor: u8) -> Rgb8 {
    let ch = |c: u8| ((c as u16 * factor as u16) / 255) as u8;
    Rgb8::new(ch(color.r), ch(color.g), ch(color.b))
}
