//! Sensor driver seam.
//!
//! The register-level drivers live outside this crate. They implement
//! [`ColorSensor`] and [`LightSensor`]; each call returns one fresh sample,
//! with no queueing and no history.
//!
//! # Implementing for a new board
//!
//! ```rust
//! use ambisense_core::sensor::{ColorReading, ColorSensor, LightSensor};
//!
//! struct FixedBench;
//!
//! impl ColorSensor for FixedBench {
//!     fn read_color(&mut self) -> ColorReading {
//!         ColorReading { r: 4095, g: 0, b: 0, clear: 4095 }
//!     }
//! }
//!
//! impl LightSensor for FixedBench {
//!     fn read_light(&mut self) -> u16 {
//!         250
//!     }
//! }
//! ```

use crate::colorspace::Rgb8;
use crate::range::RangeMap;

/// Raw counts from the colour sensor, in its native range (e.g. 0..=4095).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorReading {
    /// Red channel count.
    pub r: u16,
    /// Green channel count.
    pub g: u16,
    /// Blue channel count.
    pub b: u16,
    /// Unfiltered (clear) channel count. Read but not used for classification.
    pub clear: u16,
}

/// Everything sampled in one cycle. Immutable once taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSample {
    /// Colour sensor counts.
    pub color: ColorReading,
    /// Ambient light reading, driver units.
    pub lux: u16,
}

impl ChannelSample {
    /// Bundle a colour reading and a lux reading.
    pub fn new(color: ColorReading, lux: u16) -> Self {
        Self { color, lux }
    }

    /// The raw-count → 8-bit mapping: `[0, sensor_max] → [0, 255]`.
    pub fn channel_range(sensor_max: u16) -> RangeMap {
        RangeMap::new(0, sensor_max as i64, 0, 255)
    }

    /// Map each colour channel from `0..=sensor_max` onto `0..=255`.
    ///
    /// Counts above `sensor_max` clamp to 255.
    ///
    /// # Panics
    ///
    /// Panics if `sensor_max == 0`.
    pub fn normalize(&self, sensor_max: u16) -> Rgb8 {
        let range = Self::channel_range(sensor_max);
        let ch = |raw: u16| range.apply(raw as i64);
        Rgb8::new(ch(self.color.r), ch(self.color.g), ch(self.color.b))
    }
}

/// A colour sensor driver. Blocking; always returns a value.
pub trait ColorSensor {
    /// Take one RGB + clear reading.
    fn read_color(&mut self) -> ColorReading;
}

/// An ambient light sensor driver. Blocking; always returns a value.
pub trait LightSensor {
    /// Take one lux reading.
    fn read_light(&mut self) -> u16;
}

impl<S: ColorSensor + ?Sized> ColorSensor for &mut S {
    fn read_color(&mut self) -> ColorReading {
        (**self).read_color()
    }
}

impl<S: LightSensor + ?Sized> LightSensor for &mut S {
    fn read_light(&mut self) -> u16 {
        (**self).read_light()
    }
}
