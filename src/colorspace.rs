//! Normalised RGB channels and RGB → HSV conversion.
//!
//! # Invariants
//!
//! - `v == max(r, g, b) / 255` exactly.
//! - `h == 0` whenever `max == min` (achromatic), otherwise `h ∈ [0, 360)`.
//! - `s == 0` whenever `max == 0`, otherwise `s == (max - min) / max`.
//! - When two channels tie for the maximum, the hue formula is chosen in the
//!   fixed order red, green, blue.

use libm::{fmaxf, fminf, fmodf};

/// Three 8-bit colour channels, each in [0, 255].
///
/// Produced from raw sensor counts by [`crate::sensor::ChannelSample::normalize`],
/// and used again for the scaled LED output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// All channels off.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Construct from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to HSV. See [`rgb_to_hsv`].
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.r as f32, self.g as f32, self.b as f32)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Hue / saturation / value triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees, [0, 360). 0 for achromatic input.
    pub h: f32,
    /// Saturation in [0, 1].
    pub s: f32,
    /// Value in [0, 1].
    pub v: f32,
}

/// Convert 8-bit-range RGB (each in [0, 255]) to HSV.
///
/// ```rust
/// use ambisense_core::colorspace::rgb_to_hsv;
///
/// let hsv = rgb_to_hsv(0.0, 0.0, 255.0);
/// assert_eq!((hsv.h, hsv.s, hsv.v), (240.0, 1.0, 1.0));
/// ```
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let cmax = fmaxf(r, fmaxf(g, b));
    let cmin = fminf(r, fminf(g, b));
    let diff = cmax - cmin;

    // Branch order is the tie-break: red wins over green wins over blue.
    let h = if cmax == cmin {
        0.0
    } else if cmax == r {
        fmodf(60.0 * ((g - b) / diff) + 360.0, 360.0)
    } else if cmax == g {
        fmodf(60.0 * ((b - r) / diff) + 120.0, 360.0)
    } else {
        fmodf(60.0 * ((r - g) / diff) + 240.0, 360.0)
    };

    let s = if cmax == 0.0 { 0.0 } else { diff / cmax };

    Hsv { h, s, v: cmax }
}
