/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Rule-based colour identification from HSV.
//!
//! - [`ColorCategory`]: the nine discrete colour labels.
//! - [`ColorCategory::classify`]: ordered first-match rule list over (h, s, v).
//! - [`ColorCategory::pure_color`] / [`ColorCategory::name`]: exhaustive lookups.
//!
//! # Hue wheel
//!
//! ```text
//!   0 ──15   40 ──75 ──165 ──195 ──255   285 ──345 ──360
//!   Red  │gap│Yellow│Green│ Cyan │ Blue │gap│Magenta│Red
//! ```
//!
//! Hues in the two gaps, and low-saturation colours that are not bright
//! enough to be white, classify as [`ColorCategory::Undefined`]. Greys are
//! caught before the hue rules, so their sentinel hue of 0 never reads as red.

use crate::colorspace::{Hsv, Rgb8};

/// Below this value the reading is too dark to judge a hue.
pub const DARK_VALUE: f32 = 0.20;
/// Below this saturation a bright reading counts as white.
pub const WHITE_SATURATION: f32 = 0.25;
/// Above this value a desaturated reading counts as white.
pub const WHITE_VALUE: f32 = 0.9;

/// Discrete colour label for one sensing cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorCategory {
    /// Too dark, desaturated-but-not-white, or in an uncovered hue gap.
    #[default]
    Undefined,
    /// Black. Never produced by [`ColorCategory::classify`]; kept for display.
    Black,
    /// Low saturation, high value.
    White,
    /// Hue in [0, 15) ∪ [345, 360].
    Red,
    /// Hue in [40, 75).
    Yellow,
    /// Hue in [75, 165).
    Green,
    /// Hue in [165, 195).
    Cyan,
    /// Hue in [195, 255).
    Blue,
    /// Hue in [285, 345).
    Magenta,
}

impl ColorCategory {
    /// Classify an HSV triple. Rules are evaluated in order; the first match wins.
    ///
    /// Total over all inputs: anything not matched is [`ColorCategory::Undefined`].
    pub fn classify(h: f32, s: f32, v: f32) -> ColorCategory {
        if v < DARK_VALUE {
            return ColorCategory::Undefined;
        }
        if s < WHITE_SATURATION {
            // Desaturated: white when bright, otherwise a grey with no usable hue.
            return if v > WHITE_VALUE { ColorCategory::White } else { ColorCategory::Undefined };
        }
        if (0.0..15.0).contains(&h) || (345.0..=360.0).contains(&h) {
            ColorCategory::Red
        } else if (40.0..75.0).contains(&h) {
            ColorCategory::Yellow
        } else if (75.0..165.0).contains(&h) {
            ColorCategory::Green
        } else if (165.0..195.0).contains(&h) {
            ColorCategory::Cyan
        } else if (195.0..255.0).contains(&h) {
            ColorCategory::Blue
        } else if (285.0..345.0).contains(&h) {
            ColorCategory::Magenta
        } else {
            ColorCategory::Undefined
        }
    }

    /// Classify an [`Hsv`] value.
    pub fn from_hsv(hsv: &Hsv) -> ColorCategory {
        Self::classify(hsv.h, hsv.s, hsv.v)
    }

    /// Canonical fully-saturated RGB for this category (each channel 0 or 255).
    ///
    /// Black and Undefined are both `(0, 0, 0)`.
    pub fn pure_color(&self) -> Rgb8 {
        match self {
            ColorCategory::Red => Rgb8::new(255, 0, 0),
            ColorCategory::Green => Rgb8::new(0, 255, 0),
            ColorCategory::Blue => Rgb8::new(0, 0, 255),
            ColorCategory::White => Rgb8::new(255, 255, 255),
            ColorCategory::Yellow => Rgb8::new(255, 255, 0),
            ColorCategory::Cyan => Rgb8::new(0, 255, 255),
            ColorCategory::Magenta => Rgb8::new(255, 0, 255),
            ColorCategory::Black | ColorCategory::Undefined => Rgb8::BLACK,
        }
    }

    /// Human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Red => "Red",
            ColorCategory::Green => "Green",
            ColorCategory::Blue => "Blue",
            ColorCategory::White => "White",
            ColorCategory::Yellow => "Yellow",
            ColorCategory::Cyan => "Cyan",
            ColorCategory::Magenta => "Magenta",
            ColorCategory::Black => "Black",
            ColorCategory::Undefined => "Undefined",
        }
    }
}

impl core::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
