//! Clamped linear range remapping.
//!
//! Every integer quantity in the pipeline that crosses a scale boundary goes
//! through [`map_range`]: raw 12-bit colour counts become 8-bit channels, and
//! lux becomes an LED brightness factor.
//!
//! # Invariants
//!
//! - Input is clamped to `[in_min, in_max]` before scaling, so the result always
//!   lies inside `[out_min, out_max]`.
//! - Division truncates toward zero (integer semantics).
//! - `in_min == in_max` is a configuration bug and panics.

/// Clamp `x` into `[in_min, in_max]` and rescale it linearly onto `[out_min, out_max]`.
///
/// ```text
/// out = (clamp(x) - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
/// ```
///
/// The result is narrowed to `u8`. With an output range inside `[0, 255]` the
/// narrowing never wraps.
///
/// # Panics
///
/// Panics if `in_min == in_max`.
///
/// ```rust
/// use ambisense_core::range::map_range;
///
/// assert_eq!(map_range(4095, 0, 4095, 0, 255), 255);
/// assert_eq!(map_range(9000, 0, 4095, 0, 255), 255); // clamped
/// assert_eq!(map_range(2048, 0, 4095, 0, 255), 127);
/// ```
pub fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> u8 {
    assert!(in_max != in_min, "map_range: degenerate input range [{in_min}, {in_max}]");
    let lo = in_min.min(in_max);
    let hi = in_min.max(in_max);
    let x = x.clamp(lo, hi);
    ((x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min) as u8
}

/// A fixed input/output interval pair, applied with [`map_range`].
///
/// Used where the bounds are configuration rather than literals: the colour
/// channel normalisation and the brightness calibration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMap {
    /// Lower bound of the input interval.
    pub in_min: i64,
    /// Upper bound of the input interval. Must differ from `in_min`.
    pub in_max: i64,
    /// Lower bound of the output interval.
    pub out_min: i64,
    /// Upper bound of the output interval.
    pub out_max: i64,
}

impl RangeMap {
    /// Construct a range map.
    pub const fn new(in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> Self {
        Self { in_min, in_max, out_min, out_max }
    }

    /// Map `x` through this range. Panics if the input interval is degenerate.
    pub fn apply(&self, x: i64) -> u8 {
        map_range(x, self.in_min, self.in_max, self.out_min, self.out_max)
    }

    /// `true` when the input interval has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.in_min == self.in_max
    }
}
