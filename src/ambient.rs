/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Ambient-mode classification: network confidence gated by measured lux.
//!
//! - [`AmbientMode`]: Idle / Work / Party / Outlier.
//! - [`DecisionPolicy`]: confidence thresholds over the three network outputs.
//! - [`LuxGates`]: the lux interval that must corroborate each confident class.
//! - [`AmbientClassifier`]: normalise → forward pass → decide.
//!
//! # Decision
//!
//! ```text
//! outputs ──► exactly one o[i] ≥ confident, all others ≤ quiet? ──no──► Outlier
//!                               │ yes
//!                               ▼
//!                 lux inside gate for class i? ──no──► Outlier
//!                               │ yes
//!                               ▼
//!                      Idle / Work / Party
//! ```
//!
//! The network alone is never trusted: a confident class whose lux gate fails
//! is reported as [`AmbientMode::Outlier`], not as the raw class.

use crate::colorspace::Rgb8;
use crate::network::{AmbientNetwork, INPUT_LEN, OUTPUT_LEN};

// ─── AmbientMode ────────────────────────────────────────────────────────────

/// Coarse ambient classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmbientMode {
    /// Relaxed, dim environment (network class 0).
    Idle,
    /// Neutral working light (network class 1).
    Work,
    /// Bright, saturated party lighting (network class 2).
    Party,
    /// No confident class, or the confident class was not corroborated by lux.
    #[default]
    Outlier,
}

impl AmbientMode {
    /// Mode for a network output index. Indices past the last class are Outlier.
    pub fn from_index(i: usize) -> AmbientMode {
        match i {
            0 => AmbientMode::Idle,
            1 => AmbientMode::Work,
            2 => AmbientMode::Party,
            _ => AmbientMode::Outlier,
        }
    }

    /// Numeric code: 0 Idle, 1 Work, 2 Party, 3 Outlier.
    pub fn index(&self) -> usize {
        match self {
            AmbientMode::Idle => 0,
            AmbientMode::Work => 1,
            AmbientMode::Party => 2,
            AmbientMode::Outlier => 3,
        }
    }

    /// Full name.
    pub fn name(&self) -> &'static str {
        match self {
            AmbientMode::Idle => "Idle",
            AmbientMode::Work => "Work",
            AmbientMode::Party => "Party",
            AmbientMode::Outlier => "Outlier",
        }
    }

    /// Four-character tag for the status line of the display.
    pub fn tag(&self) -> &'static str {
        match self {
            AmbientMode::Idle => "Idle",
            AmbientMode::Work => "Work",
            AmbientMode::Party => "Fest",
            AmbientMode::Outlier => "????",
        }
    }
}

impl core::fmt::Display for AmbientMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── DecisionPolicy ─────────────────────────────────────────────────────────

/// Thresholds that turn raw network outputs into a single confident index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecisionPolicy {
    /// An output must reach at least this to be a candidate. Default 0.95.
    pub confident: f32,
    /// Every other output must be at most this. Default 0.05.
    pub quiet: f32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self { confident: 0.95, quiet: 0.05 }
    }
}

impl DecisionPolicy {
    /// Index of the single confident output, if any.
    ///
    /// Outputs are scanned in order; the first index that reaches `confident`
    /// while every other output stays at or below `quiet` wins.
    pub fn confident_index(&self, outputs: &[f32; OUTPUT_LEN]) -> Option<usize> {
        (0..OUTPUT_LEN).find(|&i| {
            outputs[i] >= self.confident
                && outputs
                    .iter()
                    .enumerate()
                    .all(|(j, &o)| j == i || o <= self.quiet)
        })
    }
}

// ─── LuxGates ───────────────────────────────────────────────────────────────

/// Inclusive lux interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuxRange {
    /// Lower bound (inclusive).
    pub min: u16,
    /// Upper bound (inclusive).
    pub max: u16,
}

impl LuxRange {
    /// Construct an inclusive range.
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// `true` if `lux` lies in `[min, max]`.
    pub fn contains(&self, lux: u16) -> bool {
        lux >= self.min && lux <= self.max
    }
}

/// Lux corroboration interval for each confident class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LuxGates {
    /// Gate for Idle. Default [10, 300].
    pub idle: LuxRange,
    /// Gate for Work. Default [300, 700].
    pub work: LuxRange,
    /// Gate for Party. Default [700, 1000].
    pub party: LuxRange,
}

impl Default for LuxGates {
    fn default() -> Self {
        Self {
            idle: LuxRange::new(10, 300),
            work: LuxRange::new(300, 700),
            party: LuxRange::new(700, 1000),
        }
    }
}

impl LuxGates {
    /// Gate for a class mode. `None` for Outlier.
    pub fn gate_for(&self, mode: AmbientMode) -> Option<&LuxRange> {
        match mode {
            AmbientMode::Idle => Some(&self.idle),
            AmbientMode::Work => Some(&self.work),
            AmbientMode::Party => Some(&self.party),
            AmbientMode::Outlier => None,
        }
    }

    /// Iterate `(mode, gate)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (AmbientMode, &LuxRange)> {
        [
            (AmbientMode::Idle, &self.idle),
            (AmbientMode::Work, &self.work),
            (AmbientMode::Party, &self.party),
        ]
        .into_iter()
    }
}

/// Apply the confidence policy and the lux gate to raw network outputs.
///
/// ```rust
/// use ambisense_core::ambient::{decide, AmbientMode, DecisionPolicy, LuxGates};
///
/// let p = DecisionPolicy::default();
/// let g = LuxGates::default();
/// assert_eq!(decide(&[0.97, 0.02, 0.01], 200, &p, &g), AmbientMode::Idle);
/// assert_eq!(decide(&[0.97, 0.02, 0.01], 500, &p, &g), AmbientMode::Outlier);
/// assert_eq!(decide(&[0.5, 0.5, 0.0], 200, &p, &g), AmbientMode::Outlier);
/// ```
pub fn decide(
    outputs: &[f32; OUTPUT_LEN],
    lux: u16,
    policy: &DecisionPolicy,
    gates: &LuxGates,
) -> AmbientMode {
    let Some(i) = policy.confident_index(outputs) else {
        return AmbientMode::Outlier;
    };
    let mode = AmbientMode::from_index(i);
    match gates.gate_for(mode) {
        Some(gate) if gate.contains(lux) => mode,
        _ => AmbientMode::Outlier,
    }
}

// ─── AmbientClassifier ──────────────────────────────────────────────────────

/// Per-channel linear input scaling `[x_min, x_max] → [0, 1]`.
const X_MIN: [f32; INPUT_LEN] = [0.0; INPUT_LEN];
const X_MAX: [f32; INPUT_LEN] = [255.0; INPUT_LEN];
/// Output denormalisation bounds. Identity: outputs are already in [0, 1].
const Y_MIN: [f32; OUTPUT_LEN] = [0.0; OUTPUT_LEN];
const Y_MAX: [f32; OUTPUT_LEN] = [1.0; OUTPUT_LEN];

/// Normalise 8-bit RGB to network inputs in [0, 1].
pub fn normalize_input(rgb: Rgb8) -> [f32; INPUT_LEN] {
    let raw = [rgb.r as f32, rgb.g as f32, rgb.b as f32];
    let mut x = [0.0f32; INPUT_LEN];
    for j in 0..INPUT_LEN {
        x[j] = (raw[j] - X_MIN[j]) / (X_MAX[j] - X_MIN[j]);
    }
    x
}

fn denormalize_output(mut o: [f32; OUTPUT_LEN]) -> [f32; OUTPUT_LEN] {
    for k in 0..OUTPUT_LEN {
        o[k] = o[k] * (Y_MAX[k] - Y_MIN[k]) + Y_MIN[k];
    }
    o
}

/// Stateless classifier over a shared, read-only [`AmbientNetwork`].
#[derive(Clone, Debug)]
pub struct AmbientClassifier<'n> {
    network: &'n AmbientNetwork,
    /// Confidence thresholds.
    pub policy: DecisionPolicy,
    /// Lux corroboration gates.
    pub gates: LuxGates,
}

impl AmbientClassifier<'static> {
    /// Classifier over the shipped network with default thresholds.
    pub fn trained() -> Self {
        Self::new(AmbientNetwork::trained(), DecisionPolicy::default(), LuxGates::default())
    }
}

impl<'n> AmbientClassifier<'n> {
    /// Classifier over an explicit network.
    pub fn new(network: &'n AmbientNetwork, policy: DecisionPolicy, gates: LuxGates) -> Self {
        Self { network, policy, gates }
    }

    /// The network this classifier reads.
    pub fn network(&self) -> &'n AmbientNetwork {
        self.network
    }

    /// Raw network outputs for `rgb`, each in [0, 1].
    pub fn outputs(&self, rgb: Rgb8) -> [f32; OUTPUT_LEN] {
        denormalize_output(self.network.forward(&normalize_input(rgb)))
    }

    /// Classify the ambient mode for one cycle.
    pub fn classify(&self, rgb: Rgb8, lux: u16) -> AmbientMode {
        let o = self.outputs(rgb);
        #[cfg(feature = "tracing")]
        tracing::trace!(o0 = o[0], o1 = o[1], o2 = o[2], lux, "ambient network outputs");
        decide(&o, lux, &self.policy, &self.gates)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(o: [f32; 3], lux: u16) -> AmbientMode {
        decide(&o, lux, &DecisionPolicy::default(), &LuxGates::default())
    }

    #[test]
    fn test_confident_idle_inside_gate() {
        assert_eq!(d([0.97, 0.02, 0.01], 200), AmbientMode::Idle);
    }

    #[test]
    fn test_confident_idle_rejected_by_gate() {
        assert_eq!(d([0.97, 0.02, 0.01], 500), AmbientMode::Outlier);
        assert_eq!(d([0.97, 0.02, 0.01], 9), AmbientMode::Outlier);
    }

    #[test]
    fn test_no_confidence_is_outlier() {
        assert_eq!(d([0.5, 0.5, 0.0], 200), AmbientMode::Outlier);
        assert_eq!(d([0.0, 0.0, 0.0], 500), AmbientMode::Outlier);
    }

    #[test]
    fn test_confident_but_noisy_other_output_is_outlier() {
        // o[0] is high but o[2] is above the quiet threshold.
        assert_eq!(d([0.99, 0.0, 0.06], 200), AmbientMode::Outlier);
    }

    #[test]
    fn test_threshold_edges_are_inclusive() {
        assert_eq!(d([0.95, 0.05, 0.05], 100), AmbientMode::Idle);
        assert_eq!(d([0.05, 0.95, 0.0], 300), AmbientMode::Work);
        assert_eq!(d([0.0, 0.0, 0.95], 1000), AmbientMode::Party);
    }

    #[test]
    fn test_shared_gate_boundary_lux() {
        // 300 lies in both the Idle and Work gates; the confident class decides.
        assert_eq!(d([0.99, 0.0, 0.0], 300), AmbientMode::Idle);
        assert_eq!(d([0.0, 0.99, 0.0], 300), AmbientMode::Work);
        assert_eq!(d([0.0, 0.99, 0.0], 700), AmbientMode::Work);
        assert_eq!(d([0.0, 0.0, 0.99], 700), AmbientMode::Party);
        assert_eq!(d([0.0, 0.0, 0.99], 1001), AmbientMode::Outlier);
    }

    #[test]
    fn test_confident_index_scans_in_order() {
        let p = DecisionPolicy::default();
        assert_eq!(p.confident_index(&[0.0, 0.96, 0.01]), Some(1));
        assert_eq!(p.confident_index(&[0.96, 0.96, 0.0]), None);
    }

    #[test]
    fn test_mode_index_round_trip_and_labels() {
        for i in 0..4 {
            assert_eq!(AmbientMode::from_index(i).index(), i);
        }
        assert_eq!(AmbientMode::from_index(17), AmbientMode::Outlier);
        assert_eq!(AmbientMode::Party.tag(), "Fest");
        assert_eq!(AmbientMode::Outlier.tag(), "????");
        assert_eq!(AmbientMode::Party.name(), "Party");
    }

    #[test]
    fn test_normalize_input_unit_range() {
        let x = normalize_input(Rgb8::new(0, 51, 255));
        assert_eq!(x[0], 0.0);
        assert!((x[1] - 0.2).abs() < 1e-6);
        assert_eq!(x[2], 1.0);
    }

    #[test]
    fn test_classifier_with_trained_network() {
        let c = AmbientClassifier::trained();
        assert_eq!(c.classify(Rgb8::new(0, 0, 255), 200), AmbientMode::Idle);
        assert_eq!(c.classify(Rgb8::new(0, 0, 255), 500), AmbientMode::Outlier);
        assert_eq!(c.classify(Rgb8::new(255, 255, 255), 500), AmbientMode::Work);
        assert_eq!(c.classify(Rgb8::new(255, 0, 0), 800), AmbientMode::Party);
        assert_eq!(c.classify(Rgb8::new(128, 128, 128), 500), AmbientMode::Outlier);
        // Black: class 0 is high but class 2 is far from quiet.
        assert_eq!(c.classify(Rgb8::BLACK, 200), AmbientMode::Outlier);
    }

    #[test]
    fn test_custom_gates() {
        let gates = LuxGates { idle: LuxRange::new(0, 50), ..LuxGates::default() };
        let c = AmbientClassifier::new(AmbientNetwork::trained(), DecisionPolicy::default(), gates);
        assert_eq!(c.classify(Rgb8::new(0, 0, 255), 20), AmbientMode::Idle);
        assert_eq!(c.classify(Rgb8::new(0, 0, 255), 200), AmbientMode::Outlier);
    }

    #[test]
    fn test_gates_iter_order() {
        let g = LuxGates::default();
        let modes: [AmbientMode; 3] = {
            let mut it = g.iter().map(|(m, _)| m);
            [
                it.next().unwrap_or_default(),
                it.next().unwrap_or_default(),
                it.next().unwrap_or_default(),
            ]
        };
        assert_eq!(modes, [AmbientMode::Idle, AmbientMode::Work, AmbientMode::Party]);
        assert!(g.gate_for(AmbientMode::Outlier).is_none());
    }
}
