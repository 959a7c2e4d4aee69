/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Fixed-topology 3-5-3 feed-forward network.
//!
//! The weights are pre-trained constants. The network is never trained or
//! mutated on-device; [`AmbientNetwork::trained`] hands out a `&'static`
//! reference that every classification call shares.
//!
//! # Layout
//!
//! ```text
//! input  [x0, x1, x2]      + bias 1 ─┐
//! hidden 5 × sigmoid(w · [x, 1])  ◄──┘   weights: 5 rows × 4
//! output 3 × sigmoid(w · [h, 1])          weights: 3 rows × 6
//! ```
//!
//! The last column of every weight row is the bias weight.
//!
//! # Invariants
//!
//! - No heap allocation; forward pass uses fixed-size stack arrays.
//! - Every output is in (0, 1).

use libm::expf;

/// Input units (normalised R, G, B).
pub const INPUT_LEN: usize = 3;
/// Hidden units.
pub const HIDDEN_LEN: usize = 5;
/// Output units (Idle, Work, Party).
pub const OUTPUT_LEN: usize = 3;

/// Hidden layer weights: one row per hidden unit, inputs then bias.
pub type HiddenWeights = [[f32; INPUT_LEN + 1]; HIDDEN_LEN];
/// Output layer weights: one row per output unit, hidden activations then bias.
pub type OutputWeights = [[f32; HIDDEN_LEN + 1]; OUTPUT_LEN];

/// Shipped hidden-layer weights.
pub const TRAINED_HIDDEN: HiddenWeights = [
    [2.661857, 6.408717, 1.197877, -5.405861],
    [-2.044108, -5.768311, -0.194693, 4.042969],
    [3.156306, -5.066918, -4.585429, 1.241510],
    [-12.349979, -2.461361, 3.371196, 4.594296],
    [4.260282, -4.847218, -4.883586, 0.496394],
];

/// Shipped output-layer weights.
pub const TRAINED_OUTPUT: OutputWeights = [
    [-5.191444, 1.899328, -2.282097, 12.606183, -3.801378, -3.360971],
    [8.362973, -6.287300, -4.975049, -11.016505, -4.422555, 2.839259],
    [-6.135138, 2.244717, 5.509221, -5.429541, 6.808523, -3.378476],
];

static TRAINED: AmbientNetwork = AmbientNetwork::new(TRAINED_HIDDEN, TRAINED_OUTPUT);

/// Logistic activation `1 / (1 + e^-z)`.
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + expf(-z))
}

/// Read-only weights of the ambient-mode network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmbientNetwork {
    hidden: HiddenWeights,
    output: OutputWeights,
}

impl AmbientNetwork {
    /// Build a network from explicit weight tables.
    pub const fn new(hidden: HiddenWeights, output: OutputWeights) -> Self {
        Self { hidden, output }
    }

    /// The process-wide network with the shipped weights.
    pub fn trained() -> &'static AmbientNetwork {
        &TRAINED
    }

    /// Hidden-layer weight table.
    pub fn hidden_weights(&self) -> &HiddenWeights {
        &self.hidden
    }

    /// Output-layer weight table.
    pub fn output_weights(&self) -> &OutputWeights {
        &self.output
    }

    /// Run the forward pass on inputs already normalised to [0, 1].
    pub fn forward(&self, input: &[f32; INPUT_LEN]) -> [f32; OUTPUT_LEN] {
        let hidden: [f32; HIDDEN_LEN] = dense(&self.hidden, input);
        dense(&self.output, &hidden)
    }
}

impl Default for AmbientNetwork {
    fn default() -> Self {
        TRAINED.clone()
    }
}

/// One fully-connected sigmoid layer. Each row holds `IN` weights then the bias.
fn dense<const IN: usize, const W: usize, const OUT: usize>(
    weights: &[[f32; W]; OUT],
    input: &[f32; IN],
) -> [f32; OUT] {
    debug_assert_eq!(W, IN + 1, "weight row must be input width + bias");
    let mut out = [0.0f32; OUT];
    for (o, row) in out.iter_mut().zip(weights.iter()) {
        let z: f32 = row[..IN].iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f32>() + row[IN];
        *o = sigmoid(z);
    }
    out
}
