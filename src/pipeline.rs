/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! One sensing cycle, end to end.
//!
//! ```text
//! ChannelSample ─► normalize ─► Rgb8 ─► rgb_to_hsv ─► Hsv ─► classify ─► ColorCategory
//!                                 │                                         │
//!                                 └──► AmbientClassifier (+ lux) ─► AmbientMode
//!                                                                           │
//!                         AlertState::evaluate (lux, category, s, v) ◄──────┤
//!                         BrightnessCalibration::scale (lux, pure) ◄────────┘
//! ```
//!
//! # Invariants
//!
//! - Stages run in a fixed linear order; nothing blocks or performs I/O.
//! - No state survives between calls: the same sample always yields the same
//!   [`CycleReport`].
//! - The pipeline never touches button/indicator state ([`crate::controls`]).

use crate::alert::AlertState;
use crate::ambient::{AmbientClassifier, AmbientMode};
use crate::color::ColorCategory;
use crate::colorspace::{Hsv, Rgb8};
use crate::config::{ConfigError, SensingConfig};
use crate::network::AmbientNetwork;
use crate::sensor::{ChannelSample, ColorSensor, LightSensor};

/// Everything the display, LED strip and buzzer need from one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CycleReport {
    /// Ambient light reading used this cycle.
    pub lux: u16,
    /// Colour channels normalised to 8 bits.
    pub rgb: Rgb8,
    /// HSV of `rgb`.
    pub hsv: Hsv,
    /// Identified colour.
    pub category: ColorCategory,
    /// Display name of `category`.
    pub name: &'static str,
    /// Alert flags.
    pub alerts: AlertState,
    /// Brightness-scaled pure colour for the LED strip.
    pub led: Rgb8,
    /// Ambient-mode classification.
    pub ambient: AmbientMode,
}

/// The sensing-to-classification pipeline.
///
/// Holds the injected configuration and a shared reference to the read-only
/// network; cheap to construct and safe to share.
#[derive(Clone, Debug)]
pub struct SensingPipeline<'n> {
    config: SensingConfig,
    classifier: AmbientClassifier<'n>,
}

impl SensingPipeline<'static> {
    /// Pipeline over the shipped network with the default device configuration.
    pub fn with_defaults() -> Self {
        Self::build(SensingConfig::default(), AmbientNetwork::trained())
    }

    /// Pipeline over the shipped network with a validated configuration.
    pub fn new(config: SensingConfig) -> Result<Self, ConfigError> {
        Self::with_network(config, AmbientNetwork::trained())
    }
}

impl<'n> SensingPipeline<'n> {
    /// Pipeline over an explicit network. Fails if `config` does not validate.
    pub fn with_network(
        config: SensingConfig,
        network: &'n AmbientNetwork,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, network))
    }

    fn build(config: SensingConfig, network: &'n AmbientNetwork) -> Self {
        let classifier =
            AmbientClassifier::new(network, config.policy.clone(), config.gates.clone());
        Self { config, classifier }
    }

    /// The active configuration.
    pub fn config(&self) -> &SensingConfig {
        &self.config
    }

    /// The ambient classifier stage.
    pub fn classifier(&self) -> &AmbientClassifier<'n> {
        &self.classifier
    }

    /// Run one cycle over an already-taken sample.
    pub fn process(&self, sample: &ChannelSample) -> CycleReport {
        let lux = sample.lux;
        let rgb = sample.normalize(self.config.sensor_max);
        let hsv = rgb.to_hsv();
        let category = ColorCategory::from_hsv(&hsv);
        let ambient = self.classifier.classify(rgb, lux);
        let alerts = AlertState::evaluate(lux, category, hsv.s, hsv.v, &self.config.alerts);
        let led = self.config.brightness.scale(lux, category.pure_color());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            lux,
            r = rgb.r,
            g = rgb.g,
            b = rgb.b,
            h = hsv.h,
            s = hsv.s,
            v = hsv.v,
            category = category.name(),
            low_light = alerts.low_light,
            intense_red = alerts.intense_red,
            ambient = ambient.name(),
            "sensing cycle"
        );

        CycleReport {
            lux,
            rgb,
            hsv,
            category,
            name: category.name(),
            alerts,
            led,
            ambient,
        }
    }

    /// Sample both sensors (light first, then colour) and run one cycle.
    pub fn sample_and_process<C, L>(&self, color: &mut C, light: &mut L) -> CycleReport
    where
        C: ColorSensor + ?Sized,
        L: LightSensor + ?Sized,
    {
        let lux = light.read_light();
        let reading = color.read_color();
        self.process(&ChannelSample::new(reading, lux))
    }
}

impl Default for SensingPipeline<'static> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
