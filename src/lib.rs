/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! # ambisense-core
//!
//! Ambient light and colour sensing for a small embedded device: what colour is
//! in front of the sensor, is anything worth an alert, how bright should the
//! LEDs be, and what kind of room is this?
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! raw counts ─► RangeMap ─► Rgb8 ─► HSV ─► ColorCategory ─┬─► AlertState
//!                             │                           └─► LED Rgb8 (lux-scaled)
//!                             └──────► AmbientNetwork (3-5-3) + lux gate ─► AmbientMode
//! ```
//!
//! Every stage is a pure function of the current sample. The only long-lived
//! state is the network's weight table, which is read-only and shared.
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`range`] | [`range::RangeMap`] | Clamped integer range remapping |
//! | [`colorspace`] | [`Rgb8`], [`Hsv`] | RGB → HSV conversion |
//! | [`color`] | [`ColorCategory`] | Ordered hue/saturation/value rules, pure colours, names |
//! | [`alert`] | [`AlertState`], [`AlertThresholds`] | Low-light and intense-red alerts |
//! | [`brightness`] | [`BrightnessCalibration`] | Lux → LED brightness factor and scaling |
//! | [`network`] | [`AmbientNetwork`] | Fixed 3-5-3 sigmoid network, shipped weights |
//! | [`ambient`] | [`AmbientClassifier`], [`AmbientMode`] | Confidence policy + lux corroboration |
//! | [`config`] | [`SensingConfig`] | Injected thresholds and start-up validation |
//! | [`sensor`] | [`sensor::ColorSensor`], [`sensor::LightSensor`] | Driver seam, raw samples |
//! | [`pipeline`] | [`SensingPipeline`], [`CycleReport`] | One full sensing cycle |
//! | [`controls`] | [`controls::PanelState`] | Debounced buttons, indicator LED, display page |
//! | `display` | `DisplayFrame` | Status display text (requires `display-text`) |
//!
//! ## Quick start
//!
//! ```rust
//! use ambisense_core::{AmbientMode, ColorCategory, SensingPipeline};
//! use ambisense_core::sensor::{ChannelSample, ColorReading};
//!
//! let pipeline = SensingPipeline::with_defaults();
//! let sample = ChannelSample::new(ColorReading { r: 4095, g: 0, b: 0, clear: 4095 }, 800);
//! let report = pipeline.process(&sample);
//!
//! assert_eq!(report.category, ColorCategory::Red);
//! assert!(report.alerts.intense_red);
//! assert_eq!(report.ambient, AmbientMode::Party);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default with no heap required. Float functions
//! missing from `core` come from `libm`.
//!
//! | Feature | Adds |
//! |---------|------|
//! | `std` | `std::error::Error` for [`ConfigError`] |
//! | `serde` | `Serialize`/`Deserialize` on config and report types |
//! | `display-text` | `display` module (`heapless` strings) |
//! | `tracing` | `tracing` events per cycle and on config rejection |
//! | `python-ffi` | PyO3 bindings |
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Pull in std when the feature is enabled, and for the unit-test harness.
#[cfg(any(feature = "std", feature = "python-ffi", test))]
extern crate std;

pub mod range;
pub mod colorspace;
pub mod color;
pub mod alert;
pub mod brightness;
pub mod network;
pub mod ambient;
pub mod config;
pub mod sensor;
pub mod pipeline;
pub mod controls;

/// Status display text composition.
///
/// Enabled by `features = ["display-text"]`.
#[cfg(feature = "display-text")]
pub mod display;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use alert::{AlertState, AlertThresholds};
pub use ambient::{AmbientClassifier, AmbientMode, DecisionPolicy, LuxGates};
pub use brightness::BrightnessCalibration;
pub use color::ColorCategory;
pub use colorspace::{Hsv, Rgb8};
pub use config::{ConfigError, SensingConfig};
pub use network::AmbientNetwork;
pub use pipeline::{CycleReport, SensingPipeline};
