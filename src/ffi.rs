//! Python FFI bindings via PyO3.
//!
//! Exposes the sensing pipeline to Python for bench testing and data logging
//! on a host. Raw sensor counts in, one report per call out.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from ambisense_core import Pipeline, AmbientMode, rgb_to_hsv, classify_color
//!
//! pipeline = Pipeline()                       # shipped thresholds
//! report = pipeline.process(4095, 0, 0, 800)  # raw r, g, b counts and lux
//! print(report.color)                         # "Red"
//! print(report.ambient == AmbientMode.Party)  # True
//! print(report.led)                           # [255, 0, 0]
//!
//! h, s, v = rgb_to_hsv(0, 0, 255)             # (240.0, 1.0, 1.0)
//! print(classify_color(h, s, v))              # "Blue"
//! ```

#![allow(non_snake_case)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::ambient::AmbientMode as RustAmbientMode;
use crate::color::ColorCategory;
use crate::colorspace::rgb_to_hsv as rust_rgb_to_hsv;
use crate::config::SensingConfig;
use crate::pipeline::{CycleReport, SensingPipeline};
use crate::sensor::{ChannelSample, ColorReading};

fn check_channel(name: &str, value: f32) -> PyResult<()> {
    if (0.0..=255.0).contains(&value) {
        Ok(())
    } else {
        Err(PyValueError::new_err(format!("{name} must be in [0, 255], got {value}")))
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Convert RGB channels in [0, 255] to an (h, s, v) tuple.
#[pyfunction]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> PyResult<(f32, f32, f32)> {
    check_channel("r", r)?;
    check_channel("g", g)?;
    check_channel("b", b)?;
    let hsv = rust_rgb_to_hsv(r, g, b);
    Ok((hsv.h, hsv.s, hsv.v))
}

/// Name of the colour category for an HSV triple.
#[pyfunction]
pub fn classify_color(h: f32, s: f32, v: f32) -> &'static str {
    ColorCategory::classify(h, s, v).name()
}

// ── AmbientMode ───────────────────────────────────────────────────────────────

/// Ambient-mode label.
///
/// Modes:
///     Idle   : dim, relaxed light (lux 10–300)
///     Work   : neutral working light (lux 300–700)
///     Party  : bright saturated light (lux 700–1000)
///     Outlier: no confident class, or lux did not corroborate it
#[pyclass(name = "AmbientMode")]
#[derive(Clone)]
pub struct PyAmbientMode {
    inner: RustAmbientMode,
}

#[pymethods]
impl PyAmbientMode {
    /// Idle class attribute.
    #[classattr]
    pub fn Idle() -> Self {
        Self { inner: RustAmbientMode::Idle }
    }

    /// Work class attribute.
    #[classattr]
    pub fn Work() -> Self {
        Self { inner: RustAmbientMode::Work }
    }

    /// Party class attribute.
    #[classattr]
    pub fn Party() -> Self {
        Self { inner: RustAmbientMode::Party }
    }

    /// Outlier class attribute.
    #[classattr]
    pub fn Outlier() -> Self {
        Self { inner: RustAmbientMode::Outlier }
    }

    /// Numeric code: 0 Idle, 1 Work, 2 Party, 3 Outlier.
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("AmbientMode.{}", self.inner.name())
    }

    /// Python equality comparison.
    pub fn __eq__(&self, other: &PyAmbientMode) -> bool {
        self.inner == other.inner
    }
}

// ── CycleReport ───────────────────────────────────────────────────────────────

/// Result of one pipeline cycle.
#[pyclass(name = "CycleReport")]
pub struct PyCycleReport {
    inner: CycleReport,
}

#[pymethods]
impl PyCycleReport {
    /// Lux used this cycle.
    #[getter]
    pub fn lux(&self) -> u16 {
        self.inner.lux
    }
    /// Normalised [r, g, b].
    #[getter]
    pub fn rgb(&self) -> [u8; 3] {
        self.inner.rgb.to_array()
    }
    /// (h, s, v).
    #[getter]
    pub fn hsv(&self) -> (f32, f32, f32) {
        (self.inner.hsv.h, self.inner.hsv.s, self.inner.hsv.v)
    }
    /// Colour name.
    #[getter]
    pub fn color(&self) -> &'static str {
        self.inner.name
    }
    /// Low-light alert flag.
    #[getter]
    pub fn low_light(&self) -> bool {
        self.inner.alerts.low_light
    }
    /// Intense-red alert flag.
    #[getter]
    pub fn intense_red(&self) -> bool {
        self.inner.alerts.intense_red
    }
    /// Brightness-scaled LED [r, g, b].
    #[getter]
    pub fn led(&self) -> [u8; 3] {
        self.inner.led.to_array()
    }
    /// Ambient mode.
    #[getter]
    pub fn ambient(&self) -> PyAmbientMode {
        PyAmbientMode { inner: self.inner.ambient }
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "CycleReport(color={}, lux={}, ambient={}, low_light={}, intense_red={})",
            self.inner.name,
            self.inner.lux,
            self.inner.ambient.name(),
            self.inner.alerts.low_light,
            self.inner.alerts.intense_red,
        )
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Sensing pipeline with the shipped network.
///
/// Example::
///
///     pipeline = Pipeline(sensor_max=4095, luminosity_threshold=10)
///     report = pipeline.process(r=1200, g=3100, b=700, lux=420)
#[pyclass(name = "Pipeline")]
pub struct PyPipeline {
    inner: SensingPipeline<'static>,
}

#[pymethods]
impl PyPipeline {
    /// Create a pipeline. Unspecified settings use the device defaults.
    ///
    /// Raises ValueError if the resulting configuration is invalid.
    #[new]
    #[pyo3(signature = (sensor_max=4095, luminosity_threshold=10, lux_low=10, lux_high=300))]
    pub fn new(
        sensor_max: u16,
        luminosity_threshold: u16,
        lux_low: u16,
        lux_high: u16,
    ) -> PyResult<Self> {
        let mut config = SensingConfig { sensor_max, ..SensingConfig::default() };
        config.alerts.luminosity_threshold = luminosity_threshold;
        config.brightness.lux_low = lux_low;
        config.brightness.lux_high = lux_high;
        let inner = SensingPipeline::new(config)
            .map_err(|e| PyValueError::new_err(format!("invalid configuration: {e}")))?;
        Ok(Self { inner })
    }

    /// Run one cycle over raw colour counts and a lux reading.
    #[pyo3(signature = (r, g, b, lux, clear=0))]
    pub fn process(&self, r: u16, g: u16, b: u16, lux: u16, clear: u16) -> PyCycleReport {
        let sample = ChannelSample::new(ColorReading { r, g, b, clear }, lux);
        PyCycleReport { inner: self.inner.process(&sample) }
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!("Pipeline(sensor_max={})", self.inner.config().sensor_max)
    }
}

// ── Module entry point ────────────────────────────────────────────────────────

/// Ambient sensing pipeline Python bindings.
#[pymodule]
pub fn ambisense_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rgb_to_hsv, m)?)?;
    m.add_function(wrap_pyfunction!(classify_color, m)?)?;
    m.add_class::<PyAmbientMode>()?;
    m.add_class::<PyCycleReport>()?;
    m.add_class::<PyPipeline>()?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
