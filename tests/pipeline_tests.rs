//! End-to-end tests for the sensing pipeline.
//!
//! Run with: `cargo test`
//!
//! Samples are given as raw 12-bit colour counts plus lux, exactly as the
//! drivers deliver them, and every output the actuators consume is checked.

use ambisense_core::alert::AlertState;
use ambisense_core::ambient::{AmbientClassifier, AmbientMode, DecisionPolicy, LuxGates, LuxRange};
use ambisense_core::color::ColorCategory;
use ambisense_core::colorspace::Rgb8;
use ambisense_core::config::SensingConfig;
use ambisense_core::controls::{Button, IndicatorColor, PanelState};
use ambisense_core::network::AmbientNetwork;
use ambisense_core::pipeline::SensingPipeline;
use ambisense_core::sensor::{ChannelSample, ColorReading, ColorSensor, LightSensor};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn sample(r: u16, g: u16, b: u16, lux: u16) -> ChannelSample {
    ChannelSample::new(ColorReading { r, g, b, clear: r.max(g).max(b) }, lux)
}

/// Replays a fixed script of colour readings, wrapping at the end.
struct ScriptedColor {
    script: &'static [ColorReading],
    next: usize,
}

impl ColorSensor for ScriptedColor {
    fn read_color(&mut self) -> ColorReading {
        let c = self.script[self.next % self.script.len()];
        self.next += 1;
        c
    }
}

/// Replays a fixed script of lux readings, wrapping at the end.
struct ScriptedLight {
    script: &'static [u16],
    next: usize,
}

impl LightSensor for ScriptedLight {
    fn read_light(&mut self) -> u16 {
        let l = self.script[self.next % self.script.len()];
        self.next += 1;
        l
    }
}

// ─── colour + LED ────────────────────────────────────────────────────────────

#[test]
fn test_each_primary_and_secondary_reaches_its_category() {
    let p = SensingPipeline::with_defaults();
    let cases: &[((u16, u16, u16), ColorCategory, Rgb8)] = &[
        ((4095, 0, 0), ColorCategory::Red, Rgb8::new(255, 0, 0)),
        ((4095, 4095, 0), ColorCategory::Yellow, Rgb8::new(255, 255, 0)),
        ((0, 4095, 0), ColorCategory::Green, Rgb8::new(0, 255, 0)),
        ((0, 4095, 4095), ColorCategory::Cyan, Rgb8::new(0, 255, 255)),
        ((0, 0, 4095), ColorCategory::Blue, Rgb8::new(0, 0, 255)),
        ((4095, 0, 4095), ColorCategory::Magenta, Rgb8::new(255, 0, 255)),
        ((4095, 4095, 4095), ColorCategory::White, Rgb8::new(255, 255, 255)),
    ];
    for &((r, g, b), category, led) in cases {
        // lux 300 is the top of the brightness calibration: full-brightness LED.
        let report = p.process(&sample(r, g, b, 300));
        assert_eq!(report.category, category, "rgb=({}, {}, {})", r, g, b);
        assert_eq!(report.name, category.name());
        assert_eq!(report.led, led, "{:?}", category);
    }
}

#[test]
fn test_led_never_exceeds_pure_colour_at_any_lux() {
    let p = SensingPipeline::with_defaults();
    for lux in (0..=2000u16).step_by(37) {
        let report = p.process(&sample(0, 4095, 4095, lux));
        let pure = report.category.pure_color();
        assert!(report.led.r <= pure.r && report.led.g <= pure.g && report.led.b <= pure.b);
        // Cyan has two lit channels; the floor keeps them at least 1.
        assert!(report.led.g >= 1 && report.led.b >= 1, "lux={} led={:?}", lux, report.led);
    }
}

#[test]
fn test_dim_desaturated_sample_is_undefined_and_dark() {
    let p = SensingPipeline::with_defaults();
    // Mid grey: s = 0, v ≈ 0.5, neither white nor a hue.
    let report = p.process(&sample(2048, 2048, 2048, 400));
    assert_eq!(report.category, ColorCategory::Undefined);
    assert_eq!(report.led, Rgb8::BLACK);
    assert_eq!(report.hsv.h, 0.0);
    assert_eq!(report.hsv.s, 0.0);
}

#[test]
fn test_over_range_counts_clamp() {
    let p = SensingPipeline::with_defaults();
    let report = p.process(&sample(u16::MAX, 0, 0, 300));
    assert_eq!(report.rgb, Rgb8::new(255, 0, 0));
    assert_eq!(report.category, ColorCategory::Red);
}

// ─── alerts ──────────────────────────────────────────────────────────────────

#[test]
fn test_alerts_are_recomputed_every_cycle() {
    let p = SensingPipeline::with_defaults();
    let dark = p.process(&sample(4095, 0, 0, 3));
    assert_eq!(dark.alerts, AlertState { low_light: true, intense_red: true });
    assert!(dark.alerts.tone().is_some());

    // Next cycle is fine: nothing latched.
    let ok = p.process(&sample(0, 4095, 0, 200));
    assert_eq!(ok.alerts, AlertState::default());
    assert!(ok.alerts.tone().is_none());
}

#[test]
fn test_dull_red_does_not_raise_intense_red() {
    let p = SensingPipeline::with_defaults();
    // r=2457 → 152 → v ≈ 0.6, below the 0.7 value threshold.
    let report = p.process(&sample(2457, 0, 0, 200));
    assert_eq!(report.category, ColorCategory::Red);
    assert!(!report.alerts.intense_red);
}

#[test]
fn test_custom_alert_threshold() {
    let mut config = SensingConfig::default();
    config.alerts.luminosity_threshold = 100;
    let p = SensingPipeline::new(config).expect("valid config");
    assert!(p.process(&sample(0, 0, 4095, 99)).alerts.low_light);
    assert!(!p.process(&sample(0, 0, 4095, 100)).alerts.low_light);
}

// ─── ambient mode ────────────────────────────────────────────────────────────

#[test]
fn test_ambient_modes_with_corroborating_lux() {
    let p = SensingPipeline::with_defaults();
    assert_eq!(p.process(&sample(0, 0, 4095, 150)).ambient, AmbientMode::Idle);
    assert_eq!(p.process(&sample(4095, 4095, 4095, 500)).ambient, AmbientMode::Work);
    assert_eq!(p.process(&sample(4095, 0, 0, 900)).ambient, AmbientMode::Party);
}

#[test]
fn test_ambient_rejected_by_lux_gate() {
    let p = SensingPipeline::with_defaults();
    assert_eq!(p.process(&sample(0, 0, 4095, 500)).ambient, AmbientMode::Outlier);
    assert_eq!(p.process(&sample(4095, 4095, 4095, 200)).ambient, AmbientMode::Outlier);
    assert_eq!(p.process(&sample(4095, 0, 0, 1500)).ambient, AmbientMode::Outlier);
}

#[test]
fn test_ambient_uncertain_network() {
    let p = SensingPipeline::with_defaults();
    for lux in [50u16, 500, 900] {
        assert_eq!(p.process(&sample(2048, 2048, 2048, lux)).ambient, AmbientMode::Outlier);
    }
}

#[test]
fn test_custom_network_is_used() {
    // Output row 1 strongly positive, rows 0 and 2 strongly negative: always "Work".
    let network = AmbientNetwork::new(
        [[0.0; 4]; 5],
        [[0.0, 0.0, 0.0, 0.0, 0.0, -20.0], [0.0, 0.0, 0.0, 0.0, 0.0, 20.0], [
            0.0, 0.0, 0.0, 0.0, 0.0, -20.0,
        ]],
    );
    let p = SensingPipeline::with_network(SensingConfig::default(), &network).expect("valid");
    assert_eq!(p.process(&sample(0, 0, 4095, 400)).ambient, AmbientMode::Work);
    assert_eq!(p.process(&sample(0, 0, 4095, 100)).ambient, AmbientMode::Outlier);
}

#[test]
fn test_classifier_shares_network_across_instances() {
    let a = AmbientClassifier::trained();
    let b = AmbientClassifier::new(
        AmbientNetwork::trained(),
        DecisionPolicy::default(),
        LuxGates { party: LuxRange::new(500, 2000), ..LuxGates::default() },
    );
    assert!(core::ptr::eq(a.network(), b.network()));
    assert_eq!(a.classify(Rgb8::new(255, 0, 0), 600), AmbientMode::Outlier);
    assert_eq!(b.classify(Rgb8::new(255, 0, 0), 600), AmbientMode::Party);
}

// ─── whole loop ──────────────────────────────────────────────────────────────

#[test]
fn test_trait_objects_drive_the_pipeline() {
    static COLORS: [ColorReading; 1] = [ColorReading { r: 0, g: 0, b: 4095, clear: 4095 }];
    static LUXES: [u16; 1] = [150];
    let mut color = ScriptedColor { script: &COLORS, next: 0 };
    let mut light = ScriptedLight { script: &LUXES, next: 0 };
    let color: &mut dyn ColorSensor = &mut color;
    let light: &mut dyn LightSensor = &mut light;

    let report = SensingPipeline::with_defaults().sample_and_process(color, light);
    assert_eq!(report.category, ColorCategory::Blue);
    assert_eq!(report.ambient, AmbientMode::Idle);
}

#[test]
fn test_identical_samples_yield_identical_reports() {
    let p = SensingPipeline::with_defaults();
    let s = sample(3000, 1000, 500, 640);
    let first = p.process(&s);
    for _ in 0..10 {
        assert_eq!(p.process(&s), first);
    }
}

#[test]
fn test_scripted_loop_with_button_presses() {
    static COLORS: [ColorReading; 3] = [
        ColorReading { r: 0, g: 0, b: 4095, clear: 4095 },
        ColorReading { r: 4095, g: 4095, b: 4095, clear: 4095 },
        ColorReading { r: 4095, g: 0, b: 0, clear: 4095 },
    ];
    static LUXES: [u16; 3] = [120, 450, 820];

    let p = SensingPipeline::with_defaults();
    let mut color = ScriptedColor { script: &COLORS, next: 0 };
    let mut light = ScriptedLight { script: &LUXES, next: 0 };
    let mut panel = PanelState::new();

    let mut modes = [AmbientMode::Outlier; 3];
    let mut now_ms = 1000u32;
    for mode in modes.iter_mut() {
        let report = p.sample_and_process(&mut color, &mut light);
        *mode = report.ambient;

        // A button bounce during the cycle does not disturb classification.
        panel.on_edge(Button::B, now_ms);
        panel.on_edge(Button::B, now_ms + 10);
        now_ms += 200;
    }

    assert_eq!(modes, [AmbientMode::Idle, AmbientMode::Work, AmbientMode::Party]);
    assert_eq!((color.next, light.next), (3, 3));
    // Edges at 1000, 1200, 1400: only 1000 and 1400 clear the 250 ms window.
    assert_eq!(panel.led_color, IndicatorColor::Blue);
}
