//! # Sensor loop: one evening in a room
//!
//! Simulates the device's main loop over a scripted evening: a dim blue
//! lamp, office lighting, then a party with red lights, and finally a
//! blackout. No hardware required; the drivers below replay fixed counts.
//!
//! Each cycle prints what the display shows, the LED strip colour, and
//! whether the buzzer would sound. A button press halfway through flips the
//! display to the RGB page, exactly as the joystick would.
//!
//! ## Running this example
//!
//! ```
//! cargo run --example sensor_loop
//! ```

use ambisense_core::controls::{Button, DisplayPage, PanelState};
use ambisense_core::sensor::{ColorReading, ColorSensor, LightSensor};
use ambisense_core::{CycleReport, SensingPipeline};

/// One scripted moment: raw colour counts and a lux reading.
struct Scene {
    label: &'static str,
    color: ColorReading,
    lux: u16,
}

const fn scene(label: &'static str, r: u16, g: u16, b: u16, lux: u16) -> Scene {
    let clear = if r > g { if r > b { r } else { b } } else if g > b { g } else { b };
    Scene { label, color: ColorReading { r, g, b, clear }, lux }
}

const EVENING: [Scene; 6] = [
    scene("reading lamp, blue shade", 300, 500, 4000, 140),
    scene("overhead office light", 4095, 4050, 3990, 520),
    scene("desk lamp only", 4095, 4080, 4020, 180),
    scene("party lights", 4095, 120, 90, 860),
    scene("strobe at full blast", 4095, 0, 0, 1400),
    scene("power cut", 40, 30, 35, 2),
];

/// Drivers for the simulated bench: both read from the current scene.
struct Bench<'a> {
    scene: &'a Scene,
}

impl ColorSensor for Bench<'_> {
    fn read_color(&mut self) -> ColorReading {
        self.scene.color
    }
}

impl LightSensor for Bench<'_> {
    fn read_light(&mut self) -> u16 {
        self.scene.lux
    }
}

fn print_report(report: &CycleReport, page: DisplayPage) {
    println!("  Color: {}", report.name);
    match page {
        DisplayPage::Hsv => println!(
            "    H:{:3.0}  S:{:.2}  V:{:.2}",
            report.hsv.h, report.hsv.s, report.hsv.v
        ),
        DisplayPage::Rgb => println!(
            "    R:{}  G:{}  B:{}",
            report.rgb.r, report.rgb.g, report.rgb.b
        ),
    }
    println!("  Lux:{:<5} {}", report.lux, report.ambient.tag());
    println!(
        "  LED strip #{:02X}{:02X}{:02X}",
        report.led.r, report.led.g, report.led.b
    );
    if let Some(tone) = report.alerts.tone() {
        println!(
            "  BUZZER {}x{} ms (low_light={}, intense_red={})",
            tone.beeps, tone.on_ms, report.alerts.low_light, report.alerts.intense_red
        );
    }
}

fn main() {
    println!("ambisense sensor loop: simulated evening");
    println!("=========================================\n");

    let pipeline = SensingPipeline::with_defaults();
    let mut panel = PanelState::new();
    let mut now_ms: u32 = 0;

    for (i, scene) in EVENING.iter().enumerate() {
        // Halfway through, someone flicks the joystick (with a contact bounce).
        if i == EVENING.len() / 2 {
            panel.on_edge(Button::Joystick, now_ms);
            panel.on_edge(Button::Joystick, now_ms + 12);
            println!("[joystick: display now on {:?} page]\n", panel.page);
        }

        let mut color = Bench { scene };
        let mut light = Bench { scene };
        let report = pipeline.sample_and_process(&mut color, &mut light);

        println!("{} ({})", i + 1, scene.label);
        print_report(&report, panel.page);
        println!();

        now_ms = now_ms.wrapping_add(1000);
    }
}
