//! Text content for the 128×64 status display.
//!
//! Only the *text* is composed here, into fixed-capacity `heapless` strings.
//! Fonts, positions and the I²C transfer belong to the display driver.
//!
//! ```text
//! Color: Magenta
//!     H:300          (or R:255 on the RGB page)
//!     S:1.00             G:0
//!     V:1.00             B:255
//! Lux:742                   Fest
//! ```
//!
//! Text that would overflow a line is truncated, never panics.

use core::fmt::Write;

use heapless::String;

use crate::controls::DisplayPage;
use crate::pipeline::CycleReport;

/// Capacity of one display line, with headroom over the 21 glyphs a 128 px row fits.
pub const LINE_CAPACITY: usize = 24;

/// One display line.
pub type Line = String<LINE_CAPACITY>;

/// All text for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayFrame {
    /// `Color: <name>`.
    pub title: Line,
    /// Three readout lines: H/S/V or R/G/B depending on the page.
    pub readout: [Line; 3],
    /// `Lux:<lux>`.
    pub lux: Line,
    /// Four-character ambient tag.
    pub mode: Line,
}

/// Writes into a line, dropping whatever does not fit.
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn line(args: core::fmt::Arguments<'_>) -> Line {
    let mut out = Line::new();
    // Truncating never reports an error.
    let _ = Truncating(&mut out).write_fmt(args);
    out
}

impl DisplayFrame {
    /// Compose the frame for `report` on `page`.
    pub fn compose(report: &CycleReport, page: DisplayPage) -> Self {
        let readout = match page {
            DisplayPage::Hsv => [
                line(format_args!("H:{:3.0}", report.hsv.h)),
                line(format_args!("S:{:.2}", report.hsv.s)),
                line(format_args!("V:{:.2}", report.hsv.v)),
            ],
            DisplayPage::Rgb => [
                line(format_args!("R:{}", report.rgb.r)),
                line(format_args!("G:{}", report.rgb.g)),
                line(format_args!("B:{}", report.rgb.b)),
            ],
        };
        Self {
            title: line(format_args!("Color: {}", report.name)),
            readout,
            lux: line(format_args!("Lux:{}", report.lux)),
            mode: line(format_args!("{}", report.ambient.tag())),
        }
    }
}
