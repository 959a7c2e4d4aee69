/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Button-driven indicator and display state.
//!
//! This state is owned by the actuation layer and updated only from the
//! debounced button-edge handler. The sensing pipeline never reads or writes
//! it; the two meet only when the display composes a frame.
//!
//! # Buttons
//!
//! | Button | Effect |
//! |--------|--------|
//! | A | toggle the RGB indicator LED on/off |
//! | B | advance the indicator colour (7 states, wraps) |
//! | Joystick | flip the display page between HSV and RGB |
//!
//! # Invariants
//!
//! - An edge within [`DEBOUNCE_MS`] of the last *accepted* edge is ignored,
//!   whichever button produced it.
//! - The millisecond clock may wrap; intervals use wrapping subtraction.
//! - The gate starts as if an edge had been accepted at 0 ms, so edges in the
//!   first [`DEBOUNCE_MS`] after boot are ignored.

/// Minimum interval between accepted edges, in milliseconds.
pub const DEBOUNCE_MS: u32 = 250;

/// Physical buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Button {
    /// Indicator on/off.
    A,
    /// Indicator colour.
    B,
    /// Display page.
    Joystick,
}

/// Minimum-interval edge gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    last_accepted_ms: u32,
}

impl Debouncer {
    /// A gate anchored at boot (0 ms).
    pub const fn new() -> Self {
        Self { last_accepted_ms: 0 }
    }

    /// Returns `true` and records `now_ms` if more than [`DEBOUNCE_MS`] has
    /// elapsed since the last accepted edge.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        let ok = now_ms.wrapping_sub(self.last_accepted_ms) > DEBOUNCE_MS;
        if ok {
            self.last_accepted_ms = now_ms;
        }
        ok
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour shown on the discrete RGB indicator LED.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorColor {
    /// Red only.
    #[default]
    Red,
    /// Green only.
    Green,
    /// Blue only.
    Blue,
    /// Red + green.
    Yellow,
    /// Green + blue.
    Cyan,
    /// Red + blue.
    Magenta,
    /// All three.
    White,
}

impl IndicatorColor {
    /// The next colour in the cycle, wrapping from White back to Red.
    pub fn next(self) -> Self {
        match self {
            IndicatorColor::Red => IndicatorColor::Green,
            IndicatorColor::Green => IndicatorColor::Blue,
            IndicatorColor::Blue => IndicatorColor::Yellow,
            IndicatorColor::Yellow => IndicatorColor::Cyan,
            IndicatorColor::Cyan => IndicatorColor::Magenta,
            IndicatorColor::Magenta => IndicatorColor::White,
            IndicatorColor::White => IndicatorColor::Red,
        }
    }

    /// GPIO levels for the (red, green, blue) pins.
    pub fn pins(self) -> [bool; 3] {
        match self {
            IndicatorColor::Red => [true, false, false],
            IndicatorColor::Green => [false, true, false],
            IndicatorColor::Blue => [false, false, true],
            IndicatorColor::Yellow => [true, true, false],
            IndicatorColor::Cyan => [false, true, true],
            IndicatorColor::Magenta => [true, false, true],
            IndicatorColor::White => [true, true, true],
        }
    }
}

/// Which readout the display shows under the colour name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayPage {
    /// Hue / saturation / value.
    #[default]
    Hsv,
    /// Normalised red / green / blue.
    Rgb,
}

impl DisplayPage {
    /// The other page.
    pub fn toggled(self) -> Self {
        match self {
            DisplayPage::Hsv => DisplayPage::Rgb,
            DisplayPage::Rgb => DisplayPage::Hsv,
        }
    }
}

/// Indicator LED and display page state, mutated only by [`PanelState::on_edge`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Indicator LED on.
    pub led_enabled: bool,
    /// Current indicator colour.
    pub led_color: IndicatorColor,
    /// Current display page.
    pub page: DisplayPage,
    debouncer: Debouncer,
}

impl PanelState {
    /// LED off, Red selected, HSV page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a falling edge from `button` at `now_ms`.
    ///
    /// Returns `true` if the edge was accepted (and state changed).
    pub fn on_edge(&mut self, button: Button, now_ms: u32) -> bool {
        if !self.debouncer.accept(now_ms) {
            return false;
        }
        match button {
            Button::A => self.led_enabled = !self.led_enabled,
            Button::B => self.led_color = self.led_color.next(),
            Button::Joystick => self.page = self.page.toggled(),
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?button, led_enabled = self.led_enabled, led_color = ?self.led_color, page = ?self.page, "panel edge");
        true
    }

    /// GPIO levels for the indicator's (red, green, blue) pins. All low when disabled.
    pub fn indicator_pins(&self) -> [bool; 3] {
        if self.led_enabled {
            self.led_color.pins()
        } else {
            [false; 3]
        }
    }
}
