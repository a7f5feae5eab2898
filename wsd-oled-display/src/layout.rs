//! Display geometry, configuration and text rendering.
//!
//! [`render_text`] is the only drawing primitive the driver needs. It works
//! on any `embedded-graphics` [`DrawTarget`], so it can be tested against a
//! mock display without I2C.

use embassy_time::Duration;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 32;

/// Default 7-bit I2C address of SSD1306 modules (`0x3D` is the common
/// alternative when the address jumper is set).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the display driver and demo routine.
///
/// [`DisplayConfig::default()`] matches the stock 128×32 module: address
/// `0x3C` on a 400 kHz bus, with a 2 s hold per demo screen. The demo draws
/// its greeting on the first text row and its farewell on the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// 7-bit I2C device address. Default: `0x3C`.
    pub address: u8,
    /// I2C clock the bus should be configured with, in Hz. Default: 400 000.
    ///
    /// The driver does not own bus setup; board code reads this when
    /// building the I2C peripheral.
    pub i2c_frequency_hz: u32,
    /// How long each demo screen stays up. Default: 2 s.
    pub demo_hold: Duration,
    /// Top-left corner of the demo greeting. Default: `(0, 0)`.
    pub greeting_at: Point,
    /// Top-left corner of the demo farewell. Default: `(0, 10)`.
    pub farewell_at: Point,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            i2c_frequency_hz: 400_000,
            demo_hold: Duration::from_secs(2),
            greeting_at: Point::zero(),
            farewell_at: Point::new(0, 10),
        }
    }
}

impl DisplayConfig {
    /// Demo hold time in whole milliseconds, saturating at `u32::MAX`.
    pub fn demo_hold_ms(&self) -> u32 {
        u32::try_from(self.demo_hold.as_millis()).unwrap_or(u32::MAX)
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Text style used for all display text: 6×10 monospace, lit pixels only.
///
/// No background color is set, so text is drawn over existing content.
pub fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On)
}

/// Draw `text` with its top-left corner at `position`.
///
/// Only foreground pixels are touched. Returns the position just after the
/// last character, which can be used to continue a line.
///
/// # Example
///
/// ```no_run
/// # use wsd_oled_display::layout::render_text;
/// # use embedded_graphics::prelude::Point;
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// render_text(display, "Hello", Point::new(0, 10)).ok();
/// # }
/// ```
pub fn render_text<D>(display: &mut D, text: &str, position: Point) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, position, text_style(), Baseline::Top).draw(display)
}

// ── Tests ────────────────────────────────────────────────────────────────
