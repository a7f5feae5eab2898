//! Core OLED driver wrapping the `ssd1306` crate in async buffered graphics mode.
//!
//! [`OledDriver`] manages the SSD1306 display lifecycle: construction without
//! I2C traffic, explicit async initialisation, and text writes that render
//! into the frame buffer and flush it in one call.

use display_interface_i2c::I2CInterface;
use embedded_graphics::prelude::Point;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;
use crate::layout::render_text;

/// Concrete display type used internally by [`OledDriver`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x32,
    BufferedGraphicsModeAsync<DisplaySize128x32>,
>;

/// Async driver for an SSD1306 128×32 OLED display over I2C.
///
/// Wraps the [`ssd1306`] crate in `BufferedGraphicsMode`, providing a
/// text-oriented interface for initialisation, clearing and writing.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence and
///    blanks the panel.
/// 3. [`OledDriver::write()`] / [`OledDriver::clear()`] — update the panel.
///
/// Drawing with `embedded-graphics` directly is still possible through
/// [`OledDriver::display_mut()`] followed by [`OledDriver::flush()`].
///
/// # Example
///
/// ```no_run
/// use embedded_graphics::prelude::Point;
/// use wsd_oled_display::OledDriver;
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.write("Hello, World!", Point::zero()).await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Display<I2C>,
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Bind the driver to an I2C bus without talking to the panel.
    ///
    /// Every drawing call fails with [`OledError::NotInitialized`] until
    /// [`init()`](Self::init) succeeds.
    ///
    /// # Arguments
    /// * `i2c` — I2C bus, owned exclusively by the driver.
    /// * `address` — 7-bit panel address, usually [`DEFAULT_ADDRESS`](crate::DEFAULT_ADDRESS).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware and blank the panel.
    ///
    /// Sends the display initialisation command sequence over I2C, then
    /// clears whatever the panel RAM held at power-up.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond, or [`OledError::Display`] if the initial clear fails.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 initialised");

        self.clear().await
    }

    /// Blank the frame buffer and the panel.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] before [`init()`](Self::init),
    /// or [`OledError::Display`] on a bus-level failure.
    pub async fn clear(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.clear_buffer();
        self.flush().await
    }

    /// Draw `text` with its top-left corner at `position` and flush.
    ///
    /// Existing frame buffer content is kept; only the glyph pixels are
    /// lit. Text running past the panel edge is clipped.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] before [`init()`](Self::init),
    /// [`OledError::Render`] if drawing fails, or [`OledError::Display`] on a
    /// bus-level failure.
    pub async fn write(&mut self, text: &str, position: Point) -> Result<(), OledError> {
        let display = self.display_mut().ok_or(OledError::NotInitialized)?;
        render_text(display, text, position).map_err(|_| OledError::Render)?;
        self.flush().await
    }

    /// Blank the frame buffer only. The panel keeps its current image until
    /// the next [`flush()`](Self::flush).
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Send the dirty region of the frame buffer to the panel.
    ///
    /// A full 512-byte frame takes roughly 10 ms on a 400 kHz bus.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`OledError::Display`] on a bus-level failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Frame buffer as an `embedded-graphics` [`DrawTarget`], for drawing
    /// beyond plain text. `None` until [`init()`](Self::init) succeeds.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// `true` once [`init()`](Self::init) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
