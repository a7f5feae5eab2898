//! Failure modes of the text display driver.

use core::fmt;

use display_interface::DisplayError;

/// Why an [`OledDriver`](crate::OledDriver) call failed.
///
/// I2C errors reach this crate already flattened into [`DisplayError`] by
/// `display-interface-i2c`, so the bus error type does not leak into the
/// driver's signature.
#[derive(Debug)]
pub enum OledError {
    /// A flush or clear could not be sent to the panel, including the
    /// blanking flush that follows a successful init.
    Display(DisplayError),

    /// The SSD1306 rejected or never acknowledged its power-on command
    /// sequence. The driver stays uninitialised and `init()` may be retried.
    InitializationFailed,

    /// `clear`, `write` or `flush` was called before
    /// [`init()`](crate::OledDriver::init) succeeded. Nothing was sent.
    NotInitialized,

    /// Text could not be rendered into the frame buffer. The panel was not
    /// flushed.
    Render,
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "Panel transfer failed: {:?}", e),
            OledError::InitializationFailed => write!(f, "SSD1306 did not initialise"),
            OledError::NotInitialized => write!(f, "Display used before init"),
            OledError::Render => write!(f, "Text rendering failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_) => defmt::write!(f, "Panel transfer failed"),
            OledError::InitializationFailed => defmt::write!(f, "SSD1306 did not initialise"),
            OledError::NotInitialized => defmt::write!(f, "Display used before init"),
            OledError::Render => defmt::write!(f, "Text rendering failed"),
        }
    }
}
