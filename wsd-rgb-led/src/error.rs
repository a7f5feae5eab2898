//! Error types for the LED strip controller.

use core::fmt;

/// Errors that can occur when driving the LED strip.
///
/// Argument errors are detected before any pixel is touched, so a failed
/// call leaves the strip exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError<E> {
    /// The pixel bus failed to transmit the frame.
    ///
    /// The in-memory strip already holds the new values; retrying the
    /// write (e.g. via [`LedStrip::show`](crate::LedStrip::show)) resends them.
    Bus(E),

    /// An argument was outside its valid domain: brightness not in
    /// `0.0..=1.0`, or a strip constructed with zero LEDs.
    InvalidArgument,

    /// Pixel index was not below the strip length.
    IndexOutOfRange,
}

impl<E: fmt::Debug> fmt::Display for LedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedError::Bus(e) => write!(f, "Pixel bus error: {:?}", e),
            LedError::InvalidArgument => write!(f, "Invalid argument"),
            LedError::IndexOutOfRange => write!(f, "Pixel index out of range"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for LedError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            LedError::Bus(e) => defmt::write!(f, "Pixel bus error: {}", e),
            LedError::InvalidArgument => defmt::write!(f, "Invalid argument"),
            LedError::IndexOutOfRange => defmt::write!(f, "Pixel index out of range"),
        }
    }
}
