//! Async OLED text display driver for the SSD1306 (128×32) over I2C.
//!
//! This crate provides [`OledDriver`], a wrapper around the [`ssd1306`]
//! crate in async buffered-graphics mode with a small text API
//! (`init`, `clear`, `write`), and [`run_demo`], a two-screen bring-up demo.
//!
//! # Quick Start
//!
//! ```ignore
//! use embedded_graphics::prelude::Point;
//! use wsd_oled_display::{run_demo, DisplayConfig, OledDriver};
//!
//! let config = DisplayConfig::default();
//! // Build the I2C peripheral at `config.i2c_frequency_hz`, then:
//! let mut oled = OledDriver::new(i2c, config.address);
//! oled.init().await?;
//! oled.write("Temp 21.5C", Point::new(0, 10)).await?;
//!
//! run_demo(&mut oled, &mut embassy_time::Delay, &config).await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging and [`defmt::Format`] for
//!   [`OledError`] via [`defmt`].

#![cfg_attr(not(test), no_std)]

pub mod demo;
pub mod driver;
pub mod error;
pub mod layout;

#[cfg(test)]
mod test_support;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use demo::{run_demo, DEMO_FAREWELL, DEMO_GREETING};
pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{render_text, DisplayConfig, DEFAULT_ADDRESS, DISPLAY_HEIGHT, DISPLAY_WIDTH};
