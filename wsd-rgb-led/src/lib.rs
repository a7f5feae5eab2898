//! Async controller for a linear addressable RGB LED strip.
//!
//! This crate provides [`LedStrip`], a fixed-length pixel buffer bound to a
//! [`smart_leds`] pixel bus, with whole-strip and single-pixel color
//! updates, destructive brightness scaling, and a color-wheel rainbow
//! animation that can be cancelled between frames.
//!
//! # Architecture
//!
//! - **[`color`]** — pure helpers: [`color_wheel`] and brightness [`scale`].
//! - **[`animation`]** — [`RainbowConfig`], [`CancelToken`] and the per-frame
//!   renderer [`rainbow_frame`].
//! - **[`LedStrip`]** — owns the bus, the delay source and the buffer; every
//!   mutating call ends with exactly one bus write.
//!
//! # Quick start
//!
//! ```ignore
//! use embassy_time::{Delay, Duration};
//! use wsd_rgb_led::LedStrip;
//!
//! // `ws` is any `SmartLedsWriteAsync<Color = RGB8>` driver
//! let mut strip: LedStrip<_, _, 8> = LedStrip::new(ws, Delay)?;
//! strip.set_color((255, 0, 0)).await?;
//! strip.set_brightness(0.25).await?;
//! strip.rainbow(Duration::from_millis(20)).await?;
//! strip.clear().await?;
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on the error and
//!   outcome types, and debug logging in the animation loop.

#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod color;
mod error;
mod strip;


pub use animation::{rainbow_frame, AnimationOutcome, CancelToken, RainbowConfig, RAINBOW_FRAMES};
pub use color::{color_wheel, scale};
pub use error::LedError;
pub use strip::LedStrip;

/// Re-exported so callers can name pixels without depending on
/// `smart-leds` directly.
pub use smart_leds::RGB8;
